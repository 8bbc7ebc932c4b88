use crate::domain::model::StyleResponse;
use crate::domain::ports::StyleSource;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const WMS_SERVICE: &str = "WMS";
const WMS_VERSION: &str = "1.0.0";
const GET_STYLES: &str = "GetStyles";

/// GetStyles client for a single WMS endpoint.
#[derive(Debug, Clone)]
pub struct WmsClient {
    endpoint: Url,
    client: Client,
}

impl WmsClient {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint,
            client: builder.build()?,
        })
    }

    /// The GetStyles URL for `layer`. Query pairs already present on the
    /// endpoint are kept.
    pub fn request_url(&self, layer: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("SERVICE", WMS_SERVICE)
            .append_pair("VERSION", WMS_VERSION)
            .append_pair("REQUEST", GET_STYLES)
            .append_pair("LAYERS", layer);
        url
    }
}

#[async_trait]
impl StyleSource for WmsClient {
    async fn fetch_style(&self, layer: &str) -> Result<StyleResponse> {
        let url = self.request_url(layer);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Layer {} answered with {}", layer, status);

        if !status.is_success() {
            return Err(SyncError::HttpStatusError {
                layer: layer.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(StyleResponse { content_type, body })
    }
}
