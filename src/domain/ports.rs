use crate::config::ErrorPolicy;
use crate::domain::model::StyleResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn mapfile_dir(&self) -> &str;
    fn endpoint(&self) -> &str;
    fn input_extension(&self) -> &str;
    fn output_extension(&self) -> &str;
    /// `None` waits on the server indefinitely.
    fn timeout(&self) -> Option<Duration>;
    fn error_policy(&self) -> ErrorPolicy;
}

/// Anything that can answer a GetStyles request for one layer.
///
/// Implementations must return an error for non-success statuses, so a
/// returned `StyleResponse` is always a 2xx answer.
#[async_trait]
pub trait StyleSource: Send + Sync {
    async fn fetch_style(&self, layer: &str) -> Result<StyleResponse>;
}
