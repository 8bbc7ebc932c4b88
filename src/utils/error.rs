use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("WMS server returned {status} for layer '{layer}'")]
    HttpStatusError { layer: String, status: u16 },

    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Malformed style document: {message}")]
    MalformedDocumentError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Invalid request URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("{failed} of {total} map files failed to sync")]
    BatchFailed { failed: usize, total: usize },
}

impl SyncError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SyncError::ConfigError { .. }
                | SyncError::InvalidConfigValueError { .. }
                | SyncError::ConfigValidationError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SyncError::TransportError(_) => "Check network connectivity and the --endpoint value",
            SyncError::HttpStatusError { .. } => {
                "Verify the layer exists on the WMS server, or rerun with --keep-going"
            }
            SyncError::XmlError(_) | SyncError::MalformedDocumentError { .. } => {
                "The server sent an invalid SLD document; report it upstream or rerun with --keep-going"
            }
            SyncError::IoError(_) | SyncError::WalkError(_) => {
                "Check that the map directory exists and is writable"
            }
            SyncError::UrlError(_) => "Check the --endpoint value",
            SyncError::BatchFailed { .. } => "Inspect the logged failures above",
            _ => "Fix the configuration and try again",
        }
    }

    /// Process exit code for this error: 2 for configuration, 3 for
    /// filesystem, 1 for everything that went wrong while syncing.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            return 2;
        }
        match self {
            SyncError::IoError(_) | SyncError::WalkError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
