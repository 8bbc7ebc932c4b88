#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAPFILE_DIR: &str = "../mapfiles";
pub const DEFAULT_ENDPOINT: &str = "https://wms.geo.admin.ch/";
pub const DEFAULT_INPUT_EXTENSION: &str = "map";
pub const DEFAULT_OUTPUT_EXTENSION: &str = "sld";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// What to do when a single map file fails to sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failure; later files are not attempted.
    #[default]
    Halt,
    /// Record the failure and move on to the next file.
    Continue,
}

/// `0` disables the timeout.
pub(crate) fn timeout_from_secs(secs: u64) -> Option<std::time::Duration> {
    (secs > 0).then(|| std::time::Duration::from_secs(secs))
}
