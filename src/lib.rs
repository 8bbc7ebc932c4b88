pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{discovery::discover_map_files, http::WmsClient, storage::LocalStorage};
pub use config::{toml_config::TomlConfig, ErrorPolicy};
pub use core::{sld, synchronizer::StyleSynchronizer};
pub use domain::model::{MapFile, StyleResponse, SyncOutcome, SyncReport};
pub use domain::ports::ConfigProvider;
pub use utils::error::{Result, SyncError};
