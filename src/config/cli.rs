use crate::config::{
    timeout_from_secs, ErrorPolicy, DEFAULT_ENDPOINT, DEFAULT_INPUT_EXTENSION,
    DEFAULT_MAPFILE_DIR, DEFAULT_OUTPUT_EXTENSION, DEFAULT_TIMEOUT_SECS,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "style-fetcher")]
#[command(about = "Fetch SLD styles from a WMS server for every mapfile in a directory")]
pub struct CliConfig {
    /// Directory searched recursively for map files
    #[arg(long, default_value = DEFAULT_MAPFILE_DIR)]
    pub mapfile_dir: String,

    /// WMS endpoint answering GetStyles requests
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_INPUT_EXTENSION)]
    pub input_extension: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_EXTENSION)]
    pub output_extension: String,

    /// Per-request timeout in seconds, 0 to wait forever
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Keep syncing the remaining files after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Load settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    /// List the files and request URLs without fetching anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn mapfile_dir(&self) -> &str {
        &self.mapfile_dir
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn input_extension(&self) -> &str {
        &self.input_extension
    }

    fn output_extension(&self) -> &str {
        &self.output_extension
    }

    fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.timeout_secs)
    }

    fn error_policy(&self) -> ErrorPolicy {
        if self.keep_going {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Halt
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("mapfile_dir", &self.mapfile_dir)?;
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_extension("input_extension", &self.input_extension)?;
        validation::validate_extension("output_extension", &self.output_extension)?;
        validation::validate_distinct_extensions(&self.input_extension, &self.output_extension)
    }
}
