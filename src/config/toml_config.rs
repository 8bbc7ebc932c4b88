use crate::config::{
    timeout_from_secs, ErrorPolicy, DEFAULT_ENDPOINT, DEFAULT_INPUT_EXTENSION,
    DEFAULT_MAPFILE_DIR, DEFAULT_OUTPUT_EXTENSION, DEFAULT_TIMEOUT_SECS,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mapfile_dir: String,
    pub extension: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mapfile_dir: DEFAULT_MAPFILE_DIR.to_string(),
            extension: DEFAULT_INPUT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub error_policy: ErrorPolicy,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| SyncError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SyncError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SyncError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for TomlConfig {
    fn mapfile_dir(&self) -> &str {
        &self.input.mapfile_dir
    }

    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn input_extension(&self) -> &str {
        &self.input.extension
    }

    fn output_extension(&self) -> &str {
        &self.output.extension
    }

    fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.source.timeout_secs)
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.run.error_policy
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_path("input.mapfile_dir", &self.input.mapfile_dir)?;
        validation::validate_extension("input.extension", &self.input.extension)?;
        validation::validate_extension("output.extension", &self.output.extension)?;
        validation::validate_distinct_extensions(&self.input.extension, &self.output.extension)
    }
}
