use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::evaluator::{Evaluator, DEFAULT_MAX_BRANCHES};
use crate::session::DEFAULT_MAX_ATTEMPTS;

pub const DEFAULT_PRECISION: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Branches allowed in one parallel group.
    pub max_branches: usize,
    /// Measurements tried before giving up on the unknown.
    pub max_attempts: usize,
    /// Decimals shown by the text report.
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_branches: DEFAULT_MAX_BRANCHES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Settings {
    /// Loads settings from a `.json`, `.yaml` or `.yml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        trace!(path = %path.display(), "loading settings");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let settings: Settings = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            _ => return Err(ConfigError::unsupported_format(extension)),
        };

        settings.validate()?;
        debug!(?settings, "loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_branches == 0 {
            return Err(ConfigError::invalid_value(
                "max_branches",
                "must be at least 1",
            ));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::invalid_value(
                "max_attempts",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new().with_max_branches(self.max_branches)
    }
}
