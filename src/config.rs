use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Default maximum offset, in canvas units, applied to template nodes.
pub const DEFAULT_TEMPLATE_JITTER: f64 = 20.0;

/// Settings of one editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Upper bound on history entries. `None` keeps the whole session.
    pub max_history: Option<usize>,
    /// Maximum per-axis offset applied to each node when a template is applied.
    pub template_jitter: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: None,
            template_jitter: DEFAULT_TEMPLATE_JITTER,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Could not read file '{}': {}", path, e)))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2.0 * self.template_jitter).is_finite() || self.template_jitter < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "templateJitter must be a non-negative number whose span fits in an f64 (got {})",
                self.template_jitter
            )));
        }
        if self.max_history == Some(0) {
            return Err(ConfigError::Invalid(
                "maxHistory must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
