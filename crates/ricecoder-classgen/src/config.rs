//! Marker configuration for template block extraction

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Default line prefix opening a template block
pub const DEFAULT_START_MARK: &str = "#";

/// Default line prefix closing a template block
pub const DEFAULT_END_MARK: &str = "#end";

/// Line-prefix markers delimiting the template block inside raw text
///
/// Each template owns its own configuration, so templates using different
/// markers can be processed side by side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkerConfig {
    /// Prefix of the line that opens the block
    pub start_mark: String,
    /// Prefix of the line that closes the block
    pub end_mark: String,
}

impl MarkerConfig {
    /// Create a marker configuration with custom markers
    pub fn new(start_mark: impl Into<String>, end_mark: impl Into<String>) -> Self {
        Self {
            start_mark: start_mark.into(),
            end_mark: end_mark.into(),
        }
    }

    /// Parse a marker configuration from YAML
    ///
    /// Missing fields fall back to the defaults. The parsed configuration is
    /// validated before it is returned.
    pub fn from_yaml_str(content: &str) -> Result<Self, TemplateError> {
        let config: MarkerConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both markers are usable
    ///
    /// An empty marker would be a prefix of every line.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.start_mark.is_empty() {
            return Err(TemplateError::InvalidConfig(
                "start_mark cannot be empty".to_string(),
            ));
        }

        if self.end_mark.is_empty() {
            return Err(TemplateError::InvalidConfig(
                "end_mark cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            start_mark: DEFAULT_START_MARK.to_string(),
            end_mark: DEFAULT_END_MARK.to_string(),
        }
    }
}
