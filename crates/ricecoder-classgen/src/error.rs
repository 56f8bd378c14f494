//! Error types for class template handling

use thiserror::Error;

/// Errors that can occur while loading a class template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template text is empty or contains only whitespace
    #[error("Template text is empty")]
    EmptyInput,

    /// Template text does not contain the start marker
    #[error("Malformed template text: start marker '{start_mark}' not found")]
    MalformedInput {
        /// The start marker that was searched for
        start_mark: String,
    },

    /// Marker configuration cannot be used for extraction
    #[error("Invalid marker configuration: {0}")]
    InvalidConfig(String),

    /// Marker configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}
