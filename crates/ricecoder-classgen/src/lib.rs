#![warn(missing_docs)]

//! Class code generation from marker-delimited templates for ricecoder
//!
//! Extracts a template block from raw text, derives the namespace and class
//! it declares, accumulates token values from the caller and generates the
//! final source with multi-line token values indented to the column of the
//! token they replace.

pub mod config;
pub mod error;
pub mod templates;

// Re-export public API
pub use config::{MarkerConfig, DEFAULT_END_MARK, DEFAULT_START_MARK};
pub use error::TemplateError;
pub use templates::{
    extract_class_name, extract_namespace_name, extract_template_code, generate, validate,
    validate_input, CodeTemplate, TokenMap, LINE_TERMINATOR,
};
