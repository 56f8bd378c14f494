//! Class template module
//!
//! Provides template block extraction, name derivation, token accumulation
//! and indentation-preserving code generation.

pub mod code_template;
pub mod extraction;
pub mod generator;
pub mod names;
pub mod tokens;

/// Line terminator used when joining extracted and generated lines
pub const LINE_TERMINATOR: &str = "\n";

// Re-export public API
pub use code_template::CodeTemplate;
pub use extraction::{extract_template_code, validate, validate_input};
pub use generator::generate;
pub use names::{extract_class_name, extract_namespace_name};
pub use tokens::TokenMap;
