//! Class template holding extracted code, derived names and tokens

use tracing::{debug, warn};

use crate::config::MarkerConfig;
use crate::error::TemplateError;
use crate::templates::{
    extraction::{extract_template_code, validate_input},
    generator,
    names::{extract_class_name, extract_namespace_name},
    tokens::TokenMap,
    LINE_TERMINATOR,
};

/// A class template extracted from raw text
///
/// Setting the code runs validation, block extraction and name derivation in
/// one step. Tokens are accumulated through [`append`](Self::append) and
/// [`append_line`](Self::append_line) and substituted by
/// [`generate`](Self::generate), which never modifies the template.
///
/// The template does no internal locking; callers sharing one instance
/// across threads must synchronise appends and generation themselves.
#[derive(Debug, Clone, Default)]
pub struct CodeTemplate {
    config: MarkerConfig,
    code: Vec<String>,
    class_name: String,
    namespace_name: String,
    tokens: TokenMap,
}

impl CodeTemplate {
    /// Create an empty template using the default markers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty template using custom markers
    pub fn with_config(config: MarkerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a template from raw text using the default markers
    pub fn from_text(text: &str) -> Result<Self, TemplateError> {
        Self::from_text_with_config(text, MarkerConfig::default())
    }

    /// Create a template from raw text using custom markers
    pub fn from_text_with_config(text: &str, config: MarkerConfig) -> Result<Self, TemplateError> {
        let mut template = Self::with_config(config);
        template.set_code(text)?;
        Ok(template)
    }

    /// Set the template from raw text
    ///
    /// Validates the text, extracts the template block and derives the class
    /// and namespace names. On failure the template is left without code;
    /// accumulated tokens are kept either way.
    ///
    /// # Errors
    /// `EmptyInput` for blank text, `MalformedInput` when the start marker
    /// is missing, `InvalidConfig` when the template's markers are unusable
    pub fn set_code(&mut self, text: &str) -> Result<(), TemplateError> {
        if let Err(err) = self
            .config
            .validate()
            .and_then(|_| validate_input(text, &self.config))
        {
            warn!("Rejected template text: {}", err);
            self.clear_code();
            return Err(err);
        }

        let extracted = extract_template_code(text, &self.config);
        let namespace_name = extract_namespace_name(&extracted);
        let class_name = extract_class_name(&extracted);

        self.code = extracted.lines().map(str::to_string).collect();
        self.namespace_name = namespace_name;
        self.class_name = class_name;

        debug!(
            "Extracted template block: {} lines, namespace '{}', class '{}'",
            self.code.len(),
            self.namespace_name,
            self.class_name
        );

        Ok(())
    }

    fn clear_code(&mut self) {
        self.code.clear();
        self.class_name.clear();
        self.namespace_name.clear();
    }

    /// Append text to a token value
    pub fn append(&mut self, key: impl Into<String>, text: &str) {
        self.tokens.append(key, text);
    }

    /// Append a line to a token value
    pub fn append_line(&mut self, key: impl Into<String>, line: &str) {
        self.tokens.append_line(key, line);
    }

    /// Generate the class code by substituting all tokens into the template
    ///
    /// An empty template generates an empty string.
    pub fn generate(&self) -> String {
        let unmatched = self.unmatched_tokens();
        if !unmatched.is_empty() {
            debug!("Tokens not present in template: {:?}", unmatched);
        }

        let output = generator::generate(&self.code, &self.tokens);
        debug!(
            "Generated class code for '{}' from {} template lines",
            self.class_name,
            self.code.len()
        );
        output
    }

    /// Token keys that occur on no template line
    pub fn unmatched_tokens(&self) -> Vec<&str> {
        self.tokens
            .keys()
            .filter(|key| key.is_empty() || !self.code.iter().any(|line| line.contains(key)))
            .collect()
    }

    /// Extracted template lines
    pub fn code(&self) -> &[String] {
        &self.code
    }

    /// Extracted template code with a line terminator after each line
    pub fn code_text(&self) -> String {
        self.code
            .iter()
            .map(|line| format!("{}{}", line, LINE_TERMINATOR))
            .collect()
    }

    /// Class name declared in the template, empty if none
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Namespace name declared in the template, empty if none
    pub fn namespace_name(&self) -> &str {
        &self.namespace_name
    }

    /// Whether a template block was extracted
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    /// Whether the template declares a class
    pub fn has_class(&self) -> bool {
        !self.class_name.is_empty()
    }

    /// Whether the template declares a namespace
    pub fn has_namespace(&self) -> bool {
        !self.namespace_name.is_empty()
    }

    /// Accumulated tokens
    pub fn tokens(&self) -> &TokenMap {
        &self.tokens
    }

    /// Markers used for extraction
    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }
}
