//! Template block extraction
//!
//! Locates the block of lines between the start and end markers and
//! validates raw template text before extraction.

use crate::config::MarkerConfig;
use crate::error::TemplateError;
use crate::templates::LINE_TERMINATOR;

/// Extract the lines between the first start-marker line and the next
/// end-marker line
///
/// Marker lines are recognised by prefix and are not part of the result.
/// Each collected line is followed by a line terminator. Without a start
/// marker the result is empty; without an end marker collection runs to
/// the end of the input.
///
/// # Arguments
/// * `text` - Raw text containing the template block
/// * `config` - Markers delimiting the block
pub fn extract_template_code(text: &str, config: &MarkerConfig) -> String {
    let mut code = String::new();
    let mut collecting = false;

    for line in text.lines() {
        if !collecting {
            if line.starts_with(config.start_mark.as_str()) {
                collecting = true;
            }
            continue;
        }

        if line.starts_with(config.end_mark.as_str()) {
            break;
        }

        code.push_str(line);
        code.push_str(LINE_TERMINATOR);
    }

    code
}

/// Check raw template text, reporting the specific failure
///
/// # Returns
/// `EmptyInput` for empty or whitespace-only text, `MalformedInput` when the
/// start marker appears nowhere in the text, `Ok` otherwise
pub fn validate_input(text: &str, config: &MarkerConfig) -> Result<(), TemplateError> {
    if text.trim().is_empty() {
        return Err(TemplateError::EmptyInput);
    }

    if !text.contains(config.start_mark.as_str()) {
        return Err(TemplateError::MalformedInput {
            start_mark: config.start_mark.clone(),
        });
    }

    Ok(())
}

/// Check raw template text
pub fn validate(text: &str, config: &MarkerConfig) -> bool {
    validate_input(text, config).is_ok()
}
