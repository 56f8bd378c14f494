//! Class code generation
//!
//! Substitutes token values into template lines. A line containing a token
//! key is replaced as a whole by the token value, with every value line
//! indented to the column at which the key appeared.

use tracing::trace;

use crate::templates::tokens::TokenMap;
use crate::templates::LINE_TERMINATOR;

/// Generate code from template lines and accumulated tokens
///
/// Tokens are tried against each line in insertion order. Once a token has
/// replaced a line, later tokens are searched for in the replacement text.
/// The result is deterministic for a given template and token state.
///
/// # Arguments
/// * `code` - Template lines, without line terminators
/// * `tokens` - Accumulated token values
///
/// # Returns
/// The generated lines joined with the line terminator
pub fn generate(code: &[String], tokens: &TokenMap) -> String {
    let mut output = Vec::with_capacity(code.len());

    for (index, line) in code.iter().enumerate() {
        let mut current = line.clone();

        for (key, value) in tokens.iter() {
            if let Some(expanded) = expand_token(&current, key, value) {
                trace!("Substituted token {} on template line {}", key, index + 1);
                current = expanded;
            }
        }

        output.push(current);
    }

    output.join(LINE_TERMINATOR)
}

/// Replace `line` with the indented lines of `value` if `line` contains `key`
///
/// Returns `None` when the key does not occur. Empty keys never match.
pub(crate) fn expand_token(line: &str, key: &str, value: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }

    let index = line.find(key)?;
    let padding = " ".repeat(column_of(line, index));

    let mut value_lines: Vec<&str> = value.lines().collect();
    while value_lines.last().is_some_and(|l| l.is_empty()) {
        value_lines.pop();
    }

    let expanded: Vec<String> = value_lines
        .iter()
        .map(|l| format!("{}{}", padding, l))
        .collect();

    Some(expanded.join(LINE_TERMINATOR))
}

/// Character column of byte offset `index`, counted from the start of its line
fn column_of(text: &str, index: usize) -> usize {
    let line_start = text[..index].rfind('\n').map_or(0, |pos| pos + 1);
    text[line_start..index].chars().count()
}
