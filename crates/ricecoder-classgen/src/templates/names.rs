//! Namespace and class name derivation from template code

/// Keyword introducing a namespace declaration
const NAMESPACE_KEYWORD: &str = "namespace ";

/// Keyword introducing a class declaration
const CLASS_KEYWORD: &str = "class ";

/// Derive the namespace name declared in the template code
///
/// Takes the text between the first `namespace ` and the following `{`,
/// trimmed. Returns an empty string when either anchor is missing.
pub fn extract_namespace_name(code: &str) -> String {
    declaration_head(code, NAMESPACE_KEYWORD)
        .unwrap_or_default()
        .to_string()
}

/// Derive the class name declared in the template code
///
/// Takes the text between the first `class ` and the following `{`, then
/// drops any base list after `:`. Returns an empty string when either anchor
/// is missing.
pub fn extract_class_name(code: &str) -> String {
    let head = declaration_head(code, CLASS_KEYWORD).unwrap_or_default();
    match head.split_once(':') {
        Some((name, _bases)) => name.trim().to_string(),
        None => head.to_string(),
    }
}

/// Text between the first occurrence of `keyword` and the next `{`
fn declaration_head<'a>(code: &'a str, keyword: &str) -> Option<&'a str> {
    let start = code.find(keyword)? + keyword.len();
    let end = start + code[start..].find('{')?;
    Some(code[start..end].trim())
}
