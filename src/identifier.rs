//! Identifier validation
//!
//! A well-formed identifier is one or more `.`-separated segments. Each segment
//! starts with a letter or `_` and continues with letters, digits, `_` or a
//! backtick (generic arity marker, e.g. ``List`1``).

/// Check whether `value` is a well-formed dotted identifier
///
/// Total function: never fails, never allocates.
///
/// # Examples
/// ```
/// use dme::identifier::is_valid_identifier;
///
/// assert!(is_valid_identifier("System.Collections.List`1"));
/// assert!(!is_valid_identifier("1bad"));
/// assert!(!is_valid_identifier("Trailing."));
/// ```
pub fn is_valid_identifier(value: &str) -> bool {
    value.split('.').all(is_valid_segment)
}

fn is_valid_segment(segment: &str) -> bool {
    if segment.trim().is_empty() {
        return false;
    }

    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '`')
}
