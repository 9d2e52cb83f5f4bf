//! Keyword normalization and validation.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum keyword length in characters.
pub const MAX_KEYWORD_LEN: usize = 15;

/// Words taken by static routes; a keyword with this name could never be resolved.
pub const RESERVED_KEYWORDS: &[&str] = &["shorten"];

/// Compiled regex for accepted keywords.
static KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]{1,15}$").unwrap());

/// Trims and lowercases a raw model answer and checks it is a usable keyword.
///
/// # Rules
///
/// - Not empty after trimming
/// - At most 15 characters
/// - No whitespace, including inner newlines
/// - Lowercase ASCII letters only
/// - Not one of [`RESERVED_KEYWORDS`]
///
/// Returns `None` when any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_keyword("  Garden\n"), Some("garden".to_string()));
/// assert_eq!(normalize_keyword("two words"), None);
/// ```
pub fn normalize_keyword(raw: &str) -> Option<String> {
    let keyword = raw.trim().to_lowercase();

    if keyword.is_empty() || keyword.chars().count() > MAX_KEYWORD_LEN {
        return None;
    }

    if keyword.chars().any(char::is_whitespace) {
        return None;
    }

    if RESERVED_KEYWORDS.contains(&keyword.as_str()) {
        return None;
    }

    KEYWORD_REGEX.is_match(&keyword).then_some(keyword)
}
