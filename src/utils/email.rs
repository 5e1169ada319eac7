//! Email list parsing and validation for recipient import.

use regex::Regex;
use std::sync::LazyLock;

/// Accepted address grammar: ASCII local part, dot-separated domain labels,
/// final label of at least two letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Splits a pasted list into candidate addresses.
///
/// Splits on newlines first, then on commas within each line, trims
/// whitespace and drops empty pieces. Accepts one address per line,
/// comma-separated lines, or a mix of both. Order is preserved and duplicates
/// are kept (the registry reports them).
///
/// # Examples
///
/// ```ignore
/// let list = split_candidates("a@b.com, c@d.com\n\ne@f.org\r\n");
/// assert_eq!(list, vec!["a@b.com", "c@d.com", "e@f.org"]);
/// ```
pub fn split_candidates(text: &str) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns true if `email` matches the accepted address grammar.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Normalizes an address for storage and comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
