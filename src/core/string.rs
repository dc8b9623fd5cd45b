//! String helpers. Lengths and positions count `char`s, so multi-byte text
//! is never split inside a code point.

const ELLIPSIS: &str = "...";

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Case-insensitive; only alphanumeric characters take part in the comparison.
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

pub fn truncate(s: &str, max_length: usize) -> String {
    if s.chars().count() <= max_length {
        return s.to_string();
    }
    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut result: String = s.chars().take(keep).collect();
    result.push_str(ELLIPSIS);
    result
}
