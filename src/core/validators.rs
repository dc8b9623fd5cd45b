use crate::utils::error::{DemoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone pattern is valid"));

const MIN_PHONE_DIGITS: usize = 10;
const MIN_PASSWORD_LENGTH: usize = 8;

pub fn is_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Digits, spaces, dashes and parentheses with an optional leading `+`,
/// carrying at least ten digits.
pub fn is_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone) && phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Absolute URLs only; `example.com` without a scheme is rejected.
pub fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| DemoError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

pub fn is_url(url: &str) -> bool {
    match parse_url(url) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("{}", e);
            false
        }
    }
}

pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
