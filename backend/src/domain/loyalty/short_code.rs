//! Three-digit customer code used to address a loyalty profile.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::input::trim_input;

static SHORT_CODE_RE: OnceLock<Regex> = OnceLock::new();

fn short_code_regex() -> &'static Regex {
    SHORT_CODE_RE.get_or_init(|| {
        Regex::new("^[0-9]{3}$")
            .unwrap_or_else(|error| panic!("short code regex failed to compile: {error}"))
    })
}

/// Validation error for [`ShortCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Kod musi mieć dokładnie 3 cyfry")]
pub struct ShortCodeError {
    /// Input as received, before trimming.
    pub input: String,
}

/// Exactly three ASCII digits, e.g. `"007"`.
///
/// # Examples
///
/// ```
/// # use cafe_backend::domain::ShortCode;
/// assert_eq!(ShortCode::parse(" 042 ").map(|c| c.to_string()), Ok("042".to_owned()));
/// assert!(ShortCode::parse("12a").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Trim surrounding whitespace (and any byte-order mark) and validate the remaining text.
    ///
    /// # Errors
    ///
    /// Returns [`ShortCodeError`] unless the trimmed input is three digits.
    pub fn parse(raw: &str) -> Result<Self, ShortCodeError> {
        let trimmed = trim_input(raw);
        if short_code_regex().is_match(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(ShortCodeError {
                input: raw.to_owned(),
            })
        }
    }

    /// Borrow the validated code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
