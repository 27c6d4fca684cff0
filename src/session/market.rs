use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static MARKET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("market pattern is valid"));

/// ISO 3166-1 alpha-2 country code, always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Market(String);

impl Market {
    /// `None` unless the input is exactly two ASCII letters.
    pub fn parse(code: &str) -> Option<Self> {
        MARKET_PATTERN
            .is_match(code)
            .then(|| Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
