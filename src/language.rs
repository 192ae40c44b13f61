use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SubtransError;

/// Translation direction used when none is given.
pub const DEFAULT_DIRECTION: &str = "en:ru";

static DIRECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]{2}):([a-z]{2})$").expect("direction pattern is valid"));

/// Source and target language codes, written as `from:to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub from: String,
    pub to: String,
}

impl LanguagePair {
    pub fn new<S1: Into<String>, S2: Into<String>>(from: S1, to: S2) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Human readable direction, e.g. `en → ru`
    pub fn arrow(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("en", "ru")
    }
}

impl FromStr for LanguagePair {
    type Err = SubtransError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DIRECTION_RE
            .captures(s)
            .ok_or_else(|| SubtransError::InvalidLanguagePair(s.to_string()))?;
        Ok(Self::new(&caps[1], &caps[2]))
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.from, self.to)
    }
}
