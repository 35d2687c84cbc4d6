//! Validated ISO 3166-1 alpha-2 country codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced when constructing a [`CountryCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountryCodeError {
    #[error("country code must be exactly two letters, got '{0}'")]
    Length(String),

    #[error("country code must be ASCII alphabetic, got '{0}'")]
    NonAlphabetic(String),
}

/// An ISO 3166-1 alpha-2 country code, normalized to uppercase ASCII.
///
/// Construction validates shape only (exactly two ASCII letters). Whether
/// the code denotes an assigned country is a registry question, answered by
/// the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Trim, uppercase, and validate the two-letter shape.
    pub fn try_new(code: impl Into<String>) -> Result<Self, CountryCodeError> {
        let raw = code.into();
        let trimmed = raw.trim();
        if trimmed.chars().count() != 2 {
            return Err(CountryCodeError::Length(trimmed.to_string()));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CountryCodeError::NonAlphabetic(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Construct without validation, for codes known to be well-formed
    /// (registry tables, fixtures).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for CountryCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
