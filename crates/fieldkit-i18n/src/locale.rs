//! Locale identifiers with an optional territory component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::code::CountryCode;

/// Errors produced when parsing a [`Locale`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("empty locale identifier")]
    Empty,

    #[error("invalid language subtag '{0}'")]
    InvalidLanguage(String),
}

/// A locale identifier: language subtag plus optional territory.
///
/// Accepts both POSIX (`en_NZ`, `en_NZ.UTF-8`, `de_DE@euro`) and BCP 47
/// (`en-NZ`, `zh-Hant-TW`) forms. Script and other subtags are skipped;
/// the first two-letter subtag after the language is the territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    territory: Option<CountryCode>,
}

impl Locale {
    pub fn new(language: impl Into<String>, territory: Option<CountryCode>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            territory,
        }
    }

    /// Parse a locale identifier.
    pub fn parse(raw: &str) -> Result<Self, LocaleError> {
        // Encoding and modifier suffixes carry no language information
        let base = raw.split(['.', '@']).next().unwrap_or("");
        let mut subtags = base.split(['_', '-']).filter(|s| !s.is_empty());

        let language = subtags.next().ok_or(LocaleError::Empty)?;
        if language.len() < 2
            || language.len() > 8
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage(language.to_string()));
        }

        let territory = subtags.find_map(|tag| CountryCode::try_new(tag).ok());

        Ok(Self {
            language: language.to_ascii_lowercase(),
            territory,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn territory(&self) -> Option<&CountryCode> {
        self.territory.as_ref()
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.territory {
            Some(territory) => write!(f, "{}_{}", self.language, territory),
            None => f.write_str(&self.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_posix_form() {
        let locale = Locale::parse("en_NZ").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.territory().unwrap().as_str(), "NZ");
    }

    #[test]
    fn test_parse_bcp47_form() {
        let locale = Locale::parse("en-NZ").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.territory().unwrap().as_str(), "NZ");
    }

    #[test]
    fn test_parse_strips_encoding_suffix() {
        let locale = Locale::parse("en_NZ.UTF-8").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.territory().unwrap().as_str(), "NZ");
    }

    #[test]
    fn test_parse_strips_modifier_suffix() {
        let locale = Locale::parse("de_DE@euro").unwrap();
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.territory().unwrap().as_str(), "DE");
    }

    #[test]
    fn test_parse_language_only() {
        let locale = Locale::parse("mi").unwrap();
        assert_eq!(locale.language(), "mi");
        assert!(locale.territory().is_none());
    }

    #[test]
    fn test_parse_skips_script_subtag() {
        let locale = Locale::parse("zh-Hant-TW").unwrap();
        assert_eq!(locale.language(), "zh");
        assert_eq!(locale.territory().unwrap().as_str(), "TW");
    }

    #[test]
    fn test_parse_ignores_numeric_region() {
        let locale = Locale::parse("es-419").unwrap();
        assert_eq!(locale.language(), "es");
        assert!(locale.territory().is_none());
    }

    #[test]
    fn test_parse_normalizes_case() {
        let locale = Locale::parse("EN_nz").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.territory().unwrap().as_str(), "NZ");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(Locale::parse(""), Err(LocaleError::Empty)));
        assert!(matches!(Locale::parse(".UTF-8"), Err(LocaleError::Empty)));
    }

    #[test]
    fn test_parse_rejects_bad_language() {
        assert!(matches!(
            Locale::parse("123_NZ"),
            Err(LocaleError::InvalidLanguage(_))
        ));
        assert!(matches!(
            Locale::parse("x"),
            Err(LocaleError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_display_uses_posix_form() {
        assert_eq!(Locale::parse("en-NZ").unwrap().to_string(), "en_NZ");
        assert_eq!(Locale::parse("mi").unwrap().to_string(), "mi");
    }

    #[test]
    fn test_serde_round_trip() {
        let locale = Locale::parse("en_NZ").unwrap();
        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, r#""en_NZ""#);

        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }
}
