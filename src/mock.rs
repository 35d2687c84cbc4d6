//! Mock Implementations
//!
//! Deterministic stand-ins for the country registry and session locale,
//! used by tests and by the CLI when the caller pins the locale. Both are
//! plain value types built up with `with_*` methods.

use fieldkit_i18n::{Country, CountryCode, Locale, LocaleData, SessionLocale};

/// In-memory country registry with a caller-defined set of entries
#[derive(Debug, Clone, Default)]
pub struct MockData {
    countries: Vec<Country>,
}

impl MockData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a country to the registry
    pub fn with_country(mut self, code: &str, name: &str) -> Self {
        self.countries.push(Country {
            code: CountryCode::new_unchecked(code),
            name: name.to_string(),
        });
        self
    }
}

impl LocaleData for MockData {
    fn countries(&self) -> Vec<Country> {
        self.countries.clone()
    }
}

/// Session with explicit user and fallback locales
#[derive(Debug, Clone, Default)]
pub struct MockSession {
    user: Option<Locale>,
    default: Option<Locale>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale of the signed-in user
    pub fn with_user_locale(mut self, locale: Locale) -> Self {
        self.user = Some(locale);
        self
    }

    /// Set the fallback locale used when no user locale is present
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default = Some(locale);
        self
    }
}

impl SessionLocale for MockSession {
    fn user_locale(&self) -> Option<Locale> {
        self.user.clone()
    }

    /// Falls back to a language-only locale, which derives no country
    fn default_locale(&self) -> Locale {
        self.default
            .clone()
            .unwrap_or_else(|| Locale::new("en", None))
    }
}
