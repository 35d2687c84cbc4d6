//! Value Resolution Types
//!
//! The outcome of running a candidate value through the resolution chain:
//! which code (if any) was adopted, which rule produced it, and which
//! rules were skipped along the way with structured reasons.

use serde::{Deserialize, Serialize};

/// Rule of the resolution chain that produced the adopted value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueOrigin {
    /// The provided candidate was valid and adopted directly
    Candidate,
    /// The value was derived from the active locale
    LocaleDefault,
    /// The configured default country was adopted
    ConfiguredDefault,
}

impl ValueOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueOrigin::Candidate => "candidate",
            ValueOrigin::LocaleDefault => "locale_default",
            ValueOrigin::ConfiguredDefault => "configured_default",
        }
    }
}

/// Reason a rule in the resolution chain was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum SkipReason {
    /// No candidate value was supplied
    EmptyCandidate,

    /// Candidate is not present in the current option set
    InvalidCandidate(String),

    /// Locale derivation is disabled in the configuration
    LocaleDefaultDisabled,

    /// The active locale carries no recognizable country
    NoLocaleCountry(String),

    /// The locale's country is not present in the current option set
    InvalidLocaleCountry(String),

    /// No default_country is configured
    NoConfiguredDefault,

    /// The configured default is not present in the current option set
    InvalidConfiguredDefault(String),
}

impl SkipReason {
    /// Convert to a machine-readable string for scripted consumers
    pub fn to_machine_string(&self) -> String {
        match self {
            SkipReason::EmptyCandidate => "EMPTY_CANDIDATE".to_string(),
            SkipReason::InvalidCandidate(value) => {
                format!("INVALID_CANDIDATE:{}", value)
            }
            SkipReason::LocaleDefaultDisabled => "LOCALE_DEFAULT_DISABLED".to_string(),
            SkipReason::NoLocaleCountry(locale) => {
                format!("NO_LOCALE_COUNTRY:{}", locale)
            }
            SkipReason::InvalidLocaleCountry(code) => {
                format!("INVALID_LOCALE_COUNTRY:{}", code)
            }
            SkipReason::NoConfiguredDefault => "NO_CONFIGURED_DEFAULT".to_string(),
            SkipReason::InvalidConfiguredDefault(code) => {
                format!("INVALID_CONFIGURED_DEFAULT:{}", code)
            }
        }
    }
}

/// Result of resolving a candidate value against a field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueResolution {
    /// The adopted country code, if any rule produced one
    pub adopted: Option<String>,

    /// Which rule produced the adopted value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<ValueOrigin>,

    /// Rules that were consulted and skipped, in chain order
    pub skipped: Vec<SkipReason>,
}

impl ValueResolution {
    /// Create a resolution that adopted a value
    pub fn resolved(
        code: impl Into<String>,
        origin: ValueOrigin,
        skipped: Vec<SkipReason>,
    ) -> Self {
        Self {
            adopted: Some(code.into()),
            origin: Some(origin),
            skipped,
        }
    }

    /// Create a resolution where no rule produced a value
    pub fn unresolved(skipped: Vec<SkipReason>) -> Self {
        Self {
            adopted: None,
            origin: None,
            skipped,
        }
    }

    /// Whether any rule produced a value
    pub fn is_adopted(&self) -> bool {
        self.adopted.is_some()
    }

    /// Get skip reasons as machine-readable strings
    pub fn skip_reason_strings(&self) -> Vec<String> {
        self.skipped.iter().map(|r| r.to_machine_string()).collect()
    }
}
