//! Country Dropdown Field
//!
//! A dropdown whose option set is the country registry minus the configured
//! exclusions, and whose value assignment runs a resolution chain instead of
//! storing blindly:
//!
//! 1. a valid provided candidate is adopted as-is
//! 2. otherwise, if enabled, the country derived from the active locale
//! 3. otherwise the configured default country
//!
//! A rule whose value is missing or not selectable is skipped silently and
//! the chain moves on. If no rule produces a value the field keeps whatever
//! value it already had.

use fieldkit_forms::{DropdownField, OptionField, OptionSet};
use fieldkit_i18n::{IsoCountries, Locale, LocaleData, SessionLocale, SystemSession};

use crate::config::CountriesConfig;
use crate::explain::{EffectivePolicy, ExplainOutput};
use crate::resolve::{SkipReason, ValueOrigin, ValueResolution};

/// A country selector backed by a registry and a session locale
#[derive(Debug, Clone)]
pub struct CountryDropdownField<D = IsoCountries, S = SystemSession> {
    base: DropdownField,
    config: CountriesConfig,
    data: D,
    session: S,
}

impl CountryDropdownField<IsoCountries, SystemSession> {
    /// Create a field over the built-in registry and the process session
    pub fn new(name: impl Into<String>, config: CountriesConfig) -> Self {
        Self::build(
            name,
            None,
            OptionSet::new(),
            "",
            config,
            IsoCountries,
            SystemSession,
        )
    }
}

impl<D: LocaleData, S: SessionLocale> CountryDropdownField<D, S> {
    /// Create a field with explicit data and session backends.
    ///
    /// An empty `source` selects the filtered registry; a non-empty one is
    /// used verbatim. The `value` is run through the resolution chain, so an
    /// empty candidate may still produce a default value.
    pub fn build(
        name: impl Into<String>,
        title: Option<&str>,
        source: OptionSet,
        value: &str,
        config: CountriesConfig,
        data: D,
        session: S,
    ) -> Self {
        let mut base = DropdownField::new(name);
        if let Some(title) = title {
            base.set_title(title);
        }

        let mut field = Self {
            base,
            config,
            data,
            session,
        };
        field.set_source(source);
        field.set_value(value);
        field
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn title(&self) -> Option<&str> {
        self.base.title()
    }

    pub fn config(&self) -> &CountriesConfig {
        &self.config
    }

    /// Type identifier consumed by the template layer for styling
    pub fn field_type(&self) -> &'static str {
        "countrydropdown dropdown"
    }

    /// The locale defaults are derived from: the user's, else the session's
    pub fn current_locale(&self) -> Locale {
        self.session
            .user_locale()
            .unwrap_or_else(|| self.session.default_locale())
    }

    /// Whether a candidate matches a selectable option
    pub fn is_valid_value(&self, value: &str) -> bool {
        self.valid_values().contains(&value.trim())
    }

    /// Run a candidate through the resolution chain without mutating the field
    pub fn resolve(&self, candidate: &str) -> ValueResolution {
        let mut skipped = Vec::new();

        // Check provided candidate
        let candidate = candidate.trim();
        if candidate.is_empty() {
            skipped.push(SkipReason::EmptyCandidate);
        } else if !self.is_valid_value(candidate) {
            skipped.push(SkipReason::InvalidCandidate(candidate.to_string()));
        } else {
            return ValueResolution::resolved(candidate, ValueOrigin::Candidate, skipped);
        }

        // Default to locale, if enabled
        if !self.config.default_to_locale {
            skipped.push(SkipReason::LocaleDefaultDisabled);
        } else {
            let locale = self.current_locale();
            match self.data.country_from_locale(&locale) {
                None => skipped.push(SkipReason::NoLocaleCountry(locale.to_string())),
                Some(code) if !self.is_valid_value(code.as_str()) => {
                    skipped.push(SkipReason::InvalidLocaleCountry(code.to_string()));
                }
                Some(code) => {
                    return ValueResolution::resolved(code, ValueOrigin::LocaleDefault, skipped);
                }
            }
        }

        // Configured default country
        match &self.config.default_country {
            None => skipped.push(SkipReason::NoConfiguredDefault),
            Some(code) if !self.is_valid_value(code.as_str()) => {
                skipped.push(SkipReason::InvalidConfiguredDefault(code.to_string()));
            }
            Some(code) => {
                return ValueResolution::resolved(
                    code.as_str(),
                    ValueOrigin::ConfiguredDefault,
                    skipped,
                );
            }
        }

        ValueResolution::unresolved(skipped)
    }

    /// Explain how a candidate would resolve against this field
    pub fn explain(&self, candidate: &str) -> ExplainOutput {
        let resolution = self.resolve(candidate);
        let policy = EffectivePolicy::from_config(&self.config, self.source().len());
        ExplainOutput::from_resolution(candidate, &self.current_locale(), &resolution, policy)
    }

    /// The registry minus the configured exclusions
    fn default_source(&self) -> OptionSet {
        self.data
            .countries()
            .into_iter()
            .filter(|c| !self.config.is_invalid(&c.code))
            .map(|c| (String::from(c.code), c.name))
            .collect()
    }

    fn apply(&mut self, resolution: &ValueResolution) {
        match &resolution.adopted {
            Some(code) => {
                tracing::debug!(
                    code = %code,
                    origin = ?resolution.origin,
                    "adopting country value"
                );
                self.base.set_value(code);
            }
            None => {
                tracing::debug!(
                    skipped = ?resolution.skip_reason_strings(),
                    "no rule produced a value, keeping current"
                );
            }
        }
    }
}

impl<D: LocaleData, S: SessionLocale> OptionField for CountryDropdownField<D, S> {
    /// An empty source selects the filtered registry
    fn set_source(&mut self, source: OptionSet) {
        if source.is_empty() {
            self.base.set_source(self.default_source());
        } else {
            self.base.set_source(source);
        }
    }

    fn source(&self) -> &OptionSet {
        self.base.source()
    }

    /// Runs the resolution chain; the stored value only changes when a rule
    /// produces one
    fn set_value(&mut self, value: &str) {
        let resolution = self.resolve(value);
        self.apply(&resolution);
    }

    fn value(&self) -> Option<&str> {
        self.base.value()
    }
}
