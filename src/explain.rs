//! Explain Output
//!
//! Structured account of a resolution run: what was asked, what was adopted,
//! which rules were skipped and why, plus the policy the field was operating
//! under. Renders to pretty JSON for scripts or a readable report for humans.

use serde::Serialize;

use fieldkit_i18n::Locale;

use crate::config::CountriesConfig;
use crate::resolve::{SkipReason, ValueOrigin, ValueResolution};

/// The configuration as it applied to the field, plus the option set size
#[derive(Debug, Clone, Serialize)]
pub struct EffectivePolicy {
    pub default_to_locale: bool,
    pub default_country: Option<String>,
    pub invalid_countries: Vec<String>,
    pub option_count: usize,
}

impl EffectivePolicy {
    pub fn from_config(config: &CountriesConfig, option_count: usize) -> Self {
        Self {
            default_to_locale: config.default_to_locale,
            default_country: config.default_country.as_ref().map(|c| c.to_string()),
            invalid_countries: config
                .invalid_countries
                .iter()
                .map(|c| c.to_string())
                .collect(),
            option_count,
        }
    }
}

/// Complete explanation of one resolution run
#[derive(Debug, Clone, Serialize)]
pub struct ExplainOutput {
    /// The candidate value as supplied
    pub input_value: String,

    /// The locale defaults were derived from
    pub locale: String,

    /// Whether any rule produced a value
    pub adopted: bool,

    /// The adopted country code, if any
    pub value: Option<String>,

    /// Which rule produced the value
    pub origin: Option<ValueOrigin>,

    /// Machine-readable skip reasons, in chain order
    pub skipped: Vec<String>,

    /// The policy in force during resolution
    pub effective_policy: EffectivePolicy,

    /// Human-readable explanation
    pub explanation: String,
}

impl ExplainOutput {
    /// Build the explanation for a finished resolution
    pub fn from_resolution(
        input: &str,
        locale: &Locale,
        resolution: &ValueResolution,
        policy: EffectivePolicy,
    ) -> Self {
        let explanation = generate_explanation(input, locale, resolution);

        Self {
            input_value: input.to_string(),
            locale: locale.to_string(),
            adopted: resolution.is_adopted(),
            value: resolution.adopted.clone(),
            origin: resolution.origin,
            skipped: resolution.skip_reason_strings(),
            effective_policy: policy,
            explanation,
        }
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as a human-readable report
    pub fn to_human(&self) -> String {
        let mut output = self.explanation.clone();

        output.push_str("\n\n--- Effective Policy ---\n");
        output.push_str(&format!(
            "Default to locale: {}\n",
            self.effective_policy.default_to_locale
        ));
        output.push_str(&format!(
            "Default country: {}\n",
            self.effective_policy
                .default_country
                .as_deref()
                .unwrap_or("(none)")
        ));
        if self.effective_policy.invalid_countries.is_empty() {
            output.push_str("Invalid countries: (none)\n");
        } else {
            output.push_str(&format!(
                "Invalid countries: {}\n",
                self.effective_policy.invalid_countries.join(", ")
            ));
        }
        output.push_str(&format!(
            "Selectable options: {}",
            self.effective_policy.option_count
        ));

        output
    }
}

fn generate_explanation(input: &str, locale: &Locale, resolution: &ValueResolution) -> String {
    let mut lines = Vec::new();

    if input.trim().is_empty() {
        lines.push("Candidate: (empty)".to_string());
    } else {
        lines.push(format!("Candidate: \"{}\"", input.trim()));
    }
    lines.push(format!("Locale: {}", locale));
    lines.push(String::new());

    match &resolution.adopted {
        Some(value) => {
            lines.push("Decision: ADOPTED".to_string());
            lines.push(format!("Value: {}", value));
            if let Some(origin) = resolution.origin {
                lines.push(format!("Origin: {}", origin.as_str()));
            }
        }
        None => {
            lines.push("Decision: NO VALUE ADOPTED".to_string());
        }
    }

    if !resolution.skipped.is_empty() {
        lines.push("Rules skipped:".to_string());
        for reason in &resolution.skipped {
            lines.push(format!("  - {}", format_reason(reason)));
        }
    }

    lines.join("\n")
}

fn format_reason(reason: &SkipReason) -> String {
    match reason {
        SkipReason::EmptyCandidate => "No candidate value was supplied".to_string(),
        SkipReason::InvalidCandidate(value) => {
            format!("Candidate '{}' is not a selectable option", value)
        }
        SkipReason::LocaleDefaultDisabled => {
            "Locale default is disabled (default_to_locale = false)".to_string()
        }
        SkipReason::NoLocaleCountry(locale) => {
            format!("No country could be derived from locale '{}'", locale)
        }
        SkipReason::InvalidLocaleCountry(code) => {
            format!("Locale country '{}' is not a selectable option", code)
        }
        SkipReason::NoConfiguredDefault => "No default_country is configured".to_string(),
        SkipReason::InvalidConfiguredDefault(code) => {
            format!("Configured default '{}' is not a selectable option", code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_policy() -> EffectivePolicy {
        EffectivePolicy {
            default_to_locale: true,
            default_country: Some("NZ".to_string()),
            invalid_countries: vec!["AU".to_string()],
            option_count: 248,
        }
    }

    #[test]
    fn test_adopted_output() {
        let resolution = ValueResolution::resolved(
            "NZ",
            ValueOrigin::LocaleDefault,
            vec![SkipReason::EmptyCandidate],
        );
        let locale: Locale = "en_NZ".parse().unwrap();
        let output = ExplainOutput::from_resolution("", &locale, &resolution, test_policy());

        assert!(output.adopted);
        assert_eq!(output.value.as_deref(), Some("NZ"));
        assert_eq!(output.locale, "en_NZ");
        assert_eq!(output.skipped, vec!["EMPTY_CANDIDATE"]);
        assert!(output.explanation.contains("Candidate: (empty)"));
        assert!(output.explanation.contains("Decision: ADOPTED"));
        assert!(output.explanation.contains("Origin: locale_default"));
        assert!(output
            .explanation
            .contains("No candidate value was supplied"));
    }

    #[test]
    fn test_unresolved_output() {
        let resolution = ValueResolution::unresolved(vec![
            SkipReason::InvalidCandidate("ZZ".to_string()),
            SkipReason::LocaleDefaultDisabled,
            SkipReason::NoConfiguredDefault,
        ]);
        let locale: Locale = "en".parse().unwrap();
        let output = ExplainOutput::from_resolution("ZZ", &locale, &resolution, test_policy());

        assert!(!output.adopted);
        assert!(output.value.is_none());
        assert!(output.explanation.contains("Candidate: \"ZZ\""));
        assert!(output.explanation.contains("Decision: NO VALUE ADOPTED"));
        assert!(output
            .explanation
            .contains("Candidate 'ZZ' is not a selectable option"));
        assert!(output
            .explanation
            .contains("Locale default is disabled (default_to_locale = false)"));
    }

    #[test]
    fn test_human_output_includes_policy() {
        let resolution = ValueResolution::resolved("NZ", ValueOrigin::Candidate, vec![]);
        let locale: Locale = "en_NZ".parse().unwrap();
        let output = ExplainOutput::from_resolution("NZ", &locale, &resolution, test_policy());

        let human = output.to_human();
        assert!(human.contains("--- Effective Policy ---"));
        assert!(human.contains("Default to locale: true"));
        assert!(human.contains("Default country: NZ"));
        assert!(human.contains("Invalid countries: AU"));
        assert!(human.contains("Selectable options: 248"));
    }

    #[test]
    fn test_human_output_empty_policy_lists() {
        let policy = EffectivePolicy {
            default_to_locale: false,
            default_country: None,
            invalid_countries: vec![],
            option_count: 249,
        };
        let resolution = ValueResolution::resolved("NZ", ValueOrigin::Candidate, vec![]);
        let locale: Locale = "en".parse().unwrap();
        let output = ExplainOutput::from_resolution("NZ", &locale, &resolution, policy);

        let human = output.to_human();
        assert!(human.contains("Default country: (none)"));
        assert!(human.contains("Invalid countries: (none)"));
    }

    #[test]
    fn test_json_output_shape() {
        let resolution = ValueResolution::resolved(
            "NZ",
            ValueOrigin::ConfiguredDefault,
            vec![SkipReason::EmptyCandidate, SkipReason::LocaleDefaultDisabled],
        );
        let locale: Locale = "mi".parse().unwrap();
        let output = ExplainOutput::from_resolution("", &locale, &resolution, test_policy());

        let json = output.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["adopted"], true);
        assert_eq!(parsed["value"], "NZ");
        assert_eq!(parsed["origin"], "configured_default");
        assert_eq!(parsed["skipped"][1], "LOCALE_DEFAULT_DISABLED");
        assert_eq!(parsed["effective_policy"]["option_count"], 248);
    }
}
