//! The base dropdown widget and the seam wrappers build on.

use serde::{Deserialize, Serialize};

use crate::options::OptionSet;

/// Behavior shared by fields whose value is chosen from an option set.
///
/// Wrapper fields layer selection policy on top of this seam: they decide
/// which source and value to pass, while the implementation owns storage
/// and any assignment-time normalization.
pub trait OptionField {
    /// Replace the option source.
    fn set_source(&mut self, source: OptionSet);

    /// The current option source.
    fn source(&self) -> &OptionSet;

    /// Assign the field value.
    fn set_value(&mut self, value: &str);

    /// The currently assigned value, if any.
    fn value(&self) -> Option<&str>;

    /// The values a submission may legally carry.
    fn valid_values(&self) -> Vec<&str> {
        self.source().values().collect()
    }
}

/// A plain single-select dropdown field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropdownField {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(default)]
    source: OptionSet,

    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl DropdownField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Type identifier consumed by the template layer for styling.
    pub fn field_type(&self) -> &'static str {
        "dropdown"
    }
}

impl OptionField for DropdownField {
    fn set_source(&mut self, source: OptionSet) {
        self.source = source;
    }

    fn source(&self) -> &OptionSet {
        &self.source
    }

    /// Stores the value trimmed of surrounding whitespace.
    fn set_value(&mut self, value: &str) {
        self.value = Some(value.trim().to_string());
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_source() -> OptionSet {
        [("AU", "Australia"), ("NZ", "New Zealand")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = DropdownField::new("Country");
        assert_eq!(field.name(), "Country");
        assert_eq!(field.title(), None);
        assert_eq!(field.value(), None);
        assert!(field.source().is_empty());
    }

    #[test]
    fn test_set_source_replaces_options() {
        let mut field = DropdownField::new("Country");
        field.set_source(sample_source());
        assert_eq!(field.source().len(), 2);

        field.set_source([("DE", "Germany")].into_iter().collect());
        assert_eq!(field.source().len(), 1);
        assert!(field.source().contains("DE"));
    }

    #[test]
    fn test_set_value_trims_whitespace() {
        let mut field = DropdownField::new("Country");
        field.set_value(" NZ ");
        assert_eq!(field.value(), Some("NZ"));
    }

    #[test]
    fn test_valid_values_follow_source() {
        let mut field = DropdownField::new("Country");
        assert!(field.valid_values().is_empty());

        field.set_source(sample_source());
        assert_eq!(field.valid_values(), vec!["AU", "NZ"]);
    }

    #[test]
    fn test_field_type() {
        let field = DropdownField::new("Country");
        assert_eq!(field.field_type(), "dropdown");
    }

    #[test]
    fn test_title_assignment() {
        let mut field = DropdownField::new("Country");
        field.set_title("Country of residence");
        assert_eq!(field.title(), Some("Country of residence"));
    }
}
