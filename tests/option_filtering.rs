//! Option set construction tests
//!
//! Covers how the selectable option set is built: the registry-backed
//! default source, the invalid-country exclusions, caller-supplied sources,
//! and the valid/invalid partition the field enforces.

use fieldkit_countries::mock::{MockData, MockSession};
use fieldkit_countries::{CountriesConfig, CountryDropdownField};
use fieldkit_forms::{OptionField, OptionSet};

fn anzac_data() -> MockData {
    MockData::new()
        .with_country("AU", "Australia")
        .with_country("NZ", "New Zealand")
}

fn field_with_config(config: CountriesConfig) -> CountryDropdownField<MockData, MockSession> {
    CountryDropdownField::build(
        "Country",
        None,
        OptionSet::new(),
        "",
        config,
        anzac_data(),
        MockSession::new(),
    )
}

fn config_excluding(codes: &[&str]) -> CountriesConfig {
    CountriesConfig {
        invalid_countries: codes.iter().map(|c| c.parse().unwrap()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_default_source_covers_registry() {
    let f = field_with_config(CountriesConfig::default());

    let values: Vec<&str> = f.source().values().collect();
    assert_eq!(values, vec!["AU", "NZ"]);
    assert_eq!(f.source().label("AU"), Some("Australia"));
    assert_eq!(f.source().label("NZ"), Some("New Zealand"));
}

#[test]
fn test_invalid_countries_removed_from_default_source() {
    let f = field_with_config(config_excluding(&["AU"]));

    let values: Vec<&str> = f.source().values().collect();
    assert_eq!(values, vec!["NZ"]);
}

#[test]
fn test_excluding_every_country_leaves_no_options() {
    let mut f = field_with_config(config_excluding(&["AU", "NZ"]));

    assert!(f.source().is_empty());

    // With nothing selectable, no candidate can ever be adopted
    f.set_value("NZ");
    assert_eq!(f.value(), None);
}

#[test]
fn test_custom_source_bypasses_exclusions() {
    let source: OptionSet = [("XK", "Kosovo"), ("NZ", "New Zealand")]
        .into_iter()
        .collect();
    let f = CountryDropdownField::build(
        "Country",
        None,
        source,
        "",
        config_excluding(&["XK"]),
        anzac_data(),
        MockSession::new(),
    );

    assert!(f.source().contains("XK"));
    assert_eq!(f.source().len(), 2);
}

#[test]
fn test_custom_source_widens_valid_values() {
    let source: OptionSet = [("XK", "Kosovo")].into_iter().collect();
    let mut f = CountryDropdownField::build(
        "Country",
        None,
        source,
        "",
        CountriesConfig::default(),
        anzac_data(),
        MockSession::new(),
    );

    // Validation follows the installed source, not the registry
    f.set_value("XK");
    assert_eq!(f.value(), Some("XK"));

    f.set_value("NZ");
    assert_eq!(f.value(), Some("XK"));
}

#[test]
fn test_empty_source_assignment_restores_filtered_default() {
    let source: OptionSet = [("XK", "Kosovo")].into_iter().collect();
    let mut f = CountryDropdownField::build(
        "Country",
        None,
        source,
        "",
        config_excluding(&["AU"]),
        anzac_data(),
        MockSession::new(),
    );
    assert!(f.source().contains("XK"));

    f.set_source(OptionSet::new());

    let values: Vec<&str> = f.source().values().collect();
    assert_eq!(values, vec!["NZ"]);
}

#[test]
fn test_valid_values_partition() {
    let f = field_with_config(config_excluding(&["AU"]));

    assert_eq!(f.valid_values(), vec!["NZ"]);
    assert!(f.is_valid_value("NZ"));
    assert!(!f.is_valid_value("AU"));
    assert!(!f.is_valid_value("ZZ"));
    assert!(!f.is_valid_value(""));
}

#[test]
fn test_source_preserves_registry_order() {
    let data = MockData::new()
        .with_country("NZ", "New Zealand")
        .with_country("AU", "Australia")
        .with_country("DE", "Germany");
    let f = CountryDropdownField::build(
        "Country",
        None,
        OptionSet::new(),
        "",
        CountriesConfig::default(),
        data,
        MockSession::new(),
    );

    let values: Vec<&str> = f.source().values().collect();
    assert_eq!(values, vec!["NZ", "AU", "DE"]);
}

#[test]
fn test_builtin_registry_field_excludes_configured_codes() {
    let config = config_excluding(&["AQ", "UM"]);
    let f = CountryDropdownField::new("Country", config);

    assert!(f.source().contains("NZ"));
    assert!(f.source().contains("AU"));
    assert!(!f.source().contains("AQ"));
    assert!(!f.source().contains("UM"));
    assert_eq!(f.source().len(), 247);
}

#[test]
fn test_field_reports_composite_type() {
    let f = field_with_config(CountriesConfig::default());
    assert_eq!(f.field_type(), "countrydropdown dropdown");
    assert_eq!(f.name(), "Country");
}
