//! Country selector form field.
//!
//! Builds a dropdown over the ISO 3166-1 registry (or a caller-supplied
//! source), removes the configured exclusions from the option set, and runs
//! assigned values through a resolution chain: a valid provided candidate,
//! else the country derived from the active locale (when enabled), else the
//! configured default country. An assignment no rule can satisfy leaves the
//! field's value untouched.

pub mod config;
pub mod explain;
pub mod field;
pub mod mock;
pub mod resolve;

pub use config::{ConfigError, CountriesConfig};
pub use explain::{EffectivePolicy, ExplainOutput};
pub use field::CountryDropdownField;
pub use resolve::{SkipReason, ValueOrigin, ValueResolution};
