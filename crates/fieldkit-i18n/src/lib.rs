//! Internationalization data for fieldkit fields.
//!
//! Country codes, locale identifiers, the ISO 3166-1 registry, and the
//! provider traits fields use to look up countries and session locales.

mod code;
mod data;
mod locale;
mod session;

pub use code::{CountryCode, CountryCodeError};
pub use data::{Country, IsoCountries, LocaleData};
pub use locale::{Locale, LocaleError};
pub use session::{system_locale, SessionLocale, SystemSession};
