//! Session and system locale resolution.

use crate::code::CountryCode;
use crate::locale::Locale;

/// Where the active locale comes from.
///
/// The session user's locale wins when a user is present; the process
/// default applies otherwise.
pub trait SessionLocale {
    /// The authenticated user's locale, if a user is present.
    fn user_locale(&self) -> Option<Locale>;

    /// The process default locale used when no user is present.
    fn default_locale(&self) -> Locale {
        system_locale()
    }
}

/// Session backed by the operating system: no authenticated user, OS
/// locale as the process default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSession;

impl SessionLocale for SystemSession {
    fn user_locale(&self) -> Option<Locale> {
        None
    }
}

/// The operating system locale, falling back to `en_US` when the OS
/// reports nothing usable.
pub fn system_locale() -> Locale {
    sys_locale::get_locale()
        .and_then(|raw| Locale::parse(&raw).ok())
        .unwrap_or_else(|| Locale::new("en", Some(CountryCode::new_unchecked("US"))))
}
