use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display languages offered by the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
    Jp,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale code: {0:?}")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// Selector order.
    pub const ALL: [Locale; 3] = [Locale::Ko, Locale::En, Locale::Jp];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Jp => "jp",
        }
    }

    /// Name of the language written in that language.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::Ko => "한국어",
            Locale::En => "English",
            Locale::Jp => "日本語",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Owner of the active locale. The UI context implements this; tests use fakes.
pub trait LocaleStore {
    fn locale(&self) -> Locale;
    fn set_locale(&mut self, locale: Locale);
}

/// Handles a selection from the language dropdown.
///
/// The store is written exactly once when `code` is known and left alone
/// otherwise.
pub fn select_language<S: LocaleStore + ?Sized>(
    store: &mut S,
    code: &str,
) -> Result<Locale, UnknownLocale> {
    let locale = code.parse::<Locale>()?;
    store.set_locale(locale);
    Ok(locale)
}
