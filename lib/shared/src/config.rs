//! Centralized client configuration.
//!
//! The client runs in the browser, so settings are baked in at build time
//! from environment variables and read once through [`CONFIG`].

use std::sync::LazyLock;

use crate::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Initial locale of the translation context (`NOMFLIX_DEFAULT_LOCALE`, default "ko")
    pub default_locale: Locale,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("NOMFLIX_DEFAULT_LOCALE"))
    }

    /// Builds the config from raw values. Unknown locale codes fall back to
    /// the default.
    pub fn from_values(default_locale: Option<&str>) -> Self {
        Self {
            default_locale: default_locale
                .and_then(|code| code.trim().parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None)
    }
}

/// Global client configuration, loaded on first access.
pub static CONFIG: LazyLock<ClientConfig> = LazyLock::new(ClientConfig::from_env);
