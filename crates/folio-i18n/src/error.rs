//! Error types for folio-i18n
//!
//! Resolution itself never fails. These errors only surface while a
//! [`crate::LocaleConfig`] is being built from configuration.

use thiserror::Error;

/// Locale configuration error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The text is not a valid language tag
    #[error("invalid locale tag: {0:?}")]
    InvalidTag(String),

    /// No locales were configured
    #[error("the supported locale set is empty")]
    EmptyLocaleSet,

    /// The same locale was listed twice
    #[error("locale listed more than once: {0}")]
    DuplicateLocale(String),

    /// The default locale is not one of the supported locales
    #[error("default locale {0} is not in the supported locale set")]
    DefaultNotSupported(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LocaleError>;
