//! Middleware module for the Folio HTTP server
//!
//! Provides:
//! - Locale routing middleware (negotiation + locale-prefix redirects)

pub mod locale;

pub use locale::{LocaleLayer, LocaleService, LocaleState};
