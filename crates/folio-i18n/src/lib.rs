//! Folio i18n - Locale Negotiation and Routing
//!
//! This crate decides which locale a request is served in and keeps the
//! site's URL space locale-prefixed:
//! - Locale: validated language tags and the supported locale set
//! - Preference: `Accept-Language` parsing
//! - Negotiate: picking the best supported locale for a client
//! - Routing: pass-through vs. redirect decisions for request paths
//! - Filter: which paths the locale interceptor runs on at all
//! - Alternates: language-switcher paths and `hreflang` links
//!
//! Everything here is synchronous and side-effect free. A [`LocaleConfig`]
//! is built once at startup and shared read-only between requests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alternates;
pub mod error;
pub mod filter;
pub mod locale;
pub mod negotiate;
pub mod preference;
pub mod routing;

pub use alternates::{alternate_links, strip_locale, switch_locale_path, AlternateLink, X_DEFAULT};
pub use error::{LocaleError, Result};
pub use filter::PathFilter;
pub use locale::{Locale, LocaleConfig};
pub use negotiate::negotiate;
pub use preference::{parse_accept_language, LanguagePreference, LanguageRange};
pub use routing::{localized_path, path_locale, resolve, RouteDecision};
