//! Locale-prefixed routing
//!
//! Every page of the site lives under exactly one locale segment
//! (`/en/...`, `/fa/...`). [`resolve`] decides, per request path, whether
//! the path is already well formed or where the client should be sent.

use crate::locale::{Locale, LocaleConfig};
use crate::negotiate::negotiate;
use crate::preference::LanguagePreference;

/// Outcome of resolving one request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Path already carries a supported locale
    PassThrough,
    /// Redirect the client to this locale-prefixed path
    RedirectTo(String),
}

/// Resolve a request path against the supported locale set.
///
/// Total: every input yields a decision.
pub fn resolve(
    path: &str,
    preferences: &[LanguagePreference],
    config: &LocaleConfig,
) -> RouteDecision {
    if path_locale(path, config).is_some() {
        return RouteDecision::PassThrough;
    }
    let locale = negotiate(preferences, config);
    RouteDecision::RedirectTo(localized_path(locale, path))
}

/// The supported locale a path is prefixed with, if any.
///
/// `/fa` and `/fa/about` carry `fa`; `/fable` does not.
pub fn path_locale<'a>(path: &str, config: &'a LocaleConfig) -> Option<&'a Locale> {
    config
        .supported()
        .iter()
        .find(|locale| segment_prefix(path, locale.as_str()).is_some())
}

/// Prefix `path` with `locale`, treating `/` and the empty path as the
/// locale root.
pub fn localized_path(locale: &Locale, path: &str) -> String {
    match path {
        "" | "/" => format!("/{locale}"),
        p if p.starts_with('/') => format!("/{locale}{p}"),
        p => format!("/{locale}/{p}"),
    }
}

/// If `path` starts with `/{segment}` followed by `/` or the end of the
/// string, return what follows the segment.
pub(crate) fn segment_prefix<'p>(path: &'p str, segment: &str) -> Option<&'p str> {
    let rest = path.strip_prefix('/')?.strip_prefix(segment)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}
