//! Language switching and alternate-language links
//!
//! The language switcher swaps the locale segment of the current page; the
//! sitemap lists every page once per locale with `hreflang` alternates.

use crate::locale::{Locale, LocaleConfig};
use crate::routing::{localized_path, segment_prefix};
use serde::Serialize;

/// `hreflang` value of the link pointing at the default locale
pub const X_DEFAULT: &str = "x-default";

/// A link to the same page in one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    /// Locale tag or [`X_DEFAULT`]
    pub hreflang: String,
    /// Absolute URL
    pub href: String,
}

/// Split a path into its locale prefix and the remaining path.
///
/// The remainder is `/` for a bare locale root and the whole path when no
/// supported locale prefixes it.
pub fn strip_locale<'a, 'p>(path: &'p str, config: &'a LocaleConfig) -> (Option<&'a Locale>, &'p str) {
    for locale in config.supported() {
        if let Some(rest) = segment_prefix(path, locale.as_str()) {
            let rest = if rest.is_empty() { "/" } else { rest };
            return (Some(locale), rest);
        }
    }
    (None, path)
}

/// The same page in another locale: `/en/about` becomes `/fa/about`.
///
/// Paths without a locale segment get one.
pub fn switch_locale_path(path: &str, target: &Locale, config: &LocaleConfig) -> String {
    let (_, rest) = strip_locale(path, config);
    localized_path(target, rest)
}

/// Alternate links for `path` in every supported locale, followed by an
/// `x-default` link to the default locale.
pub fn alternate_links(base_url: &str, path: &str, config: &LocaleConfig) -> Vec<AlternateLink> {
    let base = base_url.trim_end_matches('/');
    let href = |locale: &Locale| format!("{base}{}", switch_locale_path(path, locale, config));

    let mut links: Vec<AlternateLink> = config
        .supported()
        .iter()
        .map(|locale| AlternateLink {
            hreflang: locale.to_string(),
            href: href(locale),
        })
        .collect();
    links.push(AlternateLink {
        hreflang: X_DEFAULT.to_string(),
        href: href(config.default_locale()),
    });
    links
}
