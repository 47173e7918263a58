//! Locales and the supported locale set

use crate::error::{LocaleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::{langid, LanguageIdentifier};

/// A validated language tag that the site can be served in.
///
/// The canonical text form (`en`, `fa`, `pt-BR`) doubles as the URL
/// segment, so `Locale::as_str` is exactly what appears after the leading
/// slash of a localized path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    id: LanguageIdentifier,
    tag: String,
}

impl Locale {
    /// Wrap an already parsed language identifier
    #[must_use]
    pub fn from_langid(id: LanguageIdentifier) -> Self {
        let tag = id.to_string();
        Self { id, tag }
    }

    /// Canonical tag text, also used as the path segment
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// Parsed language identifier
    pub fn langid(&self) -> &LanguageIdentifier {
        &self.id
    }

    /// Primary language subtag (`fa` for `fa-IR`)
    pub fn primary(&self) -> &str {
        self.id.language.as_str()
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::InvalidTag(s.to_string()));
        }
        let id: LanguageIdentifier = trimmed
            .parse()
            .map_err(|_| LocaleError::InvalidTag(s.to_string()))?;
        // "und" carries no language and can never match a request
        if id.language.as_str() == "und" {
            return Err(LocaleError::InvalidTag(s.to_string()));
        }
        Ok(Self::from_langid(id))
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

// ============================================================================
// Supported locale set
// ============================================================================

/// The ordered, immutable set of locales the site is served in, plus the
/// fallback used when negotiation finds nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    supported: Vec<Locale>,
    default: Locale,
}

impl LocaleConfig {
    /// Build a locale set.
    ///
    /// Fails if `supported` is empty, lists a locale twice, or does not
    /// contain `default`.
    pub fn new(supported: Vec<Locale>, default: Locale) -> Result<Self> {
        if supported.is_empty() {
            return Err(LocaleError::EmptyLocaleSet);
        }
        for (i, locale) in supported.iter().enumerate() {
            if supported[..i].contains(locale) {
                return Err(LocaleError::DuplicateLocale(locale.to_string()));
            }
        }
        if !supported.contains(&default) {
            return Err(LocaleError::DefaultNotSupported(default.to_string()));
        }
        Ok(Self { supported, default })
    }

    /// Build a locale set from tag strings
    pub fn from_tags<I, S>(tags: I, default: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let supported = tags
            .into_iter()
            .map(|tag| tag.as_ref().parse())
            .collect::<Result<Vec<Locale>>>()?;
        Self::new(supported, default.parse()?)
    }

    /// Supported locales in configured order
    pub fn supported(&self) -> &[Locale] {
        &self.supported
    }

    /// Fallback locale
    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    /// Look up a supported locale by its exact path segment text
    pub fn find(&self, segment: &str) -> Option<&Locale> {
        self.supported.iter().find(|l| l.as_str() == segment)
    }
}

impl Default for LocaleConfig {
    /// English and Persian, English first
    fn default() -> Self {
        let en = Locale::from_langid(langid!("en"));
        let fa = Locale::from_langid(langid!("fa"));
        Self {
            supported: vec![en.clone(), fa],
            default: en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse_canonicalizes_case() {
        let locale: Locale = "FA-ir".parse().unwrap();
        assert_eq!(locale.as_str(), "fa-IR");
        assert_eq!(locale.primary(), "fa");
    }

    #[test]
    fn test_locale_rejects_garbage() {
        assert!("".parse::<Locale>().is_err());
        assert!("*".parse::<Locale>().is_err());
        assert!("not a tag".parse::<Locale>().is_err());
        assert!("und".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serde_as_string() {
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale.as_str(), "en");
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"en\"");
        assert!(serde_json::from_str::<Locale>("\"!!\"").is_err());
    }

    #[test]
    fn test_default_config_is_en_fa() {
        let config = LocaleConfig::default();
        let tags: Vec<&str> = config.supported().iter().map(Locale::as_str).collect();
        assert_eq!(tags, vec!["en", "fa"]);
        assert_eq!(config.default_locale().as_str(), "en");
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            LocaleConfig::from_tags(Vec::<&str>::new(), "en"),
            Err(LocaleError::EmptyLocaleSet)
        );
        assert_eq!(
            LocaleConfig::from_tags(["en", "fa", "en"], "en"),
            Err(LocaleError::DuplicateLocale("en".to_string()))
        );
        assert_eq!(
            LocaleConfig::from_tags(["en", "fa"], "de"),
            Err(LocaleError::DefaultNotSupported("de".to_string()))
        );
        assert!(matches!(
            LocaleConfig::from_tags(["en", "??"], "en"),
            Err(LocaleError::InvalidTag(_))
        ));
    }

    #[test]
    fn test_find_is_exact() {
        let config = LocaleConfig::default();
        assert!(config.find("fa").is_some());
        assert!(config.find("FA").is_none());
        assert!(config.find("f").is_none());
    }
}
