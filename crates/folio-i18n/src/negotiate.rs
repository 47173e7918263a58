//! Locale negotiation
//!
//! Walks the client's preferences in priority order and returns the first
//! supported locale that matches. An exact tag match is preferred over a
//! primary-subtag match for the same preference, so `pt-BR` picks a
//! supported `pt-BR` before a supported `pt-PT`.

use crate::locale::{Locale, LocaleConfig};
use crate::preference::{ranked, LanguagePreference, LanguageRange};

/// Pick the best supported locale, or the default when nothing matches
pub fn negotiate<'a>(preferences: &[LanguagePreference], config: &'a LocaleConfig) -> &'a Locale {
    ranked(preferences)
        .into_iter()
        .find_map(|pref| match_range(&pref.range, config))
        .unwrap_or_else(|| config.default_locale())
}

fn match_range<'a>(range: &LanguageRange, config: &'a LocaleConfig) -> Option<&'a Locale> {
    let LanguageRange::Tag(id) = range else {
        // `*` expresses no actual preference; leave it to the default
        return None;
    };
    let supported = config.supported();
    supported
        .iter()
        .find(|locale| locale.langid() == id)
        .or_else(|| {
            supported
                .iter()
                .find(|locale| locale.primary() == id.language.as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::parse_accept_language;

    fn pick(header: &str, config: &LocaleConfig) -> String {
        negotiate(&parse_accept_language(header), config).to_string()
    }

    #[test]
    fn test_primary_subtag_match_wins_over_lower_weight() {
        let config = LocaleConfig::default();
        assert_eq!(pick("fa-IR;q=0.9,en;q=0.5", &config), "fa");
    }

    #[test]
    fn test_highest_weight_wins_regardless_of_order() {
        let config = LocaleConfig::default();
        assert_eq!(pick("en;q=0.2, fa;q=0.8", &config), "fa");
        assert_eq!(pick("fa, en", &config), "fa");
    }

    #[test]
    fn test_case_insensitive() {
        let config = LocaleConfig::default();
        assert_eq!(pick("FA", &config), "fa");
    }

    #[test]
    fn test_unsupported_falls_back_to_default() {
        let config = LocaleConfig::default();
        assert_eq!(pick("de-DE, fr;q=0.8", &config), "en");
        assert_eq!(pick("", &config), "en");
        assert_eq!(pick("*", &config), "en");
    }

    #[test]
    fn test_skips_unsupported_to_next_preference() {
        let config = LocaleConfig::default();
        assert_eq!(pick("de-DE, fa;q=0.3", &config), "fa");
    }

    #[test]
    fn test_rejected_locale_never_chosen() {
        let config = LocaleConfig::from_tags(["en", "fa"], "fa").unwrap();
        assert_eq!(pick("en;q=0", &config), "fa");
    }

    #[test]
    fn test_exact_match_preferred_over_primary() {
        let config = LocaleConfig::from_tags(["pt-PT", "pt-BR"], "pt-PT").unwrap();
        assert_eq!(pick("pt-BR", &config), "pt-BR");
        assert_eq!(pick("pt", &config), "pt-PT");
    }

    #[test]
    fn test_extension_tags_match_on_language() {
        let config = LocaleConfig::default();
        assert_eq!(pick("fa-IR-u-nu-latn", &config), "fa");
        assert_eq!(pick("fa-x-private", &config), "fa");
        let config = LocaleConfig::from_tags(["en", "fa"], "fa").unwrap();
        assert_eq!(pick("en-US-u-ca-gregory;q=0.9, de", &config), "en");
    }

    #[test]
    fn test_preference_built_from_langid() {
        let config = LocaleConfig::default();
        let prefs = vec![
            LanguagePreference::tag("de".parse().unwrap(), 0),
            LanguagePreference::tag("fa-AF".parse().unwrap(), 1),
        ];
        assert_eq!(negotiate(&prefs, &config).as_str(), "fa");
    }

    #[test]
    fn test_regional_supported_matches_bare_tag() {
        let config = LocaleConfig::from_tags(["en-US", "fa-IR"], "en-US").unwrap();
        assert_eq!(pick("fa", &config), "fa-IR");
    }
}
