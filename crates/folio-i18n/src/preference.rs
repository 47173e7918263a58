//! `Accept-Language` parsing
//!
//! Turns a header value such as `fa-IR;q=0.9, en;q=0.5, *;q=0.1` into an
//! ordered list of weighted language ranges. Parsing is lenient: entries
//! that cannot be understood are skipped, and an unusable header simply
//! produces an empty list.

use tracing::trace;
use unic_langid::LanguageIdentifier;

/// A language range from the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageRange {
    /// A concrete language tag
    Tag(LanguageIdentifier),
    /// `*`, any language
    Wildcard,
}

/// One weighted entry of an `Accept-Language` header
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    /// Requested language range
    pub range: LanguageRange,
    /// Quality weight in `[0, 1]`
    pub weight: f32,
    /// Position in the header, used to break weight ties
    pub position: usize,
}

impl LanguagePreference {
    /// A tag preference with weight 1.0, mostly useful for callers that
    /// already know the client's language
    pub fn tag(id: LanguageIdentifier, position: usize) -> Self {
        Self {
            range: LanguageRange::Tag(id),
            weight: 1.0,
            position,
        }
    }

    /// Whether the client marked this range as not acceptable (`q=0`)
    pub fn is_rejected(&self) -> bool {
        self.weight <= 0.0
    }
}

/// Parse an `Accept-Language` header value.
///
/// Entries keep their header order; see [`ranked`] for priority order.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    header
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .filter_map(|(position, entry)| {
            let parsed = parse_entry(entry, position);
            if parsed.is_none() {
                trace!(entry, "skipping malformed Accept-Language entry");
            }
            parsed
        })
        .collect()
}

fn parse_entry(entry: &str, position: usize) -> Option<LanguagePreference> {
    let mut parts = entry.split(';').map(str::trim);
    let range = match parts.next()? {
        "" => return None,
        "*" => LanguageRange::Wildcard,
        tag => LanguageRange::Tag(parse_tag(tag)?),
    };

    let mut weight = 1.0;
    for param in parts {
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        if name.trim().eq_ignore_ascii_case("q") {
            weight = parse_weight(value.trim())?;
        }
    }

    Some(LanguagePreference {
        range,
        weight,
        position,
    })
}

/// Parse a language tag, dropping what `unic-langid` cannot represent.
///
/// Extension and private-use sections (`fa-IR-u-nu-latn`, `fa-x-foo`)
/// are cut at their singleton; if the remainder still fails, only the
/// primary subtag is kept.
fn parse_tag(tag: &str) -> Option<LanguageIdentifier> {
    if let Ok(id) = tag.parse() {
        return Some(id);
    }
    let subtags: Vec<&str> = tag.split(['-', '_']).collect();
    let end = subtags
        .iter()
        .position(|s| s.len() == 1)
        .unwrap_or(subtags.len());
    if end > 1 {
        if let Ok(id) = subtags[..end].join("-").parse() {
            return Some(id);
        }
    }
    let primary = subtags.first()?;
    let valid_len = matches!(primary.len(), 2..=3 | 5..=8);
    if !valid_len || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    primary.parse().ok()
}

fn parse_weight(value: &str) -> Option<f32> {
    let weight: f32 = value.parse().ok()?;
    (weight.is_finite() && (0.0..=1.0).contains(&weight)).then_some(weight)
}

/// Preferences in priority order: highest weight first, header order
/// among equal weights, rejected (`q=0`) entries removed.
pub fn ranked(preferences: &[LanguagePreference]) -> Vec<&LanguagePreference> {
    let mut ranked: Vec<&LanguagePreference> =
        preferences.iter().filter(|p| !p.is_rejected()).collect();
    // sort_by is stable, so equal weights keep header order
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(prefs: &[&LanguagePreference]) -> Vec<String> {
        prefs
            .iter()
            .map(|p| match &p.range {
                LanguageRange::Tag(id) => id.to_string(),
                LanguageRange::Wildcard => "*".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_parse_weights_and_defaults() {
        let prefs = parse_accept_language("fa-IR;q=0.9, en;q=0.5, de");
        assert_eq!(prefs.len(), 3);
        assert_eq!(prefs[0].weight, 0.9);
        assert_eq!(prefs[1].weight, 0.5);
        assert_eq!(prefs[2].weight, 1.0);
        assert_eq!(prefs[2].position, 2);
    }

    #[test]
    fn test_parse_wildcard() {
        let prefs = parse_accept_language("*;q=0.1");
        assert_eq!(prefs[0].range, LanguageRange::Wildcard);
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let prefs = parse_accept_language("en;q=abc, ;q=1, fa;q=2, ??, de;Q=0.3, ,");
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs[0].weight, 0.3);
    }

    #[test]
    fn test_parse_garbage_is_empty() {
        assert!(parse_accept_language("").is_empty());
        assert!(parse_accept_language(";;;,,,").is_empty());
        assert!(parse_accept_language("q=1").is_empty());
    }

    #[test]
    fn test_parse_tags_with_extensions() {
        let prefs = parse_accept_language("fa-IR-u-nu-latn, en-x-private;q=0.5, x-klingon");
        let all: Vec<&LanguagePreference> = prefs.iter().collect();
        assert_eq!(tags(&all), vec!["fa-IR", "en"]);
        assert_eq!(prefs[1].weight, 0.5);
    }

    #[test]
    fn test_parse_ignores_unknown_params() {
        let prefs = parse_accept_language("en;level=1;q=0.4");
        assert_eq!(prefs[0].weight, 0.4);
    }

    #[test]
    fn test_ranked_orders_by_weight_then_position() {
        let prefs = parse_accept_language("de;q=0.5, en, fa;q=0.5, it;q=0");
        let ranked = ranked(&prefs);
        assert_eq!(tags(&ranked), vec!["en", "de", "fa"]);
    }
}
