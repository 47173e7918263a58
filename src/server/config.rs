//! Server configuration types
//!
//! Contains all configuration structures for the Folio server.

use folio_i18n::{Locale, LocaleConfig, PathFilter};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the pre-rendered site (`en/index.html`, ...)
    #[serde(default = "default_site_dir")]
    pub site_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            site_dir: default_site_dir(),
        }
    }
}

fn default_site_dir() -> String {
    "site".to_string()
}

/// Locale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Supported locales, in display order
    #[serde(default = "default_locales")]
    pub locales: Vec<Locale>,
    /// Locale used when negotiation finds no match
    #[serde(default = "default_locale")]
    pub default_locale: Locale,
}

impl I18nConfig {
    /// Validate and build the supported locale set
    pub fn locale_config(&self) -> folio_i18n::Result<LocaleConfig> {
        LocaleConfig::new(self.locales.clone(), self.default_locale.clone())
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            default_locale: default_locale(),
        }
    }
}

fn default_locales() -> Vec<Locale> {
    LocaleConfig::default().supported().to_vec()
}

fn default_locale() -> Locale {
    LocaleConfig::default().default_locale().clone()
}

/// Which paths bypass locale routing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Reserved path prefixes served without locale handling
    #[serde(default = "default_internal_prefixes")]
    pub internal_prefixes: Vec<String>,
    /// Skip any path containing a `.` (static files)
    #[serde(default = "default_true")]
    pub skip_file_paths: bool,
}

impl RoutingConfig {
    pub fn path_filter(&self) -> PathFilter {
        PathFilter::new(&self.internal_prefixes, self.skip_file_paths)
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            internal_prefixes: default_internal_prefixes(),
            skip_file_paths: true,
        }
    }
}

fn default_internal_prefixes() -> Vec<String> {
    folio_i18n::filter::DEFAULT_INTERNAL_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

/// Sitemap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Public origin of the site, e.g. `https://example.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Unlocalized page paths listed once per locale
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,
    #[serde(default = "default_change_frequency")]
    pub change_frequency: String,
    #[serde(default = "default_priority")]
    pub priority: f32,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            pages: default_pages(),
            change_frequency: default_change_frequency(),
            priority: default_priority(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_pages() -> Vec<String> {
    vec!["/".to_string()]
}

fn default_change_frequency() -> String {
    "monthly".to_string()
}

fn default_priority() -> f32 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_locale_set() {
        let config = AppConfig::default();
        let locales = config.i18n.locale_config().unwrap();
        assert_eq!(locales.default_locale().as_str(), "en");
        assert_eq!(locales.supported().len(), 2);
    }

    #[test]
    fn test_invalid_default_locale_rejected() {
        let i18n = I18nConfig {
            locales: vec!["fa".parse().unwrap()],
            default_locale: "en".parse().unwrap(),
        };
        assert!(i18n.locale_config().is_err());
    }

    #[test]
    fn test_routing_defaults_skip_health() {
        let filter = RoutingConfig::default().path_filter();
        assert!(!filter.should_intercept("/health"));
        assert!(filter.should_intercept("/about"));
    }
}
