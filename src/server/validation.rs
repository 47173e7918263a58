//! Production configuration validation
//!
//! Sanity checks for production deployments.

use super::config::AppConfig;
use anyhow::{ensure, Context, Result};
use std::path::Path;
use tracing::warn;

/// Validate configuration.
///
/// The locale set and sitemap priority are checked always; deployment warnings are only emitted
/// when `FOLIO_ENV=production`.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    config
        .i18n
        .locale_config()
        .context("Invalid [i18n] configuration")?;

    ensure!(
        (0.0..=1.0).contains(&config.sitemap.priority),
        "Invalid [sitemap] configuration: priority {} is outside 0.0..=1.0",
        config.sitemap.priority
    );

    let is_production = std::env::var("FOLIO_ENV")
        .map(|v| v.to_lowercase() == "production")
        .unwrap_or(false);

    if !is_production {
        return Ok(());
    }

    for warning in production_warnings(config) {
        warn!("CONFIG WARNING: {}", warning);
    }

    Ok(())
}

fn production_warnings(config: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.server.host == "0.0.0.0" {
        warnings.push(
            "Server is binding to all interfaces (0.0.0.0). \
             Consider binding to 127.0.0.1 behind a reverse proxy."
                .to_string(),
        );
    }

    if !config.sitemap.base_url.starts_with("https://") {
        warnings.push(format!(
            "sitemap.base_url ({}) is not https; search engines will index insecure URLs.",
            config.sitemap.base_url
        ));
    }

    if !Path::new(&config.server.site_dir).is_dir() {
        warnings.push(format!(
            "Site directory {} does not exist; every page will 404.",
            config.server.site_dir
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_production_warnings() {
        let mut config = AppConfig::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.site_dir = "/nonexistent/folio-site".to_string();

        let warnings = production_warnings(&config);
        assert_eq!(warnings.len(), 3);

        config.server.host = "127.0.0.1".to_string();
        config.sitemap.base_url = "https://example.com".to_string();
        assert_eq!(production_warnings(&config).len(), 1);
    }

    #[test]
    fn test_sitemap_priority_out_of_range_fails() {
        let mut config = AppConfig::default();
        config.sitemap.priority = 2.0;
        assert!(validate_config(&config).is_err());
        config.sitemap.priority = 0.85;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_bad_locale_set_fails() {
        let mut config = AppConfig::default();
        config.i18n.locales.clear();
        assert!(validate_config(&config).is_err());
    }
}
