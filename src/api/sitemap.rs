//! Sitemap endpoint
//!
//! Lists every configured page once per locale, each entry carrying
//! `xhtml:link` alternates for the other locales so search engines can
//! pair the translations.

use crate::server::config::SitemapConfig;
use anyhow::{ensure, Context, Result};
use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{NaiveDate, Utc};
use folio_i18n::{alternate_links, switch_locale_path, LocaleConfig};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::sync::Arc;
use tracing::error;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Everything the sitemap handler needs
#[derive(Debug, Clone)]
pub struct SitemapState {
    pub config: SitemapConfig,
    pub locales: LocaleConfig,
}

/// Render the sitemap document with `lastmod` set to `today`
pub fn render_sitemap(
    config: &SitemapConfig,
    locales: &LocaleConfig,
    today: NaiveDate,
) -> Result<String> {
    let base = config.base_url.trim_end_matches('/');
    let lastmod = today.format("%Y-%m-%d").to_string();
    ensure!(
        (0.0..=1.0).contains(&config.priority),
        "sitemap priority {} is outside 0.0..=1.0",
        config.priority
    );
    let priority = format_priority(config.priority);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
    writer.write_event(Event::Start(urlset))?;

    for page in &config.pages {
        let alternates = alternate_links(base, page, locales);

        for locale in locales.supported() {
            writer.write_event(Event::Start(BytesStart::new("url")))?;

            let loc = format!("{base}{}", switch_locale_path(page, locale, locales));
            write_text(&mut writer, "loc", &loc)?;
            write_text(&mut writer, "lastmod", &lastmod)?;
            write_text(&mut writer, "changefreq", &config.change_frequency)?;
            write_text(&mut writer, "priority", &priority)?;

            for link in &alternates {
                let mut element = BytesStart::new("xhtml:link");
                element.push_attribute(("rel", "alternate"));
                element.push_attribute(("hreflang", link.hreflang.as_str()));
                element.push_attribute(("href", link.href.as_str()));
                writer.write_event(Event::Empty(element))?;
            }

            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    String::from_utf8(writer.into_inner()).context("Sitemap is not valid UTF-8")
}

/// Two decimals at most, but always one: `1.0`, `0.5`, `0.85`
fn format_priority(priority: f32) -> String {
    let mut text = format!("{:.2}", priority);
    if text.ends_with('0') {
        text.pop();
    }
    text
}

fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

async fn sitemap(Extension(state): Extension<Arc<SitemapState>>) -> Response {
    let today = Utc::now().date_naive();
    match render_sitemap(&state.config, &state.locales, today) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/xml")], body).into_response(),
        Err(e) => {
            error!("Failed to render sitemap: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Sitemap routes
pub fn sitemap_routes(state: SitemapState) -> Router {
    Router::new()
        .route("/sitemap.xml", get(sitemap))
        .layer(Extension(Arc::new(state)))
}
