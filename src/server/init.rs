//! Server initialization and main run loop
//!
//! Contains the main `run()` function and the router assembly shared with
//! the integration tests.

use super::config::AppConfig;
use super::loader::load_config;
use super::validation::validate_config;
use crate::api::{health_routes, sitemap_routes, SitemapState};
use crate::middleware::{LocaleLayer, LocaleState};
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

/// Build the application router.
///
/// Layers run outermost first: request tracing, then locale routing, then
/// the health/sitemap routes or the static site.
pub fn build_router(config: &AppConfig) -> Result<Router> {
    let locales = config
        .i18n
        .locale_config()
        .context("Invalid [i18n] configuration")?;
    let locale_state = LocaleState::new(locales.clone(), config.routing.path_filter());

    let site_dir = Path::new(&config.server.site_dir);
    let serve_dir = ServeDir::new(site_dir).append_index_html_on_directories(true);

    let app = Router::new()
        .merge(health_routes())
        .merge(sitemap_routes(SitemapState {
            config: config.sitemap.clone(),
            locales,
        }))
        .fallback_service(serve_dir)
        .layer(LocaleLayer::new(locale_state))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Run the server
pub async fn run() -> Result<()> {
    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load configuration")?;
    info!("Configuration loaded");

    validate_config(&config)?;

    let supported: Vec<&str> = config.i18n.locales.iter().map(|l| l.as_str()).collect();
    info!(
        locales = ?supported,
        default_locale = %config.i18n.default_locale,
        site_dir = %config.server.site_dir,
        "Locale routing enabled"
    );

    let app = build_router(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Folio shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
