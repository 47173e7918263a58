//! Web API module for Folio
//!
//! Provides the non-page endpoints:
//! - Health check for load balancers
//! - Localized sitemap

pub mod health;
pub mod sitemap;

pub use health::health_routes;
pub use sitemap::{render_sitemap, sitemap_routes, SitemapState};
