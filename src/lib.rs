//! Folio - Locale-Routed Portfolio Site Server
//!
//! Serves a pre-rendered bilingual site behind locale negotiation:
//! - `middleware`: the locale routing layer
//! - `api`: health and sitemap endpoints
//! - `server`: configuration and router assembly
//! - `cli`: command-line entry points

#![forbid(unsafe_code)]

pub mod api;
pub mod cli;
pub mod middleware;
pub mod server;
