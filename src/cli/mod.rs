//! CLI module for Folio
//!
//! Provides commands:
//! - `serve`: Start the locale-routed site server
//! - `resolve`: Show how a request path would be routed
//! - `sitemap`: Print the localized sitemap

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_i18n::{negotiate, parse_accept_language, resolve, RouteDecision};

/// Folio site server CLI
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Locale-routed portfolio site server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the server
    Serve,
    /// Show the routing decision for a request path
    Resolve {
        /// Request path, e.g. /about
        #[arg(long, default_value = "/")]
        path: String,
        /// Accept-Language header value, e.g. "fa-IR;q=0.9,en;q=0.5"
        #[arg(long)]
        accept_language: Option<String>,
    },
    /// Print the sitemap XML to stdout
    Sitemap,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Serve) => crate::server::run().await,
        Some(Commands::Resolve {
            path,
            accept_language,
        }) => run_resolve(&path, accept_language.as_deref()),
        Some(Commands::Sitemap) => run_sitemap(),
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

fn run_resolve(path: &str, accept_language: Option<&str>) -> anyhow::Result<()> {
    let config = crate::server::load_config().context("Failed to load configuration")?;
    let locales = config.i18n.locale_config()?;

    let preferences = accept_language
        .map(parse_accept_language)
        .unwrap_or_default();
    let filter = config.routing.path_filter();

    println!("path:       {}", path);
    println!("negotiated: {}", negotiate(&preferences, &locales));
    if !filter.should_intercept(path) {
        println!("decision:   excluded (served as-is)");
        return Ok(());
    }
    match resolve(path, &preferences, &locales) {
        RouteDecision::PassThrough => println!("decision:   pass through"),
        RouteDecision::RedirectTo(target) => println!("decision:   redirect to {}", target),
    }
    Ok(())
}

fn run_sitemap() -> anyhow::Result<()> {
    let config = crate::server::load_config().context("Failed to load configuration")?;
    let locales = config.i18n.locale_config()?;
    let today = chrono::Utc::now().date_naive();
    let xml = crate::api::render_sitemap(&config.sitemap, &locales, today)?;
    println!("{}", xml);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_command() {
        let cli = Cli::try_parse_from([
            "folio",
            "resolve",
            "--path",
            "/about",
            "--accept-language",
            "fa",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Resolve {
                path,
                accept_language,
            }) => {
                assert_eq!(path, "/about");
                assert_eq!(accept_language.as_deref(), Some("fa"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_defaults_to_root() {
        let cli = Cli::try_parse_from(["folio", "resolve"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Resolve { ref path, accept_language: None }) if path == "/"
        ));
    }
}
