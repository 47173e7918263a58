//! Server module for Folio
//!
//! Contains the main server initialization and runtime logic.
//!
//! # Module Structure
//!
//! - `config`: Configuration structures for all server components
//! - `loader`: Configuration loading from files and environment
//! - `validation`: Configuration validation and production warnings
//! - `init`: Router assembly and the main run loop

pub mod config;
mod init;
mod loader;
mod validation;

// Re-export public API
pub use init::{build_router, run};
pub use loader::load_config;
pub use validation::validate_config;
