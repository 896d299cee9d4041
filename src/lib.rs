//! railyard - monorepo detection and Railway deployment configuration
//!
//! This library inspects a repository's workspace declarations to determine
//! whether it is organized as a monorepo, enumerates the apps it contains,
//! classifies each app's runtime role from its dependency names, and hands
//! the aggregated model to an emitter that generates a `railway.toml` and a
//! machine-readable detection report.
//!
//! # Core Concepts
//!
//! - **Classification**: the root manifest's `workspaces` declaration wins
//!   over marker-file heuristics (turbo.json, nx.json); the precedence
//!   chain is fixed and first-match-wins
//! - **Discovery**: declared workspace patterns are resolved to app
//!   directories containing their own `package.json`; nothing is scanned
//! - **Analysis**: a pure pass over each app manifest's scripts and
//!   dependency names, driven by configurable signal tables
//!
//! # Example Usage
//!
//! ```ignore
//! use railyard::{DetectionService, ReportEmitter};
//! use std::path::Path;
//!
//! let service = DetectionService::default();
//! match service.detect(Path::new(".")) {
//!     Ok(model) => println!("{} apps detected", model.app_count()),
//!     Err(err) if err.is_negative() => println!("not a monorepo: {err}"),
//!     Err(err) => eprintln!("detection failed: {err}"),
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`manifest`]: package.json loading
//! - [`detection`]: classification, discovery, analysis, pipeline service
//! - [`output`]: report emitter (Railway config + detection report)
//! - [`cli`]: command-line surface and terminal formatting

// Public modules
pub mod cli;
pub mod config;
pub mod detection;
pub mod manifest;
pub mod output;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, OutputConfig, RailyardConfig};
pub use detection::service::DetectionService;
pub use detection::signals::SignalTables;
pub use detection::types::{
    AppDescriptor, AppRole, DetectionModel, Monorepo, MonorepoKind, PackageManager,
};
pub use detection::DetectionError;
pub use manifest::{ManifestError, PackageManifest};
pub use output::schema::DetectionReport;
pub use output::ReportEmitter;
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_railyard() {
        assert_eq!(NAME, "railyard");
    }
}
