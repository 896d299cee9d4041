//! Monorepo detection pipeline
//!
//! The pipeline is strictly sequential: classify the repository layout from
//! the root manifest and root-level marker files, discover the declared
//! workspace apps, analyze each app's manifest, and assemble the aggregate
//! model consumed by the report emitter. Each stage owns its input and
//! produces an immutable result for the next one.

use crate::manifest::ManifestError;
use std::path::PathBuf;
use thiserror::Error;

pub mod analyze;
pub mod discover;
pub mod service;
pub mod signals;
pub mod types;
pub mod workspace;

pub use analyze::analyze;
pub use discover::discover;
pub use service::DetectionService;
pub use signals::SignalTables;
pub use types::{
    AppDescriptor, AppRole, DetectionModel, Monorepo, MonorepoKind, PackageManager,
};
pub use workspace::classify;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("No recognized monorepo layout at {0}")]
    NoRecognizedMonorepo(PathBuf),
    #[error("Root manifest declares no workspaces")]
    NoWorkspacesDeclared,
    #[error("No valid apps found (tried: {})", tried.join(", "))]
    NoValidAppsFound { tried: Vec<String> },
}

impl DetectionError {
    /// Expected negative outcomes are detection results in their own right,
    /// as opposed to unreadable or malformed input. Callers branch on this
    /// to report "not a monorepo" without treating it as a crash.
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            DetectionError::NoRecognizedMonorepo(_)
                | DetectionError::NoWorkspacesDeclared
                | DetectionError::NoValidAppsFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_outcomes_are_flagged() {
        assert!(DetectionError::NoRecognizedMonorepo(PathBuf::from("/repo")).is_negative());
        assert!(DetectionError::NoWorkspacesDeclared.is_negative());
        assert!(DetectionError::NoValidAppsFound {
            tried: vec!["apps/web".to_string()]
        }
        .is_negative());
    }

    #[test]
    fn test_manifest_errors_are_not_negative() {
        let err = DetectionError::Manifest(ManifestError::NotFound(PathBuf::from("/repo")));
        assert!(!err.is_negative());
    }

    #[test]
    fn test_no_valid_apps_lists_tried_patterns() {
        let err = DetectionError::NoValidAppsFound {
            tried: vec!["pkgs/tool".to_string(), "apps/*".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No valid apps found (tried: pkgs/tool, apps/*)"
        );
    }
}
