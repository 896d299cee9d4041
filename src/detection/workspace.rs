//! Monorepo layout classification
//!
//! An explicit workspace declaration is the strongest signal and wins over
//! any marker file; marker-file tools are checked in a fixed order so a
//! repository never classifies ambiguously.

use super::types::{Monorepo, MonorepoKind};
use super::DetectionError;
use crate::manifest::PackageManifest;
use std::path::Path;
use tracing::debug;

/// A build-orchestration tool recognized by the presence of its
/// configuration file at the repository root.
pub trait WorkspaceTool {
    fn kind(&self) -> MonorepoKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Files whose mere presence at the root signals this tool.
    fn marker_files(&self) -> &[&str];

    fn is_present(&self, repo_root: &Path) -> bool {
        self.marker_files()
            .iter()
            .any(|marker| repo_root.join(marker).exists())
    }
}

pub struct Turborepo;

impl WorkspaceTool for Turborepo {
    fn kind(&self) -> MonorepoKind {
        MonorepoKind::Turborepo
    }

    fn name(&self) -> &'static str {
        "Turborepo"
    }

    fn marker_files(&self) -> &[&str] {
        &["turbo.json"]
    }
}

pub struct Nx;

impl WorkspaceTool for Nx {
    fn kind(&self) -> MonorepoKind {
        MonorepoKind::Nx
    }

    fn name(&self) -> &'static str {
        "Nx"
    }

    fn marker_files(&self) -> &[&str] {
        &["nx.json", "workspace.json"]
    }
}

/// Marker-file tools in precedence order.
fn marker_tools() -> Vec<Box<dyn WorkspaceTool>> {
    vec![Box::new(Turborepo), Box::new(Nx)]
}

/// Classify the repository layout. First match wins:
///
/// 1. the root manifest declares a `workspaces` field (even an empty one;
///    an empty list fails later, at discovery),
/// 2. a Turborepo marker file exists at the root,
/// 3. an Nx marker file exists at the root.
///
/// Anything else is the expected negative
/// [`DetectionError::NoRecognizedMonorepo`].
pub fn classify(
    root_manifest: &PackageManifest,
    repo_root: &Path,
) -> Result<Monorepo, DetectionError> {
    if root_manifest.workspace_patterns().is_some() {
        debug!("root manifest declares workspaces");
        return Ok(Monorepo::new(MonorepoKind::NpmWorkspaces));
    }

    for tool in marker_tools() {
        if tool.is_present(repo_root) {
            debug!(tool = tool.name(), "marker file present at root");
            return Ok(Monorepo::new(tool.kind()));
        }
    }

    Err(DetectionError::NoRecognizedMonorepo(
        repo_root.to_path_buf(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn manifest(json: &str) -> PackageManifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_workspaces_declaration_classifies_npm() {
        let dir = TempDir::new().unwrap();
        let root = manifest(r#"{"workspaces": ["apps/web"]}"#);

        let monorepo = classify(&root, dir.path()).unwrap();
        assert_eq!(monorepo.kind, MonorepoKind::NpmWorkspaces);
    }

    #[test]
    fn test_workspaces_win_over_marker_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("turbo.json"), "{}").unwrap();
        fs::write(dir.path().join("nx.json"), "{}").unwrap();
        let root = manifest(r#"{"workspaces": ["apps/web"]}"#);

        let monorepo = classify(&root, dir.path()).unwrap();
        assert_eq!(monorepo.kind, MonorepoKind::NpmWorkspaces);
    }

    #[test]
    fn test_empty_workspaces_still_classifies_npm() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("turbo.json"), "{}").unwrap();
        let root = manifest(r#"{"workspaces": []}"#);

        // A declared list commits the classification; the empty list only
        // fails later, at discovery.
        let monorepo = classify(&root, dir.path()).unwrap();
        assert_eq!(monorepo.kind, MonorepoKind::NpmWorkspaces);
    }

    #[test]
    fn test_turbo_marker_classifies_turborepo() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("turbo.json"), "{}").unwrap();
        let root = manifest("{}");

        let monorepo = classify(&root, dir.path()).unwrap();
        assert_eq!(monorepo.kind, MonorepoKind::Turborepo);
    }

    #[test]
    fn test_turbo_wins_over_nx() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("turbo.json"), "{}").unwrap();
        fs::write(dir.path().join("nx.json"), "{}").unwrap();
        let root = manifest("{}");

        let monorepo = classify(&root, dir.path()).unwrap();
        assert_eq!(monorepo.kind, MonorepoKind::Turborepo);
    }

    #[test]
    fn test_either_nx_marker_classifies_nx() {
        for marker in ["nx.json", "workspace.json"] {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join(marker), "{}").unwrap();
            let root = manifest("{}");

            let monorepo = classify(&root, dir.path()).unwrap();
            assert_eq!(monorepo.kind, MonorepoKind::Nx, "marker: {marker}");
        }
    }

    #[test]
    fn test_unrecognized_layout_is_negative() {
        let dir = TempDir::new().unwrap();
        let root = manifest(r#"{"name": "plain-app"}"#);

        let err = classify(&root, dir.path()).unwrap_err();
        assert!(matches!(err, DetectionError::NoRecognizedMonorepo(_)));
        assert!(err.is_negative());
    }
}
