//! package.json loading and access
//!
//! A manifest is loaded once, consumed by a single analysis pass, and
//! discarded. Optional sections (scripts, dependency maps, workspaces)
//! default to empty when absent; a missing or malformed file is an error,
//! never a silently defaulted manifest.

use serde::Deserialize;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-project descriptor file name.
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("No package.json found at {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The `workspaces` field in either of the shapes npm accepts: the
/// shorthand pattern array or the object form with a `packages` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WorkspacesField {
    Patterns(Vec<String>),
    Detailed {
        #[serde(default)]
        packages: Vec<String>,
    },
}

impl WorkspacesField {
    pub fn patterns(&self) -> &[String] {
        match self {
            WorkspacesField::Patterns(patterns) => patterns,
            WorkspacesField::Detailed { packages } => packages,
        }
    }
}

/// Deserialized package.json, reduced to the fields detection consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    #[serde(default)]
    pub scripts: HashMap<String, String>,
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: HashMap<String, String>,
    pub workspaces: Option<WorkspacesField>,
}

impl PackageManifest {
    /// Load and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<PackageManifest, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the manifest directly inside `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<PackageManifest, ManifestError> {
        Self::load(&dir.join(MANIFEST_FILE))
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    pub fn has_dev_dependency(&self, name: &str) -> bool {
        self.dev_dependencies.contains_key(name)
    }

    /// Membership test across both dependency maps.
    pub fn has_any_dependency(&self, name: &str) -> bool {
        self.has_dependency(name) || self.has_dev_dependency(name)
    }

    /// Declared workspace patterns. `Some` whenever the field is present,
    /// even when the list is empty.
    pub fn workspace_patterns(&self) -> Option<&[String]> {
        self.workspaces.as_ref().map(WorkspacesField::patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_manifest() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{
                "name": "server",
                "scripts": {"start": "node index.js", "build": "tsc"},
                "dependencies": {"express": "^4.18.0"},
                "devDependencies": {"nodemon": "^3.0.0"}
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("server"));
        assert_eq!(manifest.script("start"), Some("node index.js"));
        assert!(manifest.has_dependency("express"));
        assert!(manifest.has_dev_dependency("nodemon"));
        assert!(manifest.has_any_dependency("nodemon"));
        assert!(!manifest.has_dependency("nodemon"));
        assert!(manifest.workspace_patterns().is_none());
    }

    #[test]
    fn test_optional_sections_default_empty() {
        let manifest: PackageManifest = serde_json::from_str(r#"{"name": "bare"}"#).unwrap();

        assert!(manifest.scripts.is_empty());
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
        assert!(manifest.script("start").is_none());
    }

    #[test]
    fn test_workspaces_array_form() {
        let manifest: PackageManifest =
            serde_json::from_str(r#"{"workspaces": ["apps/web", "server"]}"#).unwrap();

        assert_eq!(
            manifest.workspace_patterns(),
            Some(&["apps/web".to_string(), "server".to_string()][..])
        );
    }

    #[test]
    fn test_workspaces_object_form() {
        let manifest: PackageManifest =
            serde_json::from_str(r#"{"workspaces": {"packages": ["packages/*"]}}"#).unwrap();

        assert_eq!(
            manifest.workspace_patterns(),
            Some(&["packages/*".to_string()][..])
        );
    }

    #[test]
    fn test_empty_workspaces_is_declared() {
        let manifest: PackageManifest = serde_json::from_str(r#"{"workspaces": []}"#).unwrap();

        let patterns = manifest.workspace_patterns().unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_load_not_found() {
        let dir = TempDir::new().unwrap();

        let err = PackageManifest::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "{not json").unwrap();

        let err = PackageManifest::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_load_valid_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{"name": "app", "dependencies": {"react": "^18.0.0"}}"#,
        )
        .unwrap();

        let manifest = PackageManifest::load_from_dir(dir.path()).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("app"));
        assert!(manifest.has_dependency("react"));
    }
}
