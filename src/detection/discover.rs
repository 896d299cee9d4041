//! Workspace app discovery
//!
//! Discovery resolves the declared workspace patterns only; it never scans
//! the tree for manifests on its own. A declared entry without a manifest
//! is skipped with a warning, not a failure.

use super::DetectionError;
use crate::manifest::MANIFEST_FILE;
use crate::manifest::PackageManifest;
use std::path::Path;
use tracing::{debug, warn};

/// Resolve the root manifest's workspace patterns to app paths, in
/// declaration order.
pub fn discover(
    root_manifest: &PackageManifest,
    repo_root: &Path,
) -> Result<Vec<String>, DetectionError> {
    let patterns = root_manifest
        .workspace_patterns()
        .filter(|patterns| !patterns.is_empty())
        .ok_or(DetectionError::NoWorkspacesDeclared)?;

    let mut apps = Vec::new();
    for pattern in patterns {
        for candidate in resolve_pattern(repo_root, pattern) {
            if repo_root.join(&candidate).join(MANIFEST_FILE).exists() {
                debug!(app = %candidate, "found app");
                apps.push(candidate);
            } else {
                warn!(workspace = %candidate, "workspace entry has no package.json, skipping");
            }
        }
    }

    if apps.is_empty() {
        return Err(DetectionError::NoValidAppsFound {
            tried: patterns.to_vec(),
        });
    }

    Ok(apps)
}

/// Expand one declared pattern to candidate workspace paths.
///
/// A trailing `/*` expands to the directory's sub-directories, sorted by
/// name so repeated runs on an unchanged tree discover identically.
/// Anything else resolves literally.
fn resolve_pattern(repo_root: &Path, pattern: &str) -> Vec<String> {
    let Some(prefix) = pattern.strip_suffix("/*") else {
        return vec![pattern.trim_end_matches('/').to_string()];
    };

    let dir = repo_root.join(prefix);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(pattern = %pattern, error = %err, "cannot expand workspace pattern");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|name| format!("{prefix}/{name}"))
        .collect()
}
