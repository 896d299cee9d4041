//! Detection pipeline orchestration

use super::analyze::analyze;
use super::discover::discover;
use super::signals::SignalTables;
use super::types::DetectionModel;
use super::workspace::classify;
use super::DetectionError;
use crate::manifest::PackageManifest;
use std::path::Path;
use tracing::{debug, info};

/// Runs the sequential detection pipeline: root manifest → classification →
/// discovery → per-app analysis, one app at a time, in discovery order.
pub struct DetectionService {
    signals: SignalTables,
}

impl DetectionService {
    pub fn new(signals: SignalTables) -> Self {
        Self { signals }
    }

    pub fn detect(&self, repo_root: &Path) -> Result<DetectionModel, DetectionError> {
        let root_manifest = PackageManifest::load_from_dir(repo_root)?;

        let monorepo = classify(&root_manifest, repo_root)?;
        info!(kind = %monorepo.kind, "detected monorepo layout");

        let app_paths = discover(&root_manifest, repo_root)?;
        info!(count = app_paths.len(), "discovered workspace apps");

        let mut apps = Vec::with_capacity(app_paths.len());
        for app_path in &app_paths {
            let manifest = PackageManifest::load_from_dir(&repo_root.join(app_path))?;
            let descriptor = analyze(app_path, &manifest, &self.signals);
            debug!(app = %descriptor.path, role = %descriptor.role, "analyzed app");
            apps.push(descriptor);
        }

        Ok(DetectionModel {
            monorepo,
            root: repo_root.to_path_buf(),
            apps,
        })
    }
}

impl Default for DetectionService {
    fn default() -> Self {
        Self::new(SignalTables::default())
    }
}
