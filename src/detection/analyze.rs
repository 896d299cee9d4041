//! Per-app manifest analysis

use super::signals::SignalTables;
use super::types::{AppDescriptor, AppRole};
use crate::manifest::PackageManifest;

/// Analyze one app's manifest into its descriptor.
///
/// Pure function of the manifest content and the signal tables. Every field
/// has a deterministic default, so analysis never fails: no signals means a
/// backend app with empty commands and no feature flags.
pub fn analyze(
    app_path: &str,
    manifest: &PackageManifest,
    signals: &SignalTables,
) -> AppDescriptor {
    let role = detect_role(manifest, signals);

    AppDescriptor {
        path: app_path.to_string(),
        name: app_name(app_path),
        role,
        port: role.default_port(),
        build_command: manifest.script("build").unwrap_or_default().to_string(),
        start_command: manifest
            .script("start")
            .or_else(|| manifest.script("dev"))
            .unwrap_or_default()
            .to_string(),
        has_database: detect_database(manifest, signals),
        has_auth: signals
            .auth_libraries
            .iter()
            .any(|name| manifest.has_dependency(name)),
    }
}

fn detect_role(manifest: &PackageManifest, signals: &SignalTables) -> AppRole {
    let is_frontend = signals
        .frontend_frameworks
        .iter()
        .any(|name| manifest.has_any_dependency(name));

    if is_frontend {
        AppRole::Frontend
    } else {
        AppRole::Backend
    }
}

fn detect_database(manifest: &PackageManifest, signals: &SignalTables) -> bool {
    signals
        .database_clients
        .iter()
        .any(|name| manifest.has_dependency(name))
        || signals
            .dev_database_clients
            .iter()
            .any(|name| manifest.has_dev_dependency(name))
}

/// Final segment of a workspace-relative path.
fn app_name(app_path: &str) -> String {
    app_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(app_path)
        .to_string()
}
