//! Railway configuration document
//!
//! The generated document is a commented TOML file: a header describing
//! what was detected, per-app summaries and environment variable hints as
//! comments, then the machine-consumed `[build]`/`[deploy]`/`[env]` body.

use crate::detection::types::DetectionModel;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, Serialize)]
pub struct RailwayConfig {
    pub build: BuildSection,
    pub deploy: DeploySection,
    pub env: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildSection {
    pub builder: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploySection {
    pub start_command: String,
    pub restart_policy_type: String,
    pub restart_policy_max_retries: u32,
}

impl RailwayConfig {
    /// Build the config from the model. The deploy section targets the
    /// first backend app in discovery order; a frontend-only monorepo falls
    /// back to the first app.
    pub fn from_model(model: &DetectionModel) -> Self {
        let primary = model.first_backend().or_else(|| model.apps.first());

        let start_command = primary
            .map(|app| format!("npm run start --workspace={}", app.path))
            .unwrap_or_default();

        let mut env = BTreeMap::new();
        env.insert("NODE_ENV".to_string(), "production".to_string());
        env.insert(
            "PORT".to_string(),
            primary
                .map(|app| app.port.to_string())
                .unwrap_or_else(|| "5000".to_string()),
        );

        Self {
            build: BuildSection {
                builder: "NIXPACKS".to_string(),
            },
            deploy: DeploySection {
                start_command,
                restart_policy_type: "ON_FAILURE".to_string(),
                restart_policy_max_retries: 10,
            },
            env,
        }
    }

    /// Render the full document: generated header, per-app summaries,
    /// env-var hints, then the TOML body.
    pub fn render(&self, model: &DetectionModel) -> Result<String> {
        let body =
            toml::to_string_pretty(self).context("Failed to serialize Railway config to TOML")?;

        let mut doc = String::new();
        doc.push_str("# Railway monorepo configuration - auto-generated by railyard\n");
        let _ = writeln!(doc, "# Monorepo type: {}", model.monorepo.kind);
        let _ = writeln!(doc, "# Package manager: {}", model.monorepo.package_manager);
        doc.push('\n');

        for app in &model.apps {
            let _ = writeln!(doc, "# App: {} ({})", app.path, app.role);
            let _ = writeln!(doc, "#   Port: {}", app.port);
            if !app.build_command.is_empty() {
                let _ = writeln!(
                    doc,
                    "#   Build: npm run build --workspace={}",
                    app.path
                );
            }
            if !app.start_command.is_empty() {
                let _ = writeln!(
                    doc,
                    "#   Start: npm run start --workspace={}",
                    app.path
                );
            }
        }
        doc.push('\n');

        let hints = env_hints(model);
        if !hints.is_empty() {
            doc.push_str("# Environment variables to set in the Railway dashboard:\n");
            for (name, hint) in hints {
                let _ = writeln!(doc, "# {name} - {hint}");
            }
            doc.push('\n');
        }

        doc.push_str(&body);
        Ok(doc)
    }
}

/// Environment variable hints derived from detected features. These are
/// data produced for the operator, not configuration the detector reads.
fn env_hints(model: &DetectionModel) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();
    if model.has_database() {
        hints.push(("MONGODB_URI", "database connection string"));
    }
    if model.has_auth() {
        hints.push(("JWT_SECRET", "token signing secret"));
    }
    if model.has_frontend() {
        hints.push(("VITE_API_URL", "API base URL for the frontend build"));
    }
    hints
}
