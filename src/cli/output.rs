//! Output formatting for detection reports
//!
//! Formatters for the terminal-facing rendering of a detection report:
//! JSON and YAML for machine consumers, a plain summary for humans.

use crate::output::schema::DetectionReport;
use anyhow::{Context, Result};
use std::fmt::Write as _;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

/// Output formatter for detection reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &DetectionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize detection report to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(report)
                .context("Failed to serialize detection report to YAML"),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_human(&self, report: &DetectionReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Monorepo type: {}", report.monorepo.kind);
        let _ = writeln!(out, "Package manager: {}", report.monorepo.package_manager);
        let _ = writeln!(out, "Total apps: {}", report.monorepo.apps_count);
        out.push('\n');

        for app in &report.apps {
            let _ = writeln!(out, "  {} ({})", app.path, app.role);
            let _ = writeln!(out, "    Build: {}", none_if_empty(&app.build_command));
            let _ = writeln!(out, "    Start: {}", none_if_empty(&app.start_command));
            let _ = writeln!(out, "    Port: {}", app.port);

            let mut features = Vec::new();
            if app.has_database {
                features.push("database");
            }
            if app.has_auth {
                features.push("auth");
            }
            if !features.is_empty() {
                let _ = writeln!(out, "    Features: {}", features.join(", "));
            }
        }

        out
    }
}

fn none_if_empty(command: &str) -> &str {
    if command.is_empty() {
        "(none)"
    } else {
        command
    }
}
