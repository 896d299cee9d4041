//! Report emission
//!
//! The emitter is the collaborator at the core's boundary: it consumes a
//! finished [`DetectionModel`] and owns the serialized shape of the two
//! artifacts, the Railway configuration and the detection report.

pub mod railway;
pub mod schema;

use crate::config::OutputConfig;
use crate::detection::types::DetectionModel;
use anyhow::{Context, Result};
use railway::RailwayConfig;
use schema::DetectionReport;
use std::path::PathBuf;
use tracing::info;

pub struct ReportEmitter {
    output: OutputConfig,
}

impl ReportEmitter {
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Write the Railway config and the detection report into the
    /// repository root. Returns the written paths.
    pub fn emit(&self, model: &DetectionModel) -> Result<Vec<PathBuf>> {
        let railway_path = model.root.join(&self.output.railway_file);
        let railway_doc = RailwayConfig::from_model(model).render(model)?;
        std::fs::write(&railway_path, railway_doc)
            .with_context(|| format!("Failed to write {}", railway_path.display()))?;
        info!(path = %railway_path.display(), "wrote Railway configuration");

        let report_path = model.root.join(&self.output.report_file);
        let report = DetectionReport::from(model);
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize detection report")?;
        std::fs::write(&report_path, json)
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
        info!(path = %report_path.display(), "wrote detection report");

        Ok(vec![railway_path, report_path])
    }
}
