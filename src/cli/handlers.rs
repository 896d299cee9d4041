//! Subcommand drivers
//!
//! Handlers own the I/O around the core pipeline and map errors onto exit
//! codes. Expected negative detection outcomes are reported as results;
//! input-integrity failures are reported as errors. Either way the run
//! exits non-zero so callers can script against it.

use super::commands::DetectArgs;
use super::output::OutputFormatter;
use crate::config::RailyardConfig;
use crate::detection::service::DetectionService;
use crate::output::schema::DetectionReport;
use crate::output::ReportEmitter;
use std::path::PathBuf;
use tracing::{error, info, warn};

pub fn handle_detect(args: &DetectArgs, quiet: bool) -> i32 {
    let repo_root = args
        .repository_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let config = match RailyardConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return 1;
        }
    };

    let service = DetectionService::new(config.signals.clone());
    let model = match service.detect(&repo_root) {
        Ok(model) => model,
        Err(err) if err.is_negative() => {
            warn!("{err}");
            if !quiet {
                println!("{err}");
            }
            return 1;
        }
        Err(err) => {
            error!("{err}");
            return 1;
        }
    };

    if !args.dry_run {
        let emitter = ReportEmitter::new(config.output.clone());
        if let Err(err) = emitter.emit(&model) {
            error!("{err:#}");
            return 1;
        }
    }

    let report = DetectionReport::from(&model);
    let formatter = OutputFormatter::new(args.format.into());
    let rendered = match formatter.format(&report) {
        Ok(rendered) => rendered,
        Err(err) => {
            error!("{err:#}");
            return 1;
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(err) = std::fs::write(path, &rendered) {
                error!("Failed to write {}: {err}", path.display());
                return 1;
            }
            info!(path = %path.display(), "wrote formatted report");
        }
        None if !quiet => print!("{rendered}"),
        None => {}
    }

    0
}
