//! Classify → nest → export pipeline.

use crate::input::SceneObject;
use anyhow::{Context, Result};
use panelnest_core::{NestConfig, NestResult, NestSummary, SheetNester};
use panelnest_export::{to_csv, to_drawing};
use serde::Serialize;
use std::path::PathBuf;

/// Artifact destinations. `None` skips the artifact.
#[derive(Debug, Clone, Default)]
pub struct Outputs {
    /// Cut list destination.
    pub csv: Option<PathBuf>,
    /// Drawing destination.
    pub dxf: Option<PathBuf>,
    /// Full result destination (config, summary and placements).
    pub json: Option<PathBuf>,
}

/// What a pipeline run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Classified and nested panels with per-sheet usage.
    pub result: NestResult,
    /// Files written, in the order csv, dxf, json.
    pub written: Vec<PathBuf>,
    /// Requested files skipped because there were no panels.
    pub skipped: Vec<PathBuf>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    config: &'a NestConfig,
    summary: NestSummary,
    result: &'a NestResult,
}

/// Runs the pipeline and writes every requested artifact.
///
/// CSV and DXF files are not created when no panel was found; the JSON
/// result is always written when requested.
pub fn run(objects: Vec<SceneObject>, config: &NestConfig, outputs: &Outputs) -> Result<RunReport> {
    let nester = SheetNester::new(config.clone());
    let result = nester
        .run(objects.into_iter().map(SceneObject::into_parts))
        .context("nesting failed")?;

    let mut written = Vec::new();
    let mut skipped = Vec::new();

    if let Some(path) = &outputs.csv {
        match to_csv(&result.placements) {
            Some(table) => {
                table
                    .save(path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                written.push(path.clone());
            }
            None => skipped.push(path.clone()),
        }
    }

    if let Some(path) = &outputs.dxf {
        match to_drawing(&result.placements) {
            Some(doc) => {
                doc.save(path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                written.push(path.clone());
            }
            None => skipped.push(path.clone()),
        }
    }

    if let Some(path) = &outputs.json {
        let output = JsonOutput {
            config,
            summary: NestSummary::from(&result),
            result: &result,
        };
        let json = serde_json::to_string_pretty(&output)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path.clone());
    }

    for path in &skipped {
        log::warn!("No panels detected; skipped {}", path.display());
    }

    Ok(RunReport {
        result,
        written,
        skipped,
    })
}
