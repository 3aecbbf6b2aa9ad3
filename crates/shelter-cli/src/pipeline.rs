//! Load pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the source CSV into raw records
//! 2. **Normalize**: build dictionaries, rewrite keys, split entities
//! 3. **Load**: write all tables in one transaction (skipped on dry run)
//!
//! Any stage failure aborts the run; the error names the stage.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use shelter_core::pipeline::NormalizeSummary;
use shelter_core::{NormalizeOutput, run_normalization};
use shelter_ingest::read_records;
use shelter_model::{NormalizeOptions, RawRecord};
use shelter_store::{LoadBatch, LoadMode, LoadSummary, Store, StoreConfig};

/// Fully resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRequest {
    pub input: PathBuf,
    pub database: PathBuf,
    pub options: NormalizeOptions,
    pub load_mode: LoadMode,
    pub dry_run: bool,
}

/// What a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub database: Option<PathBuf>,
    pub normalize: NormalizeSummary,
    pub load: Option<LoadSummary>,
    pub duration_ms: u64,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

pub fn ingest(input: &Path) -> Result<Vec<RawRecord>> {
    info_span!("ingest", input = %input.display())
        .in_scope(|| read_records(input))
        .with_context(|| format!("ingest {}", input.display()))
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

pub fn normalize(records: &[RawRecord], options: NormalizeOptions) -> Result<NormalizeOutput> {
    run_normalization(records, options).context("normalize")
}

// ============================================================================
// Stage 3: Load
// ============================================================================

pub fn load(output: &NormalizeOutput, database: &Path, mode: LoadMode) -> Result<LoadSummary> {
    let _guard = info_span!("load", database = %database.display()).entered();
    let mut store = Store::open(&StoreConfig::new(database))
        .with_context(|| format!("load: open {}", database.display()))?;
    let batch = LoadBatch {
        lookups: &output.lookups,
        animals: &output.entities.animals,
        shelter: &output.entities.shelter,
    };
    store.load(&batch, mode).context("load")
}

/// Run every stage for `request`.
pub fn run_pipeline(request: &PipelineRequest) -> Result<PipelineResult> {
    let start = Instant::now();
    let records = ingest(&request.input)?;
    let output = normalize(&records, request.options)?;
    let loaded = if request.dry_run {
        info!("dry run, skipping load");
        None
    } else {
        Some(load(&output, &request.database, request.load_mode)?)
    };
    Ok(PipelineResult {
        input: request.input.clone(),
        database: (!request.dry_run).then(|| request.database.clone()),
        normalize: output.summary,
        load: loaded,
        duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
    })
}

/// Write `result` as pretty JSON.
pub fn write_report(result: &PipelineResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("report: serialize")?;
    std::fs::write(path, json).with_context(|| format!("report: write {}", path.display()))
}
