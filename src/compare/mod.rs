//! Two-database best-hit comparison
//!
//! - `select` - first pass, builds the best-hit table
//! - `reconcile` - second pass, fills the other side of each slot
//! - `summary` - per-grid-point classification and report lines
//!
//! The table is owned by the caller across both passes: the reconciler
//! borrows it mutably, the summarizer immutably.

pub mod args;
pub mod reconcile;
pub mod select;
pub mod summary;
pub mod table;

pub use args::CompareArgs;
pub use reconcile::reconcile_second_pass;
pub use select::{best_hit, select_first_pass, FirstPass};
pub use summary::{classify, summarize, Classification, SummaryRecord, SUMMARY_HEADER};
pub use table::{BestHitSlot, QueryBestHits};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

use crate::config::CompareConfig;
use crate::error::CompareError;
use crate::input::{QueryBlock, TabularReader};
use crate::report::write_reports;

/// Everything one comparison run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub total_queries: usize,
    pub best_hits: QueryBestHits,
    pub records: Vec<SummaryRecord>,
}

/// Runs both passes and the summarizer over two record sources.
pub fn compare<F, S>(
    first: F,
    second: S,
    config: &CompareConfig,
) -> std::result::Result<Comparison, CompareError>
where
    F: IntoIterator<Item = std::result::Result<QueryBlock, CompareError>>,
    S: IntoIterator<Item = std::result::Result<QueryBlock, CompareError>>,
{
    config.validate()?;
    let FirstPass {
        total_queries,
        mut best_hits,
    } = select_first_pass(first, &config.first_grid)?;
    reconcile_second_pass(second, &mut best_hits, &config.second_grid)?;
    let records = summarize(&config.first_grid, &config.second_grid, &best_hits)?;
    Ok(Comparison {
        total_queries,
        best_hits,
        records,
    })
}

/// Compares two results files and writes the reports under `config.output_dir`.
pub fn compare_files(
    first: &Path,
    second: &Path,
    config: &CompareConfig,
    bar: &ProgressBar,
) -> Result<Comparison> {
    let first_reader = TabularReader::from_path(first)
        .with_context(|| format!("Failed to open {}", first.display()))?;
    let second_reader = TabularReader::from_path(second)
        .with_context(|| format!("Failed to open {}", second.display()))?;

    let comparison = compare(
        first_reader.inspect(|_| bar.inc(1)),
        second_reader.inspect(|_| bar.inc(1)),
        config,
    )
    .with_context(|| {
        format!(
            "Failed to compare {} against {}",
            first.display(),
            second.display()
        )
    })?;

    write_reports(&comparison.records, comparison.total_queries, config).with_context(|| {
        format!(
            "Failed to write reports to {}",
            config.output_dir.display()
        )
    })?;
    Ok(comparison)
}

/// Spinner counting query blocks across both passes. indicatif draws to
/// stderr and stays silent when stderr is not a terminal.
pub fn block_spinner() -> Result<ProgressBar> {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} query blocks")
            .context("Invalid progress template")?,
    );
    Ok(bar)
}

pub fn run(args: CompareArgs) -> Result<()> {
    let config = args.to_config().context("Invalid threshold grids")?;

    let bar = block_spinner()?;
    let comparison = compare_files(&args.first, &args.second, &config, &bar)?;
    bar.finish();

    info!(
        total_queries = comparison.total_queries,
        with_hits = comparison.best_hits.len(),
        grid_points = comparison.records.len(),
        output = %config.output_dir.display(),
        "comparison written"
    );
    Ok(())
}
