//! Comparison configuration
//!
//! Holds the two threshold grids plus the report switches. The grids are
//! checked axis by axis here; the passes themselves only need equal point
//! counts, which per-axis equality implies.

use std::path::PathBuf;

use crate::error::{CompareError, Result};
use crate::grid::ThresholdGrid;

pub const DEFAULT_PERCENTAGE_ID: u32 = 70;
pub const DEFAULT_ALIGNMENT_LENGTH: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Cutoffs applied to hits against the first database.
    pub first_grid: ThresholdGrid,
    /// Cutoffs applied to hits against the second database.
    pub second_grid: ThresholdGrid,
    pub output_dir: PathBuf,
    /// Also write one query list per grid point for first-only queries.
    pub hits_to_first: bool,
    /// Also write one query list per grid point for queries the second database wins.
    pub hits_to_second: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            first_grid: ThresholdGrid::default(),
            second_grid: ThresholdGrid::default(),
            output_dir: PathBuf::from("."),
            hits_to_first: false,
            hits_to_second: false,
        }
    }
}

impl CompareConfig {
    pub fn new(first_grid: ThresholdGrid, second_grid: ThresholdGrid) -> Result<Self> {
        let config = Self {
            first_grid,
            second_grid,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        let (first, second) = (&self.first_grid, &self.second_grid);
        if first.percentage_ids().len() != second.percentage_ids().len() {
            return Err(CompareError::AxisMismatch {
                axis: "percentage identity",
                first: first.percentage_ids().len(),
                second: second.percentage_ids().len(),
            });
        }
        if first.alignment_lengths().len() != second.alignment_lengths().len() {
            return Err(CompareError::AxisMismatch {
                axis: "alignment length",
                first: first.alignment_lengths().len(),
                second: second.alignment_lengths().len(),
            });
        }
        first.ensure_paired(second)
    }
}
