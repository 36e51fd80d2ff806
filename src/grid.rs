//! Threshold grids
//!
//! A grid is the cartesian product of percentage-identity cutoffs and
//! alignment-length cutoffs. Points are enumerated row-major (percentage
//! identity outer, alignment length inner); the position of a point in that
//! enumeration is its *slot index*, the only key the two passes share.

use crate::common::HitRecord;
use crate::config::{DEFAULT_ALIGNMENT_LENGTH, DEFAULT_PERCENTAGE_ID};
use crate::error::{CompareError, Result};

/// One coordinate of a threshold grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThresholdPoint {
    pub percentage_id: u32,
    pub alignment_length: u32,
}

impl ThresholdPoint {
    pub fn new(percentage_id: u32, alignment_length: u32) -> Self {
        Self {
            percentage_id,
            alignment_length,
        }
    }

    /// Whether `hit` clears both cutoffs. Bit score is not considered here.
    #[inline]
    pub fn admits(&self, hit: &HitRecord) -> bool {
        hit.percentage_id >= f64::from(self.percentage_id)
            && hit.alignment_length >= self.alignment_length
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdGrid {
    percentage_ids: Vec<u32>,
    alignment_lengths: Vec<u32>,
}

impl Default for ThresholdGrid {
    fn default() -> Self {
        Self {
            percentage_ids: vec![DEFAULT_PERCENTAGE_ID],
            alignment_lengths: vec![DEFAULT_ALIGNMENT_LENGTH],
        }
    }
}

impl ThresholdGrid {
    pub fn new(percentage_ids: Vec<u32>, alignment_lengths: Vec<u32>) -> Result<Self> {
        if percentage_ids.is_empty() {
            return Err(CompareError::EmptyGrid("percentage identity"));
        }
        if alignment_lengths.is_empty() {
            return Err(CompareError::EmptyGrid("alignment length"));
        }
        Ok(Self {
            percentage_ids,
            alignment_lengths,
        })
    }

    pub fn percentage_ids(&self) -> &[u32] {
        &self.percentage_ids
    }

    pub fn alignment_lengths(&self) -> &[u32] {
        &self.alignment_lengths
    }

    /// Number of points (slots) in the grid.
    pub fn len(&self) -> usize {
        self.percentage_ids.len() * self.alignment_lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points in slot-index order.
    pub fn points(&self) -> impl Iterator<Item = ThresholdPoint> + '_ {
        self.percentage_ids.iter().flat_map(move |&p| {
            self.alignment_lengths
                .iter()
                .map(move |&a| ThresholdPoint::new(p, a))
        })
    }

    pub fn point(&self, slot: usize) -> Option<ThresholdPoint> {
        let width = self.alignment_lengths.len();
        let p = *self.percentage_ids.get(slot / width)?;
        let a = self.alignment_lengths[slot % width];
        Some(ThresholdPoint::new(p, a))
    }

    /// Fails unless `other` enumerates exactly as many points as `self`.
    pub fn ensure_paired(&self, other: &ThresholdGrid) -> Result<()> {
        if self.len() != other.len() {
            return Err(CompareError::GridMismatch {
                first: self.len(),
                second: other.len(),
            });
        }
        Ok(())
    }
}

/// Filename-safe identifier for a pair of positionally matched grid points.
pub fn grid_point_id(first: ThresholdPoint, second: ThresholdPoint) -> String {
    format!(
        "p1_{}-a1_{}_p2_{}-a2_{}",
        first.percentage_id, first.alignment_length, second.percentage_id, second.alignment_length
    )
}
