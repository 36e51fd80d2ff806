//! First pass: best hit per (query, grid point) against the first database.

use tracing::{debug, info};

use super::table::{BestHitSlot, QueryBestHits, Slots};
use crate::common::HitRecord;
use crate::error::Result;
use crate::grid::{ThresholdGrid, ThresholdPoint};
use crate::input::QueryBlock;

/// Highest-scoring hit that clears `point`, scanning in stream order.
///
/// The running maximum starts at 0 and must be strictly exceeded, so hits
/// scoring 0 or below never qualify and the earliest of several equal
/// maxima is kept.
pub fn best_hit(hits: &[HitRecord], point: ThresholdPoint) -> Option<&HitRecord> {
    let mut best = None;
    let mut best_bits = 0.0;
    for hit in hits {
        if point.admits(hit) && hit.bit_score > best_bits {
            best_bits = hit.bit_score;
            best = Some(hit);
        }
    }
    best
}

#[derive(Debug, Clone, PartialEq)]
pub struct FirstPass {
    /// Query blocks read, including blocks without hits.
    pub total_queries: usize,
    pub best_hits: QueryBestHits,
}

/// Builds the best-hit table from the first database's results.
pub fn select_first_pass<I>(source: I, grid: &ThresholdGrid) -> Result<FirstPass>
where
    I: IntoIterator<Item = Result<QueryBlock>>,
{
    let points: Vec<ThresholdPoint> = grid.points().collect();
    let mut best_hits = QueryBestHits::new(points.len());
    let mut total_queries = 0;

    for block in source {
        let block = block?;
        total_queries += 1;

        let hits = block.hits()?;
        let query = block.query()?;
        if hits.is_empty() {
            debug!(query, "no hits against first database");
            continue;
        }

        let slots: Slots = points
            .iter()
            .map(|&point| best_hit(&hits, point).cloned().map(BestHitSlot::new))
            .collect();
        best_hits.insert(query.to_string(), slots);
    }

    info!(
        total_queries,
        with_hits = best_hits.len(),
        grid_points = points.len(),
        "first pass complete"
    );
    Ok(FirstPass {
        total_queries,
        best_hits,
    })
}
