//! Second pass: attach the second database's best hit to existing slots.

use tracing::{debug, info};

use super::select::best_hit;
use super::table::QueryBestHits;
use crate::error::{CompareError, Result};
use crate::grid::{ThresholdGrid, ThresholdPoint};
use crate::input::QueryBlock;

/// Fills the `second` side of every populated slot from the second database.
///
/// Slot `i` is scanned with point `i` of `grid`; queries missing from the
/// table and absent slots are left alone. Running this twice over the same
/// table overwrites earlier second-side hits. Returns the number of blocks
/// read from `source`.
pub fn reconcile_second_pass<I>(
    source: I,
    best_hits: &mut QueryBestHits,
    grid: &ThresholdGrid,
) -> Result<usize>
where
    I: IntoIterator<Item = Result<QueryBlock>>,
{
    if grid.len() != best_hits.slots_per_query() {
        return Err(CompareError::GridMismatch {
            first: best_hits.slots_per_query(),
            second: grid.len(),
        });
    }
    let points: Vec<ThresholdPoint> = grid.points().collect();

    let mut blocks = 0;
    let mut attached = 0usize;
    for block in source {
        let block = block?;
        blocks += 1;

        block.layout()?;
        let query = block.query()?;
        let Some(slots) = best_hits.get_mut(query) else {
            debug!(query, "not in first-pass table, skipping");
            continue;
        };
        let hits = block.hits()?;

        for (slot, &point) in slots.iter_mut().zip(&points) {
            let Some(slot) = slot.as_mut() else {
                continue;
            };
            if let Some(hit) = best_hit(&hits, point) {
                slot.second = Some(hit.clone());
                attached += 1;
            }
        }
    }

    info!(blocks, attached, "second pass complete");
    Ok(blocks)
}
