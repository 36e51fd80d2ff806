//! Test utilities and helpers
//!
//! - Query block builders using the legacy `-m 9` column set
//! - Grid shorthands
//! - Fixture paths under `tests/data`

use std::path::PathBuf;

use hitgrid::error::CompareError;
use hitgrid::grid::ThresholdGrid;
use hitgrid::input::QueryBlock;

pub const LEGACY_FIELDS: &str = "Query id, Subject id, % identity, alignment length, mismatches, \
     gap openings, q. start, q. end, s. start, s. end, e-value, bit score";

/// (subject, % identity, alignment length, bit score)
pub type Hit<'a> = (&'a str, f64, u32, f64);

pub fn block(query: &str, hits: &[Hit]) -> Result<QueryBlock, CompareError> {
    let mut block = QueryBlock::new(query).with_fields(LEGACY_FIELDS);
    for &(subject, pct, aln, bits) in hits {
        block.push_row([
            query.to_string(),
            subject.to_string(),
            format!("{:.2}", pct),
            aln.to_string(),
            "0".to_string(),
            "0".to_string(),
            "1".to_string(),
            aln.to_string(),
            "1".to_string(),
            aln.to_string(),
            "1e-10".to_string(),
            format!("{}", bits),
        ]);
    }
    Ok(block)
}

pub fn grid(pcts: &[u32], alns: &[u32]) -> ThresholdGrid {
    ThresholdGrid::new(pcts.to_vec(), alns.to_vec()).unwrap()
}

pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
