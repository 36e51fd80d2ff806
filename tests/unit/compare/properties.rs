//! Whole-table properties of the two passes and the summarizer.

use hitgrid::common::HitRecord;
use hitgrid::compare::{best_hit, reconcile_second_pass, select_first_pass, summarize, FirstPass};
use hitgrid::config::CompareConfig;
use hitgrid::error::CompareError;
use hitgrid::grid::{ThresholdGrid, ThresholdPoint};
use hitgrid::input::QueryBlock;

use super::super::helpers::{block, grid};

/// Reference definition: highest positive score clearing both cutoffs,
/// earliest on ties.
fn expected_best(hits: &[HitRecord], point: ThresholdPoint) -> Option<&HitRecord> {
    let mut best: Option<&HitRecord> = None;
    for hit in hits.iter().filter(|h| point.admits(h) && h.bit_score > 0.0) {
        match best {
            Some(current) if current.bit_score >= hit.bit_score => {}
            _ => best = Some(hit),
        }
    }
    best
}

fn sample_hits() -> Vec<HitRecord> {
    let mut hits = Vec::new();
    for i in 0..40u32 {
        let pct = 50.0 + f64::from((i * 7) % 50);
        let len = 20 + (i * 13) % 300;
        let bits = f64::from((i * 37) % 23) * 10.0;
        hits.push(HitRecord::new(format!("S{}", i), pct, len, bits, 1e-5));
    }
    hits
}

#[test]
fn test_best_hit_matches_reference_over_grid() {
    let hits = sample_hits();
    let grid = grid(&[50, 60, 70, 80, 90, 99], &[0, 25, 100, 200, 320]);
    for point in grid.points() {
        let got = best_hit(&hits, point).map(|h| h.subject_id.as_str());
        let want = expected_best(&hits, point).map(|h| h.subject_id.as_str());
        assert_eq!(got, want, "point {:?}", point);
    }
}

fn two_pass(config: &CompareConfig) -> FirstPass {
    let first = vec![
        block("A", &[("a1", 95.0, 300, 500.0), ("a2", 75.0, 80, 120.0)]),
        block("B", &[("b1", 72.0, 55, 80.0)]),
        block("C", &[]),
        block("D", &[("d1", 60.0, 40, 900.0)]),
    ];
    let second = vec![
        block("A", &[("x1", 99.0, 400, 500.0), ("x2", 80.0, 90, 10.0)]),
        block("B", &[("y1", 91.0, 100, 81.0)]),
        block("C", &[("z1", 99.0, 500, 999.0)]),
        block("E", &[("w1", 99.0, 500, 999.0)]),
    ];
    let mut pass = select_first_pass(first, &config.first_grid).unwrap();
    reconcile_second_pass(second, &mut pass.best_hits, &config.second_grid).unwrap();
    pass
}

fn config() -> CompareConfig {
    CompareConfig::new(grid(&[70, 90], &[50, 100]), grid(&[70, 95], &[60, 100])).unwrap()
}

#[test]
fn test_second_side_implies_first_side() {
    let config = config();
    let pass = two_pass(&config);

    assert_eq!(pass.total_queries, 4);
    // C had no hits, D never clears 70%.
    assert!(!pass.best_hits.contains("C"));
    assert!(pass.best_hits.get("D").unwrap().iter().all(Option::is_none));
    assert!(!pass.best_hits.contains("E"));

    for (_, slots) in pass.best_hits.iter() {
        assert_eq!(slots.len(), config.first_grid.len());
    }
    let b = pass.best_hits.get("B").unwrap();
    // (70,50) populated on both sides; (70,100) and above never populated.
    assert!(b[0].as_ref().unwrap().second.is_some());
    assert!(b[1..].iter().all(Option::is_none));
}

#[test]
fn test_summaries_skip_absent_queries_and_are_repeatable() {
    let config = config();
    let pass = two_pass(&config);

    let once = summarize(&config.first_grid, &config.second_grid, &pass.best_hits).unwrap();
    let twice = summarize(&config.first_grid, &config.second_grid, &pass.best_hits).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once.len(), 4);

    for record in &once {
        for line in &record.lines {
            assert!(!line.starts_with('C') && !line.starts_with('E'), "{:?}", line);
        }
    }

    // (70,50) vs (70,60): A ties at 500, B loses 80 vs 81.
    let first = &once[0];
    assert_eq!(first.id, "p1_70-a1_50_p2_70-a2_60");
    assert_eq!(first.equal, 1);
    assert_eq!(first.db_other, 1);
    assert_eq!(first.lines[1..], ["A\ta1\tx1".to_string(), "B\n\ty1".to_string()]);

    // (90,100) vs (95,100): only A is populated, x1 still ties.
    let last = &once[3];
    assert_eq!(last.id, "p1_90-a1_100_p2_95-a2_100");
    assert_eq!(last.populated, 1);
    assert_eq!(last.equal, 1);
}

#[test]
fn test_reconcile_twice_overwrites_second_side() {
    let config = config();
    let mut pass = two_pass(&config);

    let again = vec![block("A", &[("x9", 99.0, 400, 20.0)])];
    reconcile_second_pass(again, &mut pass.best_hits, &config.second_grid).unwrap();
    let slot = pass.best_hits.get("A").unwrap()[0].as_ref().unwrap();
    assert_eq!(slot.second.as_ref().unwrap().subject_id, "x9");
}

#[test]
fn test_mismatched_grids_surface_as_errors() {
    let first = ThresholdGrid::new(vec![70, 80], vec![50]).unwrap();
    let second = ThresholdGrid::new(vec![70], vec![50]).unwrap();
    let source = vec![block("A", &[("a1", 95.0, 300, 500.0)])];
    let mut pass = select_first_pass(source, &first).unwrap();

    let empty: Vec<Result<QueryBlock, CompareError>> = Vec::new();
    let err = reconcile_second_pass(empty, &mut pass.best_hits, &second).unwrap_err();
    assert!(matches!(err, CompareError::GridMismatch { first: 2, second: 1 }));

    let err = summarize(&first, &second, &pass.best_hits).unwrap_err();
    assert!(matches!(err, CompareError::GridMismatch { .. }));
}

#[test]
fn test_malformed_first_source_aborts() {
    let bad = QueryBlock::new("A")
        .with_fields("Subject id, % identity, alignment length, bit score");
    let err = select_first_pass(vec![Ok(bad)], &grid(&[70], &[50])).unwrap_err();
    assert!(matches!(err, CompareError::MissingField { field: "e-value", .. }));
}
