use hitgrid::compare::select_first_pass;
use hitgrid::error::CompareError;
use hitgrid::input::{QueryBlock, TabularReader};

use super::super::helpers::{data_path, grid};

#[test]
fn test_reads_fixture_blocks_in_order() {
    let reader = TabularReader::from_path(&data_path("first_db.txt")).unwrap();
    let blocks: Vec<QueryBlock> = reader.collect::<Result<_, _>>().unwrap();

    let queries: Vec<&str> = blocks.iter().map(|b| b.query().unwrap()).collect();
    assert_eq!(queries, vec!["q1 len=500", "q2", "q3", "q4", "q5"]);
    assert!(blocks[2].rows.is_empty());

    let q1 = blocks[0].hits().unwrap();
    assert_eq!(q1.len(), 2);
    assert_eq!(q1[0].subject_id, "f_a");
    assert_eq!(q1[0].alignment_length, 400);
    // Below 95% identity, so only f_b qualifies at the strict grid point.
    assert_eq!(q1[0].percentage_id, 94.0);
    assert_eq!(q1[1].evalue, 1e-50);

    let q4 = blocks[3].hits().unwrap();
    assert_eq!(q4[0].bit_score, 66.2);
}

#[test]
fn test_first_pass_over_fixture() {
    let reader = TabularReader::from_path(&data_path("first_db.txt")).unwrap();
    let pass = select_first_pass(reader, &grid(&[70, 95], &[50])).unwrap();

    assert_eq!(pass.total_queries, 5);
    assert_eq!(pass.best_hits.len(), 4);
    assert!(!pass.best_hits.contains("q3"));

    let q1 = pass.best_hits.get("q1 len=500").unwrap();
    assert_eq!(q1[0].as_ref().unwrap().first.subject_id, "f_a");
    assert_eq!(q1[1].as_ref().unwrap().first.subject_id, "f_b");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = TabularReader::from_path(&data_path("no_such_file.txt")).err().unwrap();
    assert!(matches!(err, CompareError::Io(_)));
}
