//! Error type shared by the record reader, both passes and the summarizer.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompareError>;

#[derive(Debug, Error)]
pub enum CompareError {
    /// The block's `FIELDS` header does not name a required column.
    #[error("query {query:?}: FIELDS header has no {field:?} column")]
    MissingField { query: String, field: &'static str },

    #[error("query block has no {0} entry")]
    MissingMetadata(&'static str),

    #[error("query {query:?}: hit row {row} has {found} values, header needs at least {expected}")]
    MalformedRow {
        query: String,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("query {query:?}: {field} value {value:?} is not a valid number")]
    InvalidValue {
        query: String,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: hit row appears before any '# Query:' line")]
    OrphanRow { line: usize },

    #[error("threshold grid has no {0} cutoffs")]
    EmptyGrid(&'static str),

    /// Slot indices only line up when both grids enumerate the same number of points.
    #[error("threshold grids differ in size: first has {first} points, second has {second}")]
    GridMismatch { first: usize, second: usize },

    #[error("{axis} cutoff lists differ in length: first has {first}, second has {second}")]
    AxisMismatch {
        axis: &'static str,
        first: usize,
        second: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
