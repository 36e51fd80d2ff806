//! Test suite for hitgrid
//!
//! Tests are organized by module:
//! - `compare/` - best-hit selection, reconciliation and summarization
//! - `input/` - tabular reader against fixture files
//! - `report/` - report files written to a temporary directory

pub mod compare;
pub mod helpers;
