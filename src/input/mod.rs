//! Record sources
//!
//! A record source is any single-pass iterator of [`QueryBlock`]s. Each block
//! carries the metadata comments of one query (at least `QUERY`, and `FIELDS`
//! when the query has hits) followed by its hit rows, one `Vec<String>` per
//! row, positionally matching the `FIELDS` header.
//!
//! - `tabular` - reader for BLAST tabular output with comment lines

pub mod tabular;

pub use tabular::TabularReader;

use rustc_hash::FxHashMap;

use crate::common::HitRecord;
use crate::error::{CompareError, Result};

pub const QUERY_KEY: &str = "QUERY";
pub const FIELDS_KEY: &str = "FIELDS";

pub const PERCENTAGE_ID_FIELD: &str = "% identity";
pub const BIT_SCORE_FIELD: &str = "bit score";
pub const ALIGNMENT_LENGTH_FIELD: &str = "alignment length";
pub const EVALUE_FIELD: &str = "e-value";
pub const SUBJECT_ID_FIELD: &str = "Subject id";

/// One query's worth of tabular search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBlock {
    pub metadata: FxHashMap<String, String>,
    pub rows: Vec<Vec<String>>,
}

impl QueryBlock {
    pub fn new(query: impl Into<String>) -> Self {
        let mut metadata = FxHashMap::default();
        metadata.insert(QUERY_KEY.to_string(), query.into());
        Self {
            metadata,
            rows: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.metadata.insert(FIELDS_KEY.to_string(), fields.into());
        self
    }

    pub fn push_row<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
    }

    pub fn query(&self) -> Result<&str> {
        self.metadata
            .get(QUERY_KEY)
            .map(String::as_str)
            .ok_or(CompareError::MissingMetadata(QUERY_KEY))
    }

    pub fn fields(&self) -> Option<&str> {
        self.metadata.get(FIELDS_KEY).map(String::as_str)
    }

    /// Column layout from this block's `FIELDS` header.
    ///
    /// A block without a header is only accepted when it has no rows.
    pub fn layout(&self) -> Result<Option<FieldLayout>> {
        let query = self.query()?;
        match self.fields() {
            Some(fields) => FieldLayout::from_header(query, fields).map(Some),
            None if self.rows.is_empty() => Ok(None),
            None => Err(CompareError::MissingMetadata(FIELDS_KEY)),
        }
    }

    /// Parses every hit row, in stream order.
    pub fn hits(&self) -> Result<Vec<HitRecord>> {
        let query = self.query()?;
        let Some(layout) = self.layout()? else {
            return Ok(Vec::new());
        };
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| layout.parse_row(query, i + 1, row))
            .collect()
    }
}

/// Positions of the required columns within a `FIELDS` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub percentage_id: usize,
    pub bit_score: usize,
    pub alignment_length: usize,
    pub evalue: usize,
    pub subject_id: usize,
    width: usize,
}

impl FieldLayout {
    pub fn from_header(query: &str, fields: &str) -> Result<Self> {
        let names: Vec<&str> = fields.split(',').map(str::trim).collect();
        let find = |field: &'static str| {
            names
                .iter()
                .position(|name| *name == field)
                .ok_or_else(|| CompareError::MissingField {
                    query: query.to_string(),
                    field,
                })
        };

        let percentage_id = find(PERCENTAGE_ID_FIELD)?;
        let bit_score = find(BIT_SCORE_FIELD)?;
        let alignment_length = find(ALIGNMENT_LENGTH_FIELD)?;
        let evalue = find(EVALUE_FIELD)?;
        let subject_id = find(SUBJECT_ID_FIELD)?;
        let width = [percentage_id, bit_score, alignment_length, evalue, subject_id]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1;

        Ok(Self {
            percentage_id,
            bit_score,
            alignment_length,
            evalue,
            subject_id,
            width,
        })
    }

    /// Minimum number of values a row needs to cover every required column.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn parse_row(&self, query: &str, row_number: usize, row: &[String]) -> Result<HitRecord> {
        if row.len() < self.width {
            return Err(CompareError::MalformedRow {
                query: query.to_string(),
                row: row_number,
                found: row.len(),
                expected: self.width,
            });
        }

        let percentage_id = parse_metric(query, PERCENTAGE_ID_FIELD, &row[self.percentage_id])?;
        let bit_score = parse_metric(query, BIT_SCORE_FIELD, &row[self.bit_score])?;
        let evalue = parse_metric(query, EVALUE_FIELD, &row[self.evalue])?;
        let length = parse_metric(query, ALIGNMENT_LENGTH_FIELD, &row[self.alignment_length])?;
        // Lengths are whole numbers in BLAST output; a fractional value is floored,
        // which keeps `length >= cutoff` unchanged for integer cutoffs.
        if !length.is_finite() || length < 0.0 || length > f64::from(u32::MAX) {
            return Err(CompareError::InvalidValue {
                query: query.to_string(),
                field: ALIGNMENT_LENGTH_FIELD,
                value: row[self.alignment_length].clone(),
            });
        }

        Ok(HitRecord {
            subject_id: row[self.subject_id].clone(),
            percentage_id,
            bit_score,
            alignment_length: length as u32,
            evalue,
        })
    }
}

fn parse_metric(query: &str, field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CompareError::InvalidValue {
            query: query.to_string(),
            field,
            value: value.to_string(),
        })
}
