//! Grid summarization
//!
//! Walks the reconciled table and builds one [`SummaryRecord`] per slot index.
//! Every populated slot is classified by comparing the two sides' bit scores
//! with exact floating-point comparisons:
//!
//! | first vs second            | outcome        | counter            |
//! |----------------------------|----------------|--------------------|
//! | equal                      | `Equal`        | `equal`            |
//! | greater, no second subject | `FirstOnly`    | `perfect_interest` |
//! | greater, second subject    | `FirstAhead`   | none               |
//! | smaller                    | `SecondAhead`  | `db_other`         |
//!
//! `FirstAhead` only bumps the first subject's usage count; downstream report
//! totals depend on that, so it is kept as is.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::table::{BestHitSlot, QueryBestHits};
use crate::common::query_label;
use crate::error::{CompareError, Result};
use crate::grid::{grid_point_id, ThresholdGrid, ThresholdPoint};

pub const SUMMARY_HEADER: &str = "#SeqId\tFirst\tSecond";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Equal,
    FirstOnly,
    FirstAhead,
    SecondAhead,
}

#[allow(clippy::float_cmp)]
pub fn classify(slot: &BestHitSlot) -> Classification {
    let first = slot.first.bit_score;
    let second = slot.second_bit_score();
    if first == second {
        Classification::Equal
    } else if first > second {
        if slot.second_subject().is_none() {
            Classification::FirstOnly
        } else {
            Classification::FirstAhead
        }
    } else {
        Classification::SecondAhead
    }
}

/// Aggregate for one pair of positionally matched grid points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    /// Filename-safe identifier, e.g. `p1_70-a1_50_p2_70-a2_50`.
    pub id: String,
    pub first_point: ThresholdPoint,
    pub second_point: ThresholdPoint,
    /// Populated slots seen at this index.
    pub populated: usize,
    pub equal: usize,
    pub perfect_interest: usize,
    pub db_other: usize,
    /// Written to the compile file's `Interest` column; no outcome increments it.
    pub db_interest: usize,
    /// Report lines, starting with [`SUMMARY_HEADER`].
    pub lines: Vec<String>,
    pub first_usage: FxHashMap<String, usize>,
    pub second_usage: FxHashMap<String, usize>,
    /// Queries classified `FirstOnly`.
    pub first_hits: Vec<String>,
    /// Queries classified `SecondAhead`.
    pub second_hits: Vec<String>,
    /// Subject ids registered on both sides.
    pub shared_subjects: Vec<String>,
}

impl SummaryRecord {
    pub fn new(first_point: ThresholdPoint, second_point: ThresholdPoint) -> Self {
        Self {
            id: grid_point_id(first_point, second_point),
            first_point,
            second_point,
            populated: 0,
            equal: 0,
            perfect_interest: 0,
            db_other: 0,
            db_interest: 0,
            lines: vec![SUMMARY_HEADER.to_string()],
            first_usage: FxHashMap::default(),
            second_usage: FxHashMap::default(),
            first_hits: Vec::new(),
            second_hits: Vec::new(),
            shared_subjects: Vec::new(),
        }
    }

    fn tally(&mut self, query: &str, slot: &BestHitSlot) {
        self.populated += 1;
        let first_subject = slot.first.subject_id.as_str();
        let second_subject = slot.second_subject();
        self.register(first_subject, second_subject);

        match classify(slot) {
            Classification::Equal => {
                self.equal += 1;
                self.lines.push(format!(
                    "{}\t{}\t{}",
                    query,
                    first_subject,
                    second_subject.unwrap_or("")
                ));
                bump(&mut self.first_usage, first_subject);
                if let Some(subject) = second_subject {
                    bump(&mut self.second_usage, subject);
                }
            }
            Classification::FirstOnly => {
                self.perfect_interest += 1;
                self.lines.push(format!("{}\t{}\t", query, first_subject));
                self.first_hits.push(query.to_string());
                bump(&mut self.first_usage, first_subject);
            }
            Classification::FirstAhead => {
                bump(&mut self.first_usage, first_subject);
            }
            Classification::SecondAhead => {
                self.db_other += 1;
                // The newline is part of the line itself.
                self.lines
                    .push(format!("{}\n\t{}", query, second_subject.unwrap_or("")));
                self.second_hits.push(query.to_string());
                if let Some(subject) = second_subject {
                    bump(&mut self.second_usage, subject);
                }
            }
        }
    }

    /// Registers first sightings at count 0 and flags ids already present on
    /// the opposite side.
    fn register(&mut self, first_subject: &str, second_subject: Option<&str>) {
        if !self.first_usage.contains_key(first_subject) {
            self.first_usage.insert(first_subject.to_string(), 0);
            if self.second_usage.contains_key(first_subject) {
                self.flag_shared(first_subject);
            }
        }
        if let Some(subject) = second_subject {
            if !self.second_usage.contains_key(subject) {
                self.second_usage.insert(subject.to_string(), 0);
                if self.first_usage.contains_key(subject) {
                    self.flag_shared(subject);
                }
            }
        }
    }

    fn flag_shared(&mut self, subject: &str) {
        if self.shared_subjects.iter().any(|s| s == subject) {
            return;
        }
        warn!(grid = %self.id, subject, "subject id found in both databases");
        self.shared_subjects.push(subject.to_string());
    }
}

fn bump(usage: &mut FxHashMap<String, usize>, subject: &str) {
    *usage.entry(subject.to_string()).or_insert(0) += 1;
}

/// Classifies every populated slot of `best_hits`.
///
/// Grid points are paired by slot index. Read-only over the table, so calling
/// it again yields the same records.
pub fn summarize(
    first: &ThresholdGrid,
    second: &ThresholdGrid,
    best_hits: &QueryBestHits,
) -> Result<Vec<SummaryRecord>> {
    first.ensure_paired(second)?;
    if best_hits.slots_per_query() != first.len() {
        return Err(CompareError::GridMismatch {
            first: best_hits.slots_per_query(),
            second: first.len(),
        });
    }

    let mut records: Vec<SummaryRecord> = first
        .points()
        .zip(second.points())
        .map(|(a, b)| SummaryRecord::new(a, b))
        .collect();

    for (query, slots) in best_hits.iter() {
        let label = query_label(query);
        for (record, slot) in records.iter_mut().zip(slots) {
            if let Some(slot) = slot {
                record.tally(label, slot);
            }
        }
    }

    Ok(records)
}
