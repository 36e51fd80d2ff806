//! Best-hit table shared by the two passes
//!
//! One row per query that had at least one hit in the first database, one
//! slot per grid point. An absent slot (`None`) means no first-database hit
//! cleared that point's cutoffs; a present slot always holds the first
//! database's hit, and its `second` side is filled by reconciliation.

use rustc_hash::FxHashMap;

use crate::common::{HitRecord, UNMATCHED_BIT_SCORE};

#[derive(Debug, Clone, PartialEq)]
pub struct BestHitSlot {
    pub first: HitRecord,
    pub second: Option<HitRecord>,
}

impl BestHitSlot {
    pub fn new(first: HitRecord) -> Self {
        Self {
            first,
            second: None,
        }
    }

    /// Second-database bit score, `-1` when nothing was attached.
    pub fn second_bit_score(&self) -> f64 {
        self.second
            .as_ref()
            .map_or(UNMATCHED_BIT_SCORE, |hit| hit.bit_score)
    }

    /// Second-database subject, `None` when nothing (or an empty id) was attached.
    pub fn second_subject(&self) -> Option<&str> {
        self.second
            .as_ref()
            .map(|hit| hit.subject_id.as_str())
            .filter(|id| !id.is_empty())
    }
}

pub type Slots = Vec<Option<BestHitSlot>>;

/// Query name → slots, iterated in the order queries were first inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBestHits {
    slots_per_query: usize,
    index: FxHashMap<String, usize>,
    entries: Vec<(String, Slots)>,
}

impl QueryBestHits {
    pub fn new(slots_per_query: usize) -> Self {
        Self {
            slots_per_query,
            index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    /// Number of slots every row holds (the first grid's point count).
    pub fn slots_per_query(&self) -> usize {
        self.slots_per_query
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, query: &str) -> bool {
        self.index.contains_key(query)
    }

    pub fn get(&self, query: &str) -> Option<&[Option<BestHitSlot>]> {
        self.index
            .get(query)
            .map(|&i| self.entries[i].1.as_slice())
    }

    pub(crate) fn get_mut(&mut self, query: &str) -> Option<&mut [Option<BestHitSlot>]> {
        let i = *self.index.get(query)?;
        Some(self.entries[i].1.as_mut_slice())
    }

    /// Stores a query's slots. A repeated query replaces the earlier slots
    /// but keeps its original position.
    pub(crate) fn insert(&mut self, query: String, slots: Slots) {
        debug_assert_eq!(slots.len(), self.slots_per_query);
        match self.index.get(&query) {
            Some(&i) => self.entries[i].1 = slots,
            None => {
                self.index.insert(query.clone(), self.entries.len());
                self.entries.push((query, slots));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<BestHitSlot>])> {
        self.entries
            .iter()
            .map(|(query, slots)| (query.as_str(), slots.as_slice()))
    }
}
