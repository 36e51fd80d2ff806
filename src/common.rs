/// Bit score read for a slot whose second database produced no qualifying hit.
pub const UNMATCHED_BIT_SCORE: f64 = -1.0;

/// One alignment row of a query against one database.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    pub subject_id: String,
    pub percentage_id: f64,
    pub bit_score: f64,
    pub alignment_length: u32,
    pub evalue: f64,
}

impl HitRecord {
    pub fn new(
        subject_id: impl Into<String>,
        percentage_id: f64,
        alignment_length: u32,
        bit_score: f64,
        evalue: f64,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            percentage_id,
            bit_score,
            alignment_length,
            evalue,
        }
    }
}

/// First whitespace-separated token of a query name, as written to reports.
pub fn query_label(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
