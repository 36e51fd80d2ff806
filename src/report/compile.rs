//! Compile files: one row per grid point.
//!
//! `compile_output.txt` reports against every query read from the first
//! database, so queries without a populated slot show up as `NoHits`.
//! `compile_output_no_nohits.txt` reports against populated slots only.

use std::io::{self, Write};

use crate::compare::SummaryRecord;

pub const COMPILE_HEADER: &str =
    "#Grid\tTotal\tNoHits\tEqual\tFirstOnly\tSecond\tInterest\tNoHits%\tEqual%\tFirstOnly%\tSecond%";
pub const COMPILE_WITH_HITS_HEADER: &str =
    "#Grid\tWithHits\tEqual\tFirstOnly\tSecond\tEqual%\tFirstOnly%\tSecond%";

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

pub fn write_compile_output<W: Write>(
    records: &[SummaryRecord],
    total_queries: usize,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "{}", COMPILE_HEADER)?;
    for record in records {
        let no_hits = total_queries.saturating_sub(record.populated);
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
            record.id,
            total_queries,
            no_hits,
            record.equal,
            record.perfect_interest,
            record.db_other,
            record.db_interest,
            percent(no_hits, total_queries),
            percent(record.equal, total_queries),
            percent(record.perfect_interest, total_queries),
            percent(record.db_other, total_queries),
        )?;
    }
    Ok(())
}

pub fn write_compile_output_with_hits<W: Write>(
    records: &[SummaryRecord],
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "{}", COMPILE_WITH_HITS_HEADER)?;
    for record in records {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{:.2}\t{:.2}\t{:.2}",
            record.id,
            record.populated,
            record.equal,
            record.perfect_interest,
            record.db_other,
            percent(record.equal, record.populated),
            percent(record.perfect_interest, record.populated),
            percent(record.db_other, record.populated),
        )?;
    }
    Ok(())
}
