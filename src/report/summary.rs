use std::io::{self, Write};

use crate::compare::SummaryRecord;

/// Writes a record's lines, each followed by `\n`.
///
/// Lines for queries the second database wins carry their own embedded
/// newline and are written unchanged.
pub fn write_summary<W: Write>(record: &SummaryRecord, writer: &mut W) -> io::Result<()> {
    for line in &record.lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// One query id per line.
pub fn write_query_list<W: Write>(queries: &[String], writer: &mut W) -> io::Result<()> {
    for query in queries {
        writeln!(writer, "{}", query)?;
    }
    Ok(())
}
