//! Report writers
//!
//! - `summary` - per grid point files (`summary_<id>.txt`, optional query lists)
//! - `compile` - one row per grid point across the whole run

pub mod compile;
pub mod summary;

pub use compile::{write_compile_output, write_compile_output_with_hits};
pub use summary::{write_query_list, write_summary};

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::compare::SummaryRecord;
use crate::config::CompareConfig;

pub const COMPILE_OUTPUT: &str = "compile_output.txt";
pub const COMPILE_OUTPUT_WITH_HITS: &str = "compile_output_no_nohits.txt";

pub fn summary_filename(record: &SummaryRecord) -> String {
    format!("summary_{}.txt", record.id)
}

pub fn hits_to_first_filename(record: &SummaryRecord) -> String {
    format!("hits_to_first_db_{}.txt", record.id)
}

pub fn hits_to_second_filename(record: &SummaryRecord) -> String {
    format!("hits_to_second_db_{}.txt", record.id)
}

/// Writes every report file for `records` under `config.output_dir`,
/// creating the directory if needed. Returns the paths written.
pub fn write_reports(
    records: &[SummaryRecord],
    total_queries: usize,
    config: &CompareConfig,
) -> io::Result<Vec<PathBuf>> {
    let dir = config.output_dir.as_path();
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    for record in records {
        written.push(write_file(dir, &summary_filename(record), |w| {
            write_summary(record, w)
        })?);
        if config.hits_to_first {
            written.push(write_file(dir, &hits_to_first_filename(record), |w| {
                write_query_list(&record.first_hits, w)
            })?);
        }
        if config.hits_to_second {
            written.push(write_file(dir, &hits_to_second_filename(record), |w| {
                write_query_list(&record.second_hits, w)
            })?);
        }
    }

    written.push(write_file(dir, COMPILE_OUTPUT, |w| {
        write_compile_output(records, total_queries, w)
    })?);
    written.push(write_file(dir, COMPILE_OUTPUT_WITH_HITS, |w| {
        write_compile_output_with_hits(records, w)
    })?);

    debug!(files = written.len(), dir = %dir.display(), "reports written");
    Ok(written)
}

fn write_file<F>(dir: &Path, name: &str, body: F) -> io::Result<PathBuf>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let path = dir.join(name);
    let mut writer = BufWriter::new(File::create(&path)?);
    body(&mut writer)?;
    writer.flush()?;
    Ok(path)
}
