//! Reader for BLAST tabular output with comment lines
//!
//! Accepts the legacy `blastall -m 9` layout (and `-outfmt 7` files that use
//! the same column names):
//!
//! ```text
//! # BLASTN 2.2.22 [Sep-27-2009]
//! # Query: contig_1 length=812
//! # Database: first.fna
//! # Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score
//! contig_1	ref_9	98.50	200	3	0	1	200	1	200	1e-100	  363
//! ```
//!
//! `# Query:` opens a block. Other `# Key: value` comments land in the block's
//! metadata under the upper-cased key; comments without a colon (program
//! banner, `# N hits found`) are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use super::{QueryBlock, QUERY_KEY};
use crate::error::{CompareError, Result};

/// Single-pass iterator over the query blocks of one results file.
pub struct TabularReader<R> {
    lines: Lines<R>,
    line_number: usize,
    pending: Option<QueryBlock>,
    finished: bool,
}

impl TabularReader<BufReader<File>> {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TabularReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            pending: None,
            finished: false,
        }
    }

    fn fail(&mut self, err: CompareError) -> Option<Result<QueryBlock>> {
        self.finished = true;
        self.pending = None;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for TabularReader<R> {
    type Item = Result<QueryBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => return self.fail(err.into()),
                None => {
                    self.finished = true;
                    return self.pending.take().map(Ok);
                }
            };
            self.line_number += 1;

            let text = line.trim_end_matches(['\r', '\n']);
            if text.trim().is_empty() {
                continue;
            }

            if let Some(comment) = text.strip_prefix('#') {
                let Some((key, value)) = comment.split_once(':') else {
                    continue;
                };
                let key = key.trim().to_uppercase();
                let value = value.trim();
                if key == QUERY_KEY {
                    if let Some(done) = self.pending.replace(QueryBlock::new(value)) {
                        return Some(Ok(done));
                    }
                } else if let Some(block) = self.pending.as_mut() {
                    block.metadata.insert(key, value.to_string());
                }
                continue;
            }

            match self.pending.as_mut() {
                Some(block) => block.push_row(text.split('\t')),
                None => {
                    let line = self.line_number;
                    return self.fail(CompareError::OrphanRow { line });
                }
            }
        }
    }
}
