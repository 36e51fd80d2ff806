use clap::Args;
use std::path::PathBuf;

use crate::config::{CompareConfig, DEFAULT_ALIGNMENT_LENGTH, DEFAULT_PERCENTAGE_ID};
use crate::error::Result;
use crate::grid::ThresholdGrid;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Tabular results (-m 9 / -outfmt 7) of the queries against the first database
    #[arg(long)]
    pub first: PathBuf,
    /// Tabular results of the same queries against the second database
    #[arg(long)]
    pub second: PathBuf,
    /// Directory receiving the summary and compile files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
    /// Percentage identity cutoffs for the first database (comma separated)
    #[arg(long, value_delimiter = ',', default_values_t = vec![DEFAULT_PERCENTAGE_ID])]
    pub first_pct: Vec<u32>,
    /// Alignment length cutoffs for the first database (comma separated)
    #[arg(long, value_delimiter = ',', default_values_t = vec![DEFAULT_ALIGNMENT_LENGTH])]
    pub first_aln: Vec<u32>,
    /// Percentage identity cutoffs for the second database, paired by position
    #[arg(long, value_delimiter = ',', default_values_t = vec![DEFAULT_PERCENTAGE_ID])]
    pub second_pct: Vec<u32>,
    /// Alignment length cutoffs for the second database, paired by position
    #[arg(long, value_delimiter = ',', default_values_t = vec![DEFAULT_ALIGNMENT_LENGTH])]
    pub second_aln: Vec<u32>,
    /// Write hits_to_first_db_<grid>.txt listing first-only queries
    #[arg(long, default_value_t = false)]
    pub hits_to_first: bool,
    /// Write hits_to_second_db_<grid>.txt listing queries the second database wins
    #[arg(long, default_value_t = false)]
    pub hits_to_second: bool,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl CompareArgs {
    pub fn to_config(&self) -> Result<CompareConfig> {
        let first = ThresholdGrid::new(self.first_pct.clone(), self.first_aln.clone())?;
        let second = ThresholdGrid::new(self.second_pct.clone(), self.second_aln.clone())?;
        let mut config = CompareConfig::new(first, second)?.with_output_dir(&self.output);
        config.hits_to_first = self.hits_to_first;
        config.hits_to_second = self.hits_to_second;
        Ok(config)
    }
}
