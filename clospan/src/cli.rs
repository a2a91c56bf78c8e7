//! Command-line arguments for the `clospan` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{threshold_from_raw, MinerConfig};
use crate::error::MiningResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned pattern/support table
    Table,
    /// JSON array of {pattern, support}
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "clospan")]
#[command(version)]
#[command(about = "Mine closed frequent sequential patterns", long_about = None)]
pub struct Cli {
    /// Input file (.txt or .csv), one comma-separated sequence per line. Reads stdin if omitted
    pub input: Option<PathBuf>,

    /// Inline input text, used instead of INPUT
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Minimum number of sequences a pattern must occur in
    #[arg(short = 's', long = "min-support", value_name = "N", allow_negative_numbers = true)]
    pub min_support: Option<i64>,

    /// Treat whitespace inside a token as separating items of one itemset
    #[arg(long)]
    pub itemsets: bool,

    /// TOML file with miner settings; flags override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Count support in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Cache pattern supports during the run
    #[arg(long)]
    pub memoize: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Merge the config file (if any) with command-line flags and validate.
    pub fn miner_config(&self) -> MiningResult<MinerConfig> {
        let mut config = match &self.config {
            Some(path) => MinerConfig::from_file(path)?,
            None => MinerConfig::default(),
        };
        if let Some(raw) = self.min_support {
            config.min_support = threshold_from_raw(raw)?;
        }
        config.parallel |= self.parallel;
        config.memoize |= self.memoize;
        config.validate()?;
        Ok(config)
    }
}
