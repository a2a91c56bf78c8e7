pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod report;
pub mod seq;

#[cfg(feature = "python")]
mod python;

pub use config::MinerConfig;
pub use error::{MiningError, MiningResult};
pub use seq::{clospan_algorithm, mine, ClosedPatternSet, MiningOutcome, SequenceDatabase};
