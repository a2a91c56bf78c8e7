use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MiningError, MiningResult};

pub const DEFAULT_MIN_SUPPORT: usize = 2;

/// Settings for one mining run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Minimum number of supporting sequences.
    pub min_support: usize,
    /// Count support across the rayon pool. The search stays sequential.
    pub parallel: bool,
    /// Cache supports by pattern for the duration of the run.
    pub memoize: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            parallel: false,
            memoize: false,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: usize) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn from_toml_str(text: &str) -> MiningResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> MiningResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MiningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> MiningResult<()> {
        if self.min_support == 0 {
            return Err(MiningError::InvalidThreshold(0));
        }
        Ok(())
    }
}

/// Convert a user-supplied threshold, rejecting non-positive values.
pub fn threshold_from_raw(raw: i64) -> MiningResult<usize> {
    if raw <= 0 {
        return Err(MiningError::InvalidThreshold(raw));
    }
    usize::try_from(raw).map_err(|_| MiningError::InvalidThreshold(raw))
}
