use std::path::PathBuf;

/// Errors raised around a mining run. The engine itself does not fail.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("minimum support must be greater than 0, got {0}")]
    InvalidThreshold(i64),

    #[error("no sequences could be parsed from the input")]
    EmptyInput,

    #[error("unsupported input file {path}: expected a .txt or .csv file")]
    UnsupportedFile { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

impl MiningError {
    /// Input problems the user can fix, as opposed to unexpected failures.
    pub fn is_user_warning(&self) -> bool {
        matches!(self, Self::InvalidThreshold(_) | Self::EmptyInput)
    }
}

pub type MiningResult<T> = Result<T, MiningError>;
