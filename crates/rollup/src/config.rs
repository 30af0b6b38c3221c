use std::{env, num::ParseIntError};

/// Environment variable holding the log query chunk size.
pub const CHUNK_SIZE_ENV: &str = "ORBIT_LOG_CHUNK_SIZE";

/// Default maximum number of blocks covered by a single log query.
///
/// Stays below the range limits of common RPC providers.
pub const DEFAULT_CHUNK_SIZE: u64 = 10_000;

/// Errors produced when building a [`ScanConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Error loading from environment variable
    #[error("non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing environment variable
    #[error("failed to parse environment variable {key}: {source}")]
    Parse {
        /// The variable that failed to parse.
        key: String,
        /// The underlying parse error.
        #[source]
        source: ParseIntError,
    },
    /// A chunk size of zero would never make progress.
    #[error("log query chunk size must be greater than zero")]
    ZeroChunkSize,
}

/// Configuration for the block range scan performed by
/// [`RollupTxLocator`](crate::RollupTxLocator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    chunk_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE }
    }
}

impl ScanConfig {
    /// Create a new config with the given chunk size.
    pub const fn new(chunk_size: u64) -> Result<Self, ConfigError> {
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(Self { chunk_size })
    }

    /// Load the config from the environment, falling back to the defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let chunk_size = load_u64_opt(&lookup, CHUNK_SIZE_ENV)?.unwrap_or(DEFAULT_CHUNK_SIZE);
        Self::new(chunk_size)
    }

    /// Get the maximum number of blocks covered by a single log query.
    pub const fn chunk_size(&self) -> u64 {
        self.chunk_size
    }
}

/// Load an optional u64, treating an unset variable as `None`.
fn load_u64_opt<F>(lookup: &F, key: &str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|source| ConfigError::Parse { key: key.to_string(), source }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::Var(key.to_string())),
    }
}
