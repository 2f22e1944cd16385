//! Configuration Module - Sieve Tuning Parameters
//!
//! Controls how many workers mark the buffer and how finely the
//! iteration range of a parallel region is partitioned.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SieveError};

/// Default smallest contiguous partition handed to a worker.
///
/// Below this size the cost of scheduling a task outweighs the marking work.
pub const DEFAULT_MIN_CHUNK_LEN: usize = 4096;

/// Configuration for a [`Sieve`](crate::Sieve)
///
/// # Examples
///
/// ```rust
/// use erato_sieve::SieveConfig;
///
/// // Use every logical CPU
/// let config = SieveConfig::default();
///
/// // Two workers, fine-grained partitions
/// let config = SieveConfig::default()
///     .with_workers(2)
///     .with_min_chunk_len(64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SieveConfig {
    /// Number of worker threads
    ///
    /// If None, uses the number of logical CPUs.
    #[serde(default)]
    pub workers: Option<usize>,

    /// Smallest partition length for a parallel region
    ///
    /// Default: 4096 cells
    #[serde(default = "default_min_chunk_len")]
    pub min_chunk_len: usize,
}

fn default_min_chunk_len() -> usize {
    DEFAULT_MIN_CHUNK_LEN
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            workers: None,
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
        }
    }
}

impl SieveConfig {
    /// Set an explicit worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the smallest partition length
    pub fn with_min_chunk_len(mut self, min_chunk_len: usize) -> Self {
        self.min_chunk_len = min_chunk_len;
        self
    }

    /// Worker count after resolving the CPU default
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validate configuration
    ///
    /// Rejects zero workers and zero-length partitions.
    pub fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            return Err(SieveError::InvalidConfig(
                "workers must be > 0".to_string(),
            ));
        }

        if self.min_chunk_len == 0 {
            return Err(SieveError::InvalidConfig(
                "min_chunk_len must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SieveConfig::default();
        assert_eq!(config.workers, None);
        assert_eq!(config.min_chunk_len, DEFAULT_MIN_CHUNK_LEN);
        assert!(config.validate().is_ok());
        assert!(config.effective_workers() >= 1);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = SieveConfig::default().with_workers(0);
        assert!(matches!(
            config.validate(),
            Err(SieveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_chunk_len_rejected() {
        let config = SieveConfig::default().with_min_chunk_len(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_workers() {
        let config = SieveConfig::default().with_workers(3);
        assert_eq!(config.effective_workers(), 3);
    }
}
