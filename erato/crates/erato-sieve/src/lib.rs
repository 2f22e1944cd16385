//! # erato-sieve - Parallel Sieve of Eratosthenes
//!
//! Computes every prime strictly below a bound N. The marking phase runs on
//! a pool of workers that share one mark buffer without locks or atomics.
//!
//! ## Quick Start
//!
//! ```rust
//! use erato_sieve::{Sieve, SieveConfig};
//!
//! fn main() -> Result<(), erato_sieve::SieveError> {
//!     let sieve = Sieve::new(SieveConfig::default().with_workers(4))?;
//!     let outcome = sieve.run(18)?;
//!     assert_eq!(outcome.primes, vec![2, 3, 5, 7, 11, 13, 17]);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Buffer Initializer   (parallel, disjoint chunks)      │
//! └──────────────────────────┬───────────────────────────┘
//!                            │ join
//! ┌──────────────────────────▼───────────────────────────┐
//! │ Sieve Driver         (sequential, c = 2 ..= isqrt N)  │
//! │    └─ Parallel Marker (parallel, one round per prime) │
//! │          join before c+1                              │
//! └──────────────────────────┬───────────────────────────┘
//!                            │
//! ┌──────────────────────────▼───────────────────────────┐
//! │ Result Extractor     (sequential scan)                │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why no locks are needed
//!
//! - Only one parallel region touches the buffer at a time: the driver holds
//!   `&mut MarkBuffer` across each marking round and every round joins
//!   before the next candidate is read.
//! - Within a region, [`WorkerPool::map_chunks`] gives each task its own
//!   contiguous `&mut` sub-slice, so no two tasks can write the same cell.
//!
//! ## Module Organization
//!
//! - [`buffer`] - mark buffer and parallel initialization
//! - [`driver`] - sequential sweep over candidates
//! - [`marker`] - parallel marking of one prime's multiples
//! - [`extract`] - result extraction
//! - [`pool`] - fork-join worker pool
//! - [`stats`] - counters and phase timings
//! - [`config`] - tuning parameters
//! - [`error`] - error types

pub mod buffer;
pub mod config;
pub mod driver;
pub mod error;
pub mod extract;
pub mod marker;
pub mod pool;
pub mod stats;

pub use buffer::{Mark, MarkBuffer};
pub use config::{SieveConfig, DEFAULT_MIN_CHUNK_LEN};
pub use driver::Sweep;
pub use error::{Result, SieveError};
pub use extract::{extract_primes, Primes};
pub use marker::{mark_multiples, MarkRound};
pub use pool::WorkerPool;
pub use stats::{PhaseTimer, SieveStats};

/// Primes below a bound together with run statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveOutcome {
    /// Primes in increasing order
    pub primes: Vec<usize>,
    /// Counters and timings for the run
    pub stats: SieveStats,
}

/// Sieve - reusable entry point owning a worker pool
///
/// The pool is built once and reused by every call to [`Sieve::run`].
#[derive(Debug)]
pub struct Sieve {
    config: SieveConfig,
    pool: WorkerPool,
}

impl Sieve {
    /// Create a sieve from a configuration
    ///
    /// # Errors
    /// `InvalidConfig` for a rejected configuration, `WorkerPool` if the
    /// worker threads cannot be spawned.
    pub fn new(config: SieveConfig) -> Result<Self> {
        let pool = WorkerPool::new(&config)?;
        Ok(Self { config, pool })
    }

    /// Create a sieve using every logical CPU
    pub fn with_defaults() -> Result<Self> {
        Self::new(SieveConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    /// Get the worker pool
    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Number of workers used for parallel regions
    pub fn workers(&self) -> usize {
        self.pool.num_workers()
    }

    /// Initialize and sweep a buffer for `bound`, without extraction
    ///
    /// The returned buffer is settled: cell `i` (2 <= i < bound) is marked
    /// iff `i` is composite.
    ///
    /// # Errors
    /// `ResourceExhausted` if the buffer cannot be allocated.
    pub fn mark(&self, bound: usize) -> Result<(MarkBuffer, SieveStats)> {
        let mut stats = SieveStats::new(bound, self.workers());

        let timer = PhaseTimer::start();
        let mut buffer = MarkBuffer::allocate(&self.pool, bound)?;
        stats.init_time = timer.elapsed();

        let timer = PhaseTimer::start();
        Sweep::new(&self.pool, &mut buffer).finish(&mut stats);
        stats.sweep_time = timer.elapsed();

        tracing::debug!(
            bound,
            rounds = stats.rounds,
            skipped = stats.skipped,
            writes = stats.writes,
            "sweep complete"
        );

        Ok((buffer, stats))
    }

    /// Compute every prime strictly below `bound`
    ///
    /// # Errors
    /// `ResourceExhausted` if the buffer cannot be allocated.
    pub fn run(&self, bound: usize) -> Result<SieveOutcome> {
        let (buffer, mut stats) = self.mark(bound)?;

        let timer = PhaseTimer::start();
        let primes = extract_primes(&buffer);
        stats.extract_time = timer.elapsed();

        Ok(SieveOutcome { primes, stats })
    }
}

/// Compute every prime strictly below `bound` with the default configuration
///
/// # Examples
///
/// ```rust
/// assert_eq!(erato_sieve::primes_below(16).unwrap(), vec![2, 3, 5, 7, 11, 13]);
/// ```
pub fn primes_below(bound: usize) -> Result<Vec<usize>> {
    Ok(Sieve::with_defaults()?.run(bound)?.primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_run_small_bounds() {
        let sieve = Sieve::new(SieveConfig::default().with_workers(2)).unwrap();
        assert!(sieve.run(2).unwrap().primes.is_empty());
        assert_eq!(sieve.run(3).unwrap().primes, vec![2]);
        assert_eq!(sieve.run(16).unwrap().primes, vec![2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn test_sieve_accepts_degenerate_bounds() {
        let sieve = Sieve::new(SieveConfig::default().with_workers(1)).unwrap();
        assert!(sieve.run(0).unwrap().primes.is_empty());
        assert!(sieve.run(1).unwrap().primes.is_empty());
    }

    #[test]
    fn test_sieve_stats() {
        let sieve = Sieve::new(SieveConfig::default().with_workers(3)).unwrap();
        let outcome = sieve.run(100).unwrap();

        assert_eq!(outcome.primes.len(), 25);
        assert_eq!(outcome.stats.bound, 100);
        assert_eq!(outcome.stats.workers, 3);
        assert_eq!(outcome.stats.rounds, 4);
        assert_eq!(outcome.stats.newly_marked, 98 - 25);
    }

    #[test]
    fn test_sieve_reports_resource_exhausted() {
        let sieve = Sieve::new(SieveConfig::default().with_workers(1)).unwrap();
        let err = sieve.run(usize::MAX).unwrap_err();
        assert!(err.is_resource_exhausted());
    }

    #[test]
    fn test_sieve_rejects_invalid_config() {
        let result = Sieve::new(SieveConfig::default().with_min_chunk_len(0));
        assert!(matches!(result, Err(SieveError::InvalidConfig(_))));
    }

    #[test]
    fn test_primes_below() {
        assert_eq!(primes_below(18).unwrap(), vec![2, 3, 5, 7, 11, 13, 17]);
    }
}
