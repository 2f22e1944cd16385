//! Worker Pool - Fork-Join Parallel Regions
//!
//! Every parallel region of the sieve (buffer initialization and each
//! marking round) runs through [`WorkerPool::map_chunks`]. A region is a
//! slice split into contiguous chunks of a deterministic length; each chunk
//! is handed to exactly one task as its own `&mut` sub-slice, and the call
//! returns only after every task has finished.
//!
//! ## Partitioning
//!
//! ```text
//! region:  [ base ........................................ base+len )
//! chunks:  [ chunk 0 ][ chunk 1 ][ chunk 2 ] ... [ chunk k (short) ]
//!            ^ base     ^ base+chunk_len
//! ```
//!
//! `chunk_len = max(ceil(len / (workers * CHUNKS_PER_WORKER)), min_chunk_len)`.
//! Oversplitting by `CHUNKS_PER_WORKER` lets work stealing even out chunks
//! whose marking cost differs.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::SieveConfig;
use crate::error::{Result, SieveError};

/// Target number of chunks per worker in one parallel region
pub const CHUNKS_PER_WORKER: usize = 4;

/// Bounded pool of sieve workers
#[derive(Debug)]
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
    min_chunk_len: usize,
}

impl WorkerPool {
    /// Build a pool from a validated configuration
    pub fn new(config: &SieveConfig) -> Result<Self> {
        config.validate()?;
        let workers = config.effective_workers();

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("erato-worker-{}", i))
            .build()
            .map_err(|e| SieveError::WorkerPool(e.to_string()))?;

        tracing::debug!(workers, min_chunk_len = config.min_chunk_len, "worker pool started");

        Ok(Self {
            pool,
            workers,
            min_chunk_len: config.min_chunk_len,
        })
    }

    /// Get number of workers in the pool
    pub fn num_workers(&self) -> usize {
        self.workers
    }

    /// Partition length used for a region of `len` cells
    pub fn chunk_len(&self, len: usize) -> usize {
        let target_chunks = self.workers.saturating_mul(CHUNKS_PER_WORKER).max(1);
        len.div_ceil(target_chunks).max(self.min_chunk_len).max(1)
    }

    /// Run `f` over contiguous chunks of `cells` in parallel and join
    ///
    /// `f` receives the absolute index of the chunk's first cell
    /// (`base` + offset into `cells`) and the chunk itself. The per-chunk
    /// results are summed.
    ///
    /// # Disjointness
    ///
    /// Chunks never overlap and each one is borrowed mutably by a single
    /// task, so no cell is written by two tasks and no task observes another
    /// task's writes. The caller must not start another region until this
    /// one returns; holding `&mut` over the region for the duration of the
    /// call makes that impossible to get wrong.
    pub fn map_chunks<T, F>(&self, cells: &mut [T], base: usize, f: F) -> usize
    where
        T: Send,
        F: Fn(usize, &mut [T]) -> usize + Sync,
    {
        if cells.is_empty() {
            return 0;
        }

        let chunk_len = self.chunk_len(cells.len());
        self.pool.install(|| {
            cells
                .par_chunks_mut(chunk_len)
                .enumerate()
                .map(|(i, chunk)| f(base + i * chunk_len, chunk))
                .sum::<usize>()
        })
    }
}
