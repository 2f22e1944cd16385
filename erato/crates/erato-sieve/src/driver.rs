//! Sieve Driver - Sequential Sweep over Candidates
//!
//! Walks candidates `c = 2 ..= isqrt(N)` in order. An unmarked candidate is
//! prime and triggers one marking round; a marked candidate was already
//! reached by a smaller prime factor and is skipped.
//!
//! ## Ordering
//!
//! ```text
//! c=2  read ─► mark_multiples(2) ─► join
//! c=3  read ─► mark_multiples(3) ─► join
//! c=4  read (marked, skip)
//! c=5  read ─► mark_multiples(5) ─► join
//! ...
//! ```
//!
//! Every read of a candidate happens after the previous round has joined,
//! so the driver always observes a settled buffer. [`Sweep`] exposes this
//! as an iterator: between two calls to `next` no worker is running and
//! [`Sweep::buffer`] may be inspected freely.

use crate::buffer::MarkBuffer;
use crate::marker::{self, MarkRound};
use crate::pool::WorkerPool;
use crate::stats::SieveStats;

/// Sweep - in-progress run of the outer sieve loop
#[derive(Debug)]
pub struct Sweep<'a> {
    pool: &'a WorkerPool,
    buffer: &'a mut MarkBuffer,
    candidate: usize,
    limit: usize,
    skipped: usize,
}

impl<'a> Sweep<'a> {
    /// Start a sweep over an unmarked buffer
    pub fn new(pool: &'a WorkerPool, buffer: &'a mut MarkBuffer) -> Self {
        let limit = buffer.len().isqrt();
        Self {
            pool,
            buffer,
            candidate: 2,
            limit,
            skipped: 0,
        }
    }

    /// Settled buffer state after the last completed round
    pub fn buffer(&self) -> &MarkBuffer {
        &*self.buffer
    }

    /// Next candidate to be examined
    pub fn candidate(&self) -> usize {
        self.candidate
    }

    /// Largest candidate the sweep examines, `isqrt(N)`
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Candidates skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Check if every candidate has been examined
    pub fn is_done(&self) -> bool {
        self.candidate > self.limit
    }

    /// Run the remaining rounds and fold them into `stats`
    pub fn finish(mut self, stats: &mut SieveStats) {
        for round in self.by_ref() {
            stats.record_round(&round);
        }
        stats.skipped += self.skipped;
    }
}

impl Iterator for Sweep<'_> {
    type Item = MarkRound;

    fn next(&mut self) -> Option<MarkRound> {
        while self.candidate <= self.limit {
            let candidate = self.candidate;
            self.candidate += 1;

            if self.buffer.is_marked(candidate) {
                self.skipped += 1;
                continue;
            }

            let round = marker::mark_multiples(self.pool, self.buffer, candidate);
            tracing::trace!(
                prime = round.prime,
                writes = round.writes,
                newly_marked = round.newly_marked,
                "marking round joined"
            );
            return Some(round);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SieveConfig;

    fn pool() -> WorkerPool {
        let config = SieveConfig::default()
            .with_workers(2)
            .with_min_chunk_len(1);
        WorkerPool::new(&config).unwrap()
    }

    #[test]
    fn test_rounds_follow_primes_up_to_sqrt() {
        let pool = pool();
        let mut buffer = MarkBuffer::allocate(&pool, 100).unwrap();
        let primes: Vec<usize> = Sweep::new(&pool, &mut buffer).map(|r| r.prime).collect();
        assert_eq!(primes, vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_limit_is_integer_sqrt() {
        let pool = pool();
        for (len, limit) in [(0, 0), (1, 1), (2, 1), (3, 1), (4, 2), (24, 4), (25, 5), (26, 5)] {
            let mut buffer = MarkBuffer::allocate(&pool, len).unwrap();
            assert_eq!(Sweep::new(&pool, &mut buffer).limit(), limit, "len = {}", len);
        }
    }

    #[test]
    fn test_skips_marked_candidates() {
        let pool = pool();
        let mut buffer = MarkBuffer::allocate(&pool, 100).unwrap();
        let mut sweep = Sweep::new(&pool, &mut buffer);

        assert_eq!(sweep.next().map(|r| r.prime), Some(2));
        assert_eq!(sweep.next().map(|r| r.prime), Some(3));
        assert_eq!(sweep.skipped(), 0);
        // 4 is skipped on the way to 5
        assert_eq!(sweep.next().map(|r| r.prime), Some(5));
        assert_eq!(sweep.skipped(), 1);
    }

    #[test]
    fn test_buffer_settled_between_rounds() {
        let pool = pool();
        let mut buffer = MarkBuffer::allocate(&pool, 50).unwrap();
        let mut sweep = Sweep::new(&pool, &mut buffer);

        sweep.next();
        assert!(sweep.buffer().is_marked(48));
        assert!(!sweep.buffer().is_marked(45));

        sweep.next();
        assert!(sweep.buffer().is_marked(45));
        assert!(!sweep.buffer().is_marked(49));
    }

    #[test]
    fn test_finish_records_stats() {
        let pool = pool();
        let mut buffer = MarkBuffer::allocate(&pool, 30).unwrap();
        let mut stats = SieveStats::new(30, pool.num_workers());

        let sweep = Sweep::new(&pool, &mut buffer);
        assert!(!sweep.is_done());
        sweep.finish(&mut stats);

        // candidates 2..=5: 2, 3, 5 dispatched, 4 skipped
        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.skipped, 1);
        // 30 - 2 cells minus 10 primes
        assert_eq!(stats.newly_marked, 18);
    }

    #[test]
    fn test_tiny_bounds_have_no_rounds() {
        let pool = pool();
        for len in 0..4 {
            let mut buffer = MarkBuffer::allocate(&pool, len).unwrap();
            let mut sweep = Sweep::new(&pool, &mut buffer);
            assert!(sweep.is_done());
            assert!(sweep.next().is_none());
        }
    }
}
