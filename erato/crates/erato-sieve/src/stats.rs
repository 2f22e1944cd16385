//! Sieve Statistics
//!
//! Counters and phase timings for one run.

use std::fmt;
use std::time::{Duration, Instant};

use crate::marker::MarkRound;

/// PhaseTimer - measures one phase of a run
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimer {
    start: Instant,
}

impl PhaseTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Statistics for one sieve run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SieveStats {
    /// Exclusive upper bound N
    pub bound: usize,
    /// Workers used for parallel regions
    pub workers: usize,
    /// Marking rounds dispatched (one per prime up to sqrt(N))
    pub rounds: usize,
    /// Candidates skipped because they were already marked
    pub skipped: usize,
    /// Cell writes over all rounds
    pub writes: usize,
    /// Cells that changed from unmarked to marked
    pub newly_marked: usize,
    /// Allocation and parallel initialization
    pub init_time: Duration,
    /// Sequential sweep including every marking round
    pub sweep_time: Duration,
    /// Result extraction
    pub extract_time: Duration,
}

impl SieveStats {
    /// Create empty statistics for a run
    pub fn new(bound: usize, workers: usize) -> Self {
        Self {
            bound,
            workers,
            ..Default::default()
        }
    }

    /// Fold one marking round into the totals
    pub fn record_round(&mut self, round: &MarkRound) {
        self.rounds += 1;
        self.writes += round.writes;
        self.newly_marked += round.newly_marked;
    }

    /// Total time over all phases
    pub fn total_time(&self) -> Duration {
        self.init_time + self.sweep_time + self.extract_time
    }

    /// Redundant writes as a fraction of all writes (0.0 - 1.0)
    pub fn redundancy(&self) -> f64 {
        if self.writes == 0 {
            return 0.0;
        }
        (self.writes - self.newly_marked) as f64 / self.writes as f64
    }
}

impl fmt::Display for SieveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bound={} workers={} rounds={} skipped={} writes={} newly_marked={} \
             init={:.3}ms sweep={:.3}ms extract={:.3}ms",
            self.bound,
            self.workers,
            self.rounds,
            self.skipped,
            self.writes,
            self.newly_marked,
            self.init_time.as_secs_f64() * 1000.0,
            self.sweep_time.as_secs_f64() * 1000.0,
            self.extract_time.as_secs_f64() * 1000.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round() {
        let mut stats = SieveStats::new(31, 2);
        stats.record_round(&MarkRound {
            prime: 2,
            writes: 14,
            newly_marked: 14,
        });
        stats.record_round(&MarkRound {
            prime: 3,
            writes: 9,
            newly_marked: 4,
        });

        assert_eq!(stats.rounds, 2);
        assert_eq!(stats.writes, 23);
        assert_eq!(stats.newly_marked, 18);
        assert!((stats.redundancy() - 5.0 / 23.0).abs() < 1e-12);
    }

    #[test]
    fn test_redundancy_without_writes() {
        assert_eq!(SieveStats::new(2, 1).redundancy(), 0.0);
    }

    #[test]
    fn test_total_time() {
        let stats = SieveStats {
            init_time: Duration::from_millis(1),
            sweep_time: Duration::from_millis(2),
            extract_time: Duration::from_millis(3),
            ..SieveStats::new(10, 1)
        };
        assert_eq!(stats.total_time(), Duration::from_millis(6));
    }

    #[test]
    fn test_display() {
        let text = SieveStats::new(16, 4).to_string();
        assert!(text.starts_with("bound=16 workers=4 rounds=0"));
    }
}
