//! Parallel Marker
//!
//! Marks every multiple of a prime `c` in the open range `(c, len)`.
//!
//! ## Partitioning
//!
//! The region `cells[c+1..len]` is split by the worker pool into contiguous
//! chunks. A chunk starting at absolute index `start` contains the
//! multiples `first, first + c, first + 2c, ...` where `first` is the
//! smallest multiple of `c` that is `>= start`. Only those cells are
//! written, so the set of written indices is exactly
//! `{ m : c < m < len, m % c == 0 }` no matter how the region is split.
//!
//! Only one marking round may run at a time. The driver enforces this by
//! holding `&mut MarkBuffer` across the call.

use crate::buffer::{Mark, MarkBuffer};
use crate::pool::WorkerPool;

/// Bookkeeping for one marking round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkRound {
    /// Prime whose multiples were marked
    pub prime: usize,
    /// Cells written (every multiple in range, marked or not)
    pub writes: usize,
    /// Cells that changed from unmarked to marked
    pub newly_marked: usize,
}

/// Mark every strict multiple of `prime` below `buffer.len()`
///
/// Blocks until all workers have finished.
///
/// # Panics
/// If `prime < 2`.
pub fn mark_multiples(pool: &WorkerPool, buffer: &mut MarkBuffer, prime: usize) -> MarkRound {
    assert!(prime >= 2, "cannot sieve with {}", prime);

    let len = buffer.len();
    if prime + 1 >= len {
        return MarkRound {
            prime,
            writes: 0,
            newly_marked: 0,
        };
    }

    let base = prime + 1;
    let region = &mut buffer.cells_mut()[base..];

    // Chunks report transitions; total writes follow from the bound.
    let newly_marked = pool.map_chunks(region, base, |start, chunk| {
        let first = start.div_ceil(prime) * prime;
        let mut changed = 0;
        for index in (first..start + chunk.len()).step_by(prime) {
            let cell = &mut chunk[index - start];
            if *cell == Mark::Unmarked {
                changed += 1;
            }
            *cell = Mark::Marked;
        }
        changed
    });

    MarkRound {
        prime,
        writes: (len - 1) / prime - 1,
        newly_marked,
    }
}
