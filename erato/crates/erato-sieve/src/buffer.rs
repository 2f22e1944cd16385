//! Mark Buffer - One Cell per Candidate
//!
//! Cell `i` records whether `i` is known to be composite. Cells start
//! `Unmarked` and can only move to `Marked`; nothing in the public API
//! resets a cell.
//!
//! ```text
//! index:  0  1  2  3  4  5  6  7  8  9
//! state:  .  .  .  .  X  .  X  .  X  X     (after sieving below 10)
//! ```
//!
//! Cells 0 and 1 exist so that indices line up with values; they are never
//! interpreted.

use std::mem::MaybeUninit;

use crate::error::{Result, SieveError};
use crate::extract::Primes;
use crate::pool::WorkerPool;

/// State of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    /// Candidate prime (initial state)
    Unmarked = 0,
    /// Known composite (terminal state)
    Marked = 1,
}

/// MarkBuffer - sieve state for every index below the bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkBuffer {
    cells: Vec<Mark>,
}

impl MarkBuffer {
    /// Allocate a buffer of `len` cells and initialize it in parallel
    ///
    /// The allocation is requested fallibly. Every cell is then written with
    /// `Mark::Unmarked` by the pool's workers, each worker owning a
    /// contiguous range of the uninitialized capacity.
    ///
    /// # Errors
    /// `SieveError::ResourceExhausted` if `len` cells cannot be allocated.
    pub fn allocate(pool: &WorkerPool, len: usize) -> Result<Self> {
        let mut cells: Vec<Mark> = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|e| SieveError::ResourceExhausted {
                requested: len,
                reason: e.to_string(),
            })?;

        let spare: &mut [MaybeUninit<Mark>] = &mut cells.spare_capacity_mut()[..len];
        let initialized = pool.map_chunks(spare, 0, |_, chunk| {
            for cell in chunk.iter_mut() {
                cell.write(Mark::Unmarked);
            }
            chunk.len()
        });
        debug_assert_eq!(initialized, len);

        // SAFETY: capacity >= len and map_chunks has joined after writing
        // every slot in `spare[..len]`.
        unsafe { cells.set_len(len) };

        tracing::debug!(len, "mark buffer initialized");
        Ok(Self { cells })
    }

    /// Number of cells (the sieve bound)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// State of cell `index`, if it exists
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Check if cell `index` is marked
    ///
    /// # Panics
    /// If `index >= len()`.
    pub fn is_marked(&self, index: usize) -> bool {
        self.cells[index] == Mark::Marked
    }

    /// Mark cell `index` as composite
    ///
    /// Marking an already marked cell is a no-op. Returns true if the cell
    /// changed state.
    ///
    /// # Panics
    /// If `index >= len()`.
    pub fn mark(&mut self, index: usize) -> bool {
        let cell = &mut self.cells[index];
        let changed = *cell == Mark::Unmarked;
        *cell = Mark::Marked;
        changed
    }

    /// Read-only view of every cell
    pub fn as_slice(&self) -> &[Mark] {
        &self.cells
    }

    /// Count unmarked cells with index >= 2
    pub fn count_unmarked(&self) -> usize {
        self.cells
            .iter()
            .skip(2)
            .filter(|&&cell| cell == Mark::Unmarked)
            .count()
    }

    /// Iterate over unmarked indices >= 2 in increasing order
    pub fn primes(&self) -> Primes<'_> {
        Primes::new(&self.cells)
    }

    /// Mutable access for the marker's parallel regions
    pub(crate) fn cells_mut(&mut self) -> &mut [Mark] {
        &mut self.cells
    }
}
