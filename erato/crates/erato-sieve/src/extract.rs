//! Result Extractor
//!
//! Reads a settled buffer and yields the unmarked indices >= 2. Runs
//! sequentially on the calling thread.

use std::iter::{Enumerate, Skip};
use std::slice::Iter;

use crate::buffer::{Mark, MarkBuffer};

/// Iterator over the primes recorded in a buffer, in increasing order
#[derive(Debug, Clone)]
pub struct Primes<'a> {
    cells: Skip<Enumerate<Iter<'a, Mark>>>,
}

impl<'a> Primes<'a> {
    pub(crate) fn new(cells: &'a [Mark]) -> Self {
        Self {
            cells: cells.iter().enumerate().skip(2),
        }
    }
}

impl Iterator for Primes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.cells
            .by_ref()
            .find(|&(_, &cell)| cell == Mark::Unmarked)
            .map(|(index, _)| index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cells.size_hint().1)
    }
}

/// Collect every unmarked index in `[2, len)` of a settled buffer
pub fn extract_primes(buffer: &MarkBuffer) -> Vec<usize> {
    let primes: Vec<usize> = buffer.primes().collect();
    tracing::debug!(bound = buffer.len(), count = primes.len(), "primes extracted");
    primes
}
