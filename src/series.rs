//! The lazy cursor over 1, 1/2, 1/4, 1/8, ...

use std::iter::FusedIterator;

use tracing::trace;

/// Cursor over the geometric series with first term 1.0 and ratio 1/2.
///
/// Each cursor owns its position and remembers only the last term it
/// emitted. The next term is halved from it when requested, and a fresh
/// cursor always starts over at 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricSeries {
    exponent: u64,
    last: f64,
}

impl GeometricSeries {
    pub fn new() -> Self {
        GeometricSeries {
            exponent: 0,
            last: 1.0,
        }
    }

    /// Returns the next term and moves the cursor one step.
    ///
    /// Terms are exact powers of two down to 2^-1074; after that they
    /// underflow to 0.0.
    pub fn next_term(&mut self) -> f64 {
        let result = self.peek();
        trace!(exponent = self.exponent, term = result, "series term");
        self.last = result;
        self.exponent = self.exponent.saturating_add(1);
        result
    }

    /// Number of terms produced so far.
    pub fn terms_drawn(&self) -> u64 {
        self.exponent
    }

    /// The value the next call to [`next_term`](Self::next_term) will
    /// return. Computed on each call; the cursor does not move.
    pub fn peek(&self) -> f64 {
        if self.exponent == 0 {
            1.0
        } else {
            self.last * 0.5
        }
    }
}

impl Default for GeometricSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for GeometricSeries {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_term())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// Never returns None, so fusing is free.
impl FusedIterator for GeometricSeries {}

/// Creates a fresh cursor positioned before the first term.
pub fn create_series() -> GeometricSeries {
    GeometricSeries::new()
}

/// Advances `cursor` and returns the term it was positioned on.
pub fn next_term(cursor: &mut GeometricSeries) -> f64 {
    cursor.next_term()
}
