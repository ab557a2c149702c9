//! Folding finite prefixes of the series into a single sum.
//!
//! Every function here builds its own [`GeometricSeries`], so calls never
//! share state and can run on any thread without locking.

use tracing::{debug, warn};

use crate::error::{Result, SeriesError};
use crate::series::{create_series, GeometricSeries};

/// Sums exactly the first `num` terms: `2 - 2^(1 - num)`, or 0.0 for `num = 0`.
///
/// Performs exactly `num` additions even after the sum has stopped changing.
pub fn prefix_sum(num: usize) -> f64 {
    let sum = create_series()
        .take(num)
        .fold(0.0, |acc, term| acc + term);
    debug!(num, sum, "prefix sum");
    sum
}

/// Signed variant of [`prefix_sum`]. A negative count is rejected rather
/// than treated as zero.
pub fn try_prefix_sum(num: i64) -> Result<f64> {
    let count = usize::try_from(num).map_err(|_| {
        warn!(num, "rejected negative term count");
        SeriesError::invalid("num", format!("must not be negative, got {}", num))
    })?;
    Ok(prefix_sum(count))
}

/// Outcome of a threshold walk: the sum plus how it got there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSum {
    pub sum: f64,
    /// Terms drawn, including the one that stopped the walk.
    pub terms: u64,
    /// The terminating term, always `<= epsilon`.
    pub last_term: f64,
}

/// Sums terms until one is no longer strictly greater than `epsilon`.
///
/// The terminating term is included, so `threshold_sum(0.5)` is `1.5`.
/// `epsilon` must be positive; zero, negatives and NaN fail with
/// [`SeriesError::InvalidArgument`] since the walk would never stop.
pub fn threshold_sum(epsilon: f64) -> Result<f64> {
    threshold_sum_counted(epsilon).map(|outcome| outcome.sum)
}

/// Like [`threshold_sum`], also reporting the number of terms drawn.
pub fn threshold_sum_counted(epsilon: f64) -> Result<ThresholdSum> {
    // Written as a negation so NaN is rejected too.
    if !(epsilon > 0.0) {
        warn!(epsilon, "rejected non-positive threshold");
        return Err(SeriesError::invalid(
            "epsilon",
            format!("must be greater than zero, got {}", epsilon),
        ));
    }

    let mut series = create_series();
    let outcome = walk_until_small(&mut series, epsilon);
    debug!(
        epsilon,
        sum = outcome.sum,
        terms = outcome.terms,
        "threshold sum"
    );
    Ok(outcome)
}

// Terminates for any positive epsilon: terms reach 2^-1074 and then 0.0.
fn walk_until_small(series: &mut GeometricSeries, epsilon: f64) -> ThresholdSum {
    let mut sum = 0.0;
    loop {
        let current = series.next_term();
        sum += current;
        if !(current > epsilon) {
            return ThresholdSum {
                sum,
                terms: series.terms_drawn(),
                last_term: current,
            };
        }
    }
}
