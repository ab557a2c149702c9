//! # Geometric Series
//!
//! A lazy producer of the infinite series 1, 1/2, 1/4, 1/8, ... and two
//! consumers that fold a finite prefix of it into a sum.
//!
//! ## Pieces
//!
//! 1. **Lazy cursor** - [`GeometricSeries`] is a plain [`Iterator`] that
//!    computes each term on demand by halving the previous one
//! 2. **Fixed-count sum** - [`prefix_sum`] adds exactly `num` terms
//! 3. **Threshold sum** - [`threshold_sum`] adds terms until one is at or
//!    below `epsilon`, including that last term
//!
//! ```
//! use geometric_series::{create_series, prefix_sum, threshold_sum};
//!
//! let first: Vec<f64> = create_series().take(4).collect();
//! assert_eq!(first, vec![1.0, 0.5, 0.25, 0.125]);
//!
//! assert_eq!(prefix_sum(4), 1.875);
//! assert_eq!(threshold_sum(0.125).unwrap(), 1.875);
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin series_demo -- --terms 6 --epsilon 0.01
//! cargo bench
//! ```

pub mod error;
pub mod series;
pub mod sums;

pub use error::{Result, SeriesError};
pub use series::{create_series, next_term, GeometricSeries};
pub use sums::{prefix_sum, threshold_sum, threshold_sum_counted, try_prefix_sum, ThresholdSum};
