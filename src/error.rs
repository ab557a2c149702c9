//! Errors raised by the summing functions.

use thiserror::Error;

/// Failure modes for the series consumers.
///
/// The generator itself cannot fail; only caller-supplied arguments can be
/// out of range. New variants may be added, so match with a wildcard arm.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl SeriesError {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        SeriesError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeriesError>;
