//! Error handling for the smooth-progress library.
//!
//! This module provides the single [`Error`] enum returned by every fallible
//! operation on a [`ProgressBar`](crate::ProgressBar). Lifecycle calls that are
//! merely redundant (opening an open bar, closing a closed one) are not errors:
//! they report what happened through their `bool` return value instead.

use std::io;
use thiserror::Error;

/// A call which requires an open [`ProgressBar`](crate::ProgressBar) was made
/// while the bar was closed.
///
/// Two errors are equal when they name the same call.
///
/// ```rust
/// use smooth_progress::ClosedBarError;
///
/// let err = ClosedBarError::new(".increment()");
/// assert_eq!(
///     err.to_string(),
///     ".increment() was called, but ProgressBar is closed."
/// );
/// assert_eq!(err, ClosedBarError::new(".increment()"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{call} was called, but ProgressBar is closed.")]
pub struct ClosedBarError {
    call: &'static str,
}

impl ClosedBarError {
    /// Create a new [`ClosedBarError`] for the given call site.
    pub fn new(call: &'static str) -> Self {
        Self { call }
    }

    /// Name of the offending call, e.g. `".increment()"`.
    pub fn call(&self) -> &'static str {
        self.call
    }
}

/// Errors that can happen when using smooth-progress.
#[derive(Error, Debug)]
pub enum Error {
    /// A mutating call was made on a closed bar.
    #[error(transparent)]
    Closed(#[from] ClosedBarError),

    /// The bar was configured with a limit that is not positive.
    #[error("Invalid limit: {0}, must be positive")]
    InvalidLimit(u64),

    /// I/O Error.
    ///
    /// This variant wraps failures to write to or flush the output target.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a smooth-progress error.
pub type Result<T> = std::result::Result<T, Error>;
