//! smooth-progress is a small crate providing a predictable console progress
//! bar over a bounded counter.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use smooth_progress::{ProgressBar, Result};
//!
//! # fn main() -> Result<()> {
//! let mut bar = ProgressBar::new(4, true)?;
//! bar.open()?;
//! for _ in 0..4 {
//!     // ... Your logic ...
//!     bar.increment()?;
//! }
//! // The bar closed itself when it reached its limit.
//! assert!(!bar.is_open());
//! # Ok(())
//! # }
//! ```
//!
//! Which prints, redrawing the same line in place:
//!
//! ```text
//! [##################################################]  4/4 [100%]
//! ```
//!
//! # Module Organization
//!
//! - [`progress`] - The `ProgressBar`, its configuration, builder and rendering
//! - [`error`] - Centralized error handling with the `Error` enum
//!
//! # Logging
//!
//! Lifecycle transitions are reported through [`tracing`] at `debug` level and
//! every redraw at `trace` level. No subscriber is installed by the library.

pub mod error;
pub mod progress;

pub use error::{ClosedBarError, Error, Result};
pub use progress::{ProgressBar, ProgressBarBuilder, ProgressBarConfig, Status, GRANULARITY};
