//! Progress module containing the progress bar itself.
//!
//! # Overview
//!
//! The progress module is organized into four components:
//!
//! - `bar` - The [`ProgressBar`] state machine and its [`Status`]
//! - `style` - Glyphs, granularity and line rendering
//! - `config` - Configuration structure with sensible defaults
//! - `builder` - [`ProgressBarBuilder`] for fluent configuration
//!
//! # Examples
//!
//! ## Driving a Bar by Hand
//!
//! ```rust
//! use smooth_progress::progress::{ProgressBar, Status};
//!
//! # fn main() -> smooth_progress::Result<()> {
//! let mut bar = ProgressBar::with_target(100, true, Vec::new())?;
//! bar.open()?;
//! for _ in 0..50 {
//!     bar.increment()?;
//! }
//! assert_eq!(bar.status(), Status::Open);
//! assert!(bar.state().unwrap().ends_with("50/100 [50%]"));
//!
//! // Give up half way; progress is rewound.
//! bar.interrupt(false)?;
//! assert_eq!(bar.count(), Some(0));
//! # Ok(())
//! # }
//! ```

pub(crate) mod bar;
pub(crate) mod builder;
pub(crate) mod config;
pub(crate) mod style;

pub use bar::{ProgressBar, Status};
pub use builder::ProgressBarBuilder;
pub use config::ProgressBarConfig;
pub use style::{CHAR_COMPLETE, CHAR_REMAINING, GRANULARITY};
