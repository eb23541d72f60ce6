//! Builder pattern implementation for creating ProgressBar instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use smooth_progress::ProgressBarBuilder;
//!
//! # fn main() -> smooth_progress::Result<()> {
//! let mut bar = ProgressBarBuilder::new()
//!     .limit(10)
//!     .show_percent(false)
//!     .build()?;
//! bar.open()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use smooth_progress::ProgressBarBuilder;
//!
//! # fn main() -> smooth_progress::Result<()> {
//! // Tracks progress without printing anything.
//! let mut bar = ProgressBarBuilder::new().limit(3).build_hidden()?;
//! bar.open()?;
//! bar.increment()?;
//! assert_eq!(bar.count(), Some(1));
//! # Ok(())
//! # }
//! ```

use super::{bar::ProgressBar, config::ProgressBarConfig};
use crate::error::Result;

use std::io::{self, Sink, Stdout, Write};

/// A builder used to create a [`ProgressBar`].
#[derive(Debug, Default, Clone)]
pub struct ProgressBarBuilder {
    config: ProgressBarConfig,
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressBarBuilder::default()
    }

    /// Set the total units of work.
    pub fn limit(mut self, limit: u64) -> Self {
        self.config.limit = limit;
        self
    }

    /// Set whether to append the percentage to each line.
    pub fn show_percent(mut self, show_percent: bool) -> Self {
        self.config.show_percent = show_percent;
        self
    }

    /// Get a reference to the configuration being built.
    pub fn config(&self) -> &ProgressBarConfig {
        &self.config
    }

    /// Create a [`ProgressBar`] drawing to stdout.
    pub fn build(self) -> Result<ProgressBar<Stdout>> {
        self.build_with_target(io::stdout())
    }

    /// Create a [`ProgressBar`] which discards everything it draws.
    pub fn build_hidden(self) -> Result<ProgressBar<Sink>> {
        self.build_with_target(io::sink())
    }

    /// Create a [`ProgressBar`] drawing to the given target.
    pub fn build_with_target<W: Write>(self, target: W) -> Result<ProgressBar<W>> {
        ProgressBar::from_config(self.config, target)
    }
}
