//! Configuration structure and defaults for the progress bar.
//!
//! # Examples
//!
//! ```rust
//! use smooth_progress::ProgressBarConfig;
//!
//! let config = ProgressBarConfig {
//!     limit: 250,
//!     ..ProgressBarConfig::default()
//! };
//! assert!(config.show_percent);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{Error, Result};

/// Configuration structure for a [`ProgressBar`](crate::ProgressBar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBarConfig {
    /// Total units of work. Must be positive.
    pub limit: u64,
    /// Append a ` [p%]` suffix to every rendered line.
    pub show_percent: bool,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            show_percent: true,
        }
    }
}

impl ProgressBarConfig {
    /// Create a new [`ProgressBarConfig`].
    pub fn new(limit: u64, show_percent: bool) -> Self {
        Self {
            limit,
            show_percent,
        }
    }

    /// Check that the configuration can back a progress bar.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(Error::InvalidLimit(self.limit));
        }
        Ok(())
    }
}
