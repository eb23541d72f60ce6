//! The [`ProgressBar`] state machine.
//!
//! A bar is either [`Status::Open`], accepting increments, or
//! [`Status::Closed`]. Every transition redraws the bar on its output target.
//!
//! # Examples
//!
//! ```rust
//! use smooth_progress::ProgressBar;
//!
//! # fn main() -> smooth_progress::Result<()> {
//! let mut out = Vec::new();
//! let mut bar = ProgressBar::with_target(2, false, &mut out)?;
//!
//! assert!(bar.open()?);
//! bar.increment()?;
//! bar.increment()?; // reaching the limit closes the bar
//! assert!(!bar.is_open());
//! drop(bar);
//!
//! let printed = String::from_utf8(out).unwrap();
//! assert!(printed.ends_with("]  2/2\n"));
//! # Ok(())
//! # }
//! ```

use super::config::ProgressBarConfig;
use super::style::{render, GRANULARITY};
use crate::error::{ClosedBarError, Result};

use std::io::{self, Stdout, Write};
use tracing::{debug, trace, warn};

/// Mutability state of a [`ProgressBar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The bar accepts increments.
    Open,
    /// The bar rejects increments.
    #[default]
    Closed,
}

/// A single console progress bar over a bounded counter.
///
/// The bar is not thread-safe: keep it with one owner and drive it from one
/// place. Dropping a bar which is still open closes it, committing its final
/// line to the target.
pub struct ProgressBar<W: Write = Stdout> {
    /// Total units of work.
    limit: u64,
    /// Current progress, `None` until the bar is first opened or reset.
    count: Option<u64>,
    status: Status,
    show_percent: bool,
    /// The last rendered line, redisplayed verbatim on close.
    state: Option<String>,
    /// Where the bar is drawn.
    target: W,
}

impl ProgressBar<Stdout> {
    /// Create a closed bar drawing to stdout.
    ///
    /// Fails with [`Error::InvalidLimit`](crate::Error::InvalidLimit) if `limit` is zero.
    pub fn new(limit: u64, show_percent: bool) -> Result<Self> {
        Self::with_target(limit, show_percent, io::stdout())
    }
}

impl Default for ProgressBar<Stdout> {
    /// A bar of 100 units, showing percentages, drawing to stdout.
    fn default() -> Self {
        Self::from_parts(ProgressBarConfig::default(), io::stdout())
    }
}

impl<W: Write> ProgressBar<W> {
    /// Create a closed bar drawing to `target`.
    pub fn with_target(limit: u64, show_percent: bool, target: W) -> Result<Self> {
        Self::from_config(ProgressBarConfig::new(limit, show_percent), target)
    }

    /// Create a closed bar from a [`ProgressBarConfig`].
    pub fn from_config(config: ProgressBarConfig, target: W) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, target))
    }

    fn from_parts(config: ProgressBarConfig, target: W) -> Self {
        Self {
            limit: config.limit,
            count: None,
            status: Status::Closed,
            show_percent: config.show_percent,
            state: None,
            target,
        }
    }

    /// Open the bar for mutation, resetting its progress and drawing the
    /// empty bar.
    ///
    /// Returns `false` without touching the progress if the bar was already open.
    pub fn open(&mut self) -> Result<bool> {
        if self.is_open() {
            return Ok(false);
        }

        debug!("Opening progress bar with limit {}", self.limit);
        let line = render(0, self.limit, GRANULARITY, self.show_percent);
        self.show(Some(&line), "\r", true)?;
        self.count = Some(0);
        self.state = Some(line);
        self.status = Status::Open;
        Ok(true)
    }

    /// Advance the progress by one and redraw the bar.
    ///
    /// Reaching the limit closes the bar, even if drawing the last line fails.
    pub fn increment(&mut self) -> Result<()> {
        let count = match (self.status, self.count) {
            (Status::Open, Some(count)) => count + 1,
            _ => return Err(ClosedBarError::new(".increment()").into()),
        };

        self.set_count(count);
        trace!("Progress {}/{}", count, self.limit);
        if count < self.limit {
            return self.show(None, "\r", true);
        }

        debug!("Progress bar reached its limit");
        self.status = Status::Closed;
        self.show(None, "\r", true)?;
        self.show_final()
    }

    /// Close the bar, committing its final state on a fresh line.
    ///
    /// The line starts with a carriage return so that anything echoed by the
    /// terminal in the meantime (such as `^C`) is overwritten. Returns `false`
    /// if the bar was already closed.
    pub fn close(&mut self) -> Result<bool> {
        if !self.is_open() {
            return Ok(false);
        }

        debug!("Closing progress bar at {:?}/{}", self.count, self.limit);
        self.show_final()?;
        self.status = Status::Closed;
        Ok(true)
    }

    /// Abort the bar: close it and rewind its progress to zero.
    ///
    /// With `show_final` the last state is committed as in [`close`], otherwise
    /// the line is left to be overwritten. The progress is rewound even when
    /// the draw fails. Returns `false` if the bar was already closed.
    ///
    /// [`close`]: ProgressBar::close
    pub fn interrupt(&mut self, show_final: bool) -> Result<bool> {
        if !self.is_open() {
            return Ok(false);
        }

        debug!("Interrupting progress bar at {:?}/{}", self.count, self.limit);
        self.status = Status::Closed;
        let drawn = if show_final {
            self.show_final()
        } else {
            self.show(Some(""), "\r", true)
        };
        self.set_count(0);
        drawn.map(|_| true)
    }

    /// Rewind the progress to zero without changing the open/closed status.
    ///
    /// The empty bar is only drawn when `show` is set.
    pub fn reset(&mut self, show: bool) -> Result<()> {
        debug!("Resetting progress bar ({:?})", self.status);
        self.set_count(0);
        if show {
            self.show(None, "\r", true)?;
        }
        Ok(())
    }

    /// Write `display`, or the current state when `None`, followed by `end`.
    ///
    /// `end` is usually `"\r"` so the next draw overwrites the line, or `"\n"`
    /// to commit it.
    pub fn show(&mut self, display: Option<&str>, end: &str, flush: bool) -> Result<()> {
        let display = display.or(self.state.as_deref()).unwrap_or_default();
        write!(self.target, "{}{}", display, end)?;
        if flush {
            self.target.flush()?;
        }
        Ok(())
    }

    /// Total units of work.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of glyph slots in the bar.
    pub fn granularity(&self) -> usize {
        GRANULARITY
    }

    /// Current progress, `None` if the bar was never opened or reset.
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    pub fn show_percent(&self) -> bool {
        self.show_percent
    }

    /// The last rendered line, without control characters.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Get a reference to the output target.
    pub fn target(&self) -> &W {
        &self.target
    }

    /// Get a mutable reference to the output target.
    pub fn target_mut(&mut self) -> &mut W {
        &mut self.target
    }

    fn set_count(&mut self, count: u64) {
        self.count = Some(count);
        self.state = Some(render(count, self.limit, GRANULARITY, self.show_percent));
    }

    fn show_final(&mut self) -> Result<()> {
        let line = format!("\r{}", self.state.as_deref().unwrap_or_default());
        self.show(Some(&line), "\n", false)
    }
}

impl<W: Write> Drop for ProgressBar<W> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close progress bar on drop: {}", e);
        }
    }
}

impl<W: Write> std::fmt::Debug for ProgressBar<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBar")
            .field("limit", &self.limit)
            .field("count", &self.count)
            .field("status", &self.status)
            .field("show_percent", &self.show_percent)
            .field("state", &self.state)
            .finish()
    }
}
