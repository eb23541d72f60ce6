//! Progress bar glyphs and line rendering.
//!
//! Every line the bar prints is produced by [`render`], a pure function of the
//! progress values, so the cached state can always be recomputed and compared.
//!
//! ```text
//! [#########################-------------------------]  50/100 [50%]
//! ```

use std::fmt::Write;

/// Number of glyph slots composing the rendered bar.
pub const GRANULARITY: usize = 50;
/// Glyph used for completed slots.
pub const CHAR_COMPLETE: char = '#';
/// Glyph used for remaining slots.
pub const CHAR_REMAINING: char = '-';

/// Build the display line for `count` out of `limit`.
///
/// The number of completed slots and the percentage are the floors of the
/// exact fractions `count / limit * granularity` and `count / limit * 100`.
pub(crate) fn render(count: u64, limit: u64, granularity: usize, show_percent: bool) -> String {
    let completed = floor_fraction(count, limit, granularity as u64) as usize;
    let completed = completed.min(granularity);

    let mut line = String::with_capacity(granularity + 32);
    line.push('[');
    line.extend(std::iter::repeat(CHAR_COMPLETE).take(completed));
    line.extend(std::iter::repeat(CHAR_REMAINING).take(granularity - completed));
    // Writing into a `String` cannot fail.
    let _ = write!(line, "]  {}/{}", count, limit);
    if show_percent {
        let _ = write!(line, " [{}%]", floor_fraction(count, limit, 100));
    }
    line
}

// `limit` is validated as non-zero at construction.
fn floor_fraction(count: u64, limit: u64, scale: u64) -> u64 {
    (u128::from(count) * u128::from(scale) / u128::from(limit)) as u64
}
