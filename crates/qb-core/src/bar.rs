//! Four-channel Braille progress bar renderer.
//!
//! Each of the 10 bar columns is one Braille cell covering a 10-point slice
//! of the [0, 100] range. Channels 1–3 own the dot pairs {1,4}, {2,5}, {3,6};
//! channel 4 owns {7,8}. Within a column the left dot of a pair lights when
//! the channel has entered the slice, the right dot when it has filled it.

use crate::braille::braille_char;
use crate::percent::{clamp_percent, round_to_step};

/// Width of the bar, in Braille cells.
pub const COLUMNS: i32 = 10;

/// Number of independent percentage channels.
pub const CHANNELS: usize = 4;

/// Left-column dot bit per channel (dots 1, 2, 3, 7).
const LEFT_DOT: [u8; CHANNELS] = [0b0000_0001, 0b0000_0010, 0b0000_0100, 0b0100_0000];

/// Right-column dot bit per channel (dots 4, 5, 6, 8).
const RIGHT_DOT: [u8; CHANNELS] = [0b0000_1000, 0b0001_0000, 0b0010_0000, 0b1000_0000];

/// Compute the dot mask of one column for four rounded percentages.
///
/// Column `col` spans `[col*10, (col+1)*10]`. A channel landing exactly on
/// the right boundary fills both of its dots, so the column reads as fully
/// covered instead of half-lit.
#[must_use]
fn column_mask(prog: &[i32; CHANNELS], col: i32) -> u8 {
    let left = col * 10;
    let right = (col + 1) * 10;

    let mut dots = 0u8;
    for (i, &p) in prog.iter().enumerate() {
        if p > left {
            dots |= LEFT_DOT[i];
        }
        if p >= right {
            dots |= RIGHT_DOT[i];
        }
        // Exact-boundary fill: both dots of the pair, unioned with the above.
        if p == right {
            dots |= LEFT_DOT[i] | RIGHT_DOT[i];
        }
    }
    dots
}

/// Render four percentages as a 10-character Braille progress bar.
///
/// Inputs are clamped to [0, 100] (silent clamping, never an error) and then
/// rounded to the nearest multiple of 5, ties up. The result is always
/// exactly 10 characters from the Braille Pattern block, column 0 first,
/// with no separators or padding. Pure and deterministic: identical inputs
/// yield byte-identical output.
///
/// # Example
/// ```
/// use qb_core::bar::render_progress_bar;
/// assert_eq!(render_progress_bar(75, 50, 25, 100), "⣿⣿⣟⣛⣛⣉⣉⣁⣀⣀");
/// assert_eq!(render_progress_bar(0, 0, 0, 0), "⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀");
/// ```
#[must_use]
pub fn render_progress_bar(p1: i64, p2: i64, p3: i64, p4: i64) -> String {
    let prog = [p1, p2, p3, p4].map(|p| round_to_step(clamp_percent(p)));
    (0..COLUMNS)
        .map(|col| braille_char(column_mask(&prog, col)))
        .collect()
}
