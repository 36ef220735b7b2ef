//! Joystick sample normalization.
//!
//! The ADC gives 12-bit readings. Each axis is split into five equal bands;
//! X grows to the right and Y grows upward, so the row is flipped to keep
//! row 0 at the top of the panel.

use crate::grid::{GRID_SIZE, GridPosition};

/// Exclusive upper bound of a raw ADC reading.
pub const ADC_RANGE: u16 = 4096;

/// Reading reported by a stick at rest (and substituted for a failed conversion).
pub const ADC_CENTER: u16 = ADC_RANGE / 2;

/// Maps a raw `(x, y)` joystick sample to a grid cell.
///
/// `col = x * 5 / 4096` and `row = 4 - y * 5 / 4096`, each clamped into `0..=4`.
/// Readings at or above the range clamp to the edge.
#[must_use]
pub const fn normalize(raw_x: u16, raw_y: u16) -> GridPosition {
    let col = band(raw_x);
    let row = (GRID_SIZE - 1).saturating_sub(band(raw_y));
    GridPosition::new(col, row)
}

#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    clippy::cast_possible_truncation,
    reason = "u16 times 5 fits in u32 and the quotient is clamped below 5"
)]
const fn band(raw: u16) -> u8 {
    let band = raw as u32 * GRID_SIZE as u32 / ADC_RANGE as u32;
    if band >= GRID_SIZE as u32 {
        GRID_SIZE - 1
    } else {
        band as u8
    }
}
