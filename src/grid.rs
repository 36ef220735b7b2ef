//! Logical 5×5 play-field coordinates and the one place they meet physical LED indexes.
//!
//! Game code only ever handles [`GridPosition`]s. [`GridPosition::led_index`]
//! turns one into a strip index following the panel's serpentine wiring:
//! even rows run one way, odd rows the other, and the whole strip is numbered
//! from the far end.
//!
//! ```text
//!          col 0  1  2  3  4
//!   row 0:    24 23 22 21 20
//!   row 1:    15 16 17 18 19
//!   row 2:    14 13 12 11 10
//!   row 3:     5  6  7  8  9
//!   row 4:     4  3  2  1  0
//! ```

use crate::wiring::StripWiring;

/// Cells per side of the play-field.
pub const GRID_SIZE: u8 = 5;

/// Number of LEDs (and logical cells) on the panel.
pub const LED_COUNT: usize = GRID_SIZE as usize * GRID_SIZE as usize;

const LAST: u8 = GRID_SIZE - 1;
const LAST_LED: usize = LED_COUNT - 1;

/// The panel's wiring as a checked layout: LED index → (col,row).
pub const GRID_LAYOUT: StripWiring<LED_COUNT, 5, 5> =
    StripWiring::serpentine().from_far_end();

// The closed-form index below must agree with the layout for every cell.
const _: () = {
    let mut cell = 0;
    while cell < LED_COUNT {
        let position = GridPosition::from_cell(cell);
        match GRID_LAYOUT.led_for(position.col, position.row) {
            Some(led) => assert!(
                led == led_index(position.col, position.row),
                "led_index disagrees with GRID_LAYOUT"
            ),
            None => panic!("GRID_LAYOUT misses a cell"),
        }
        cell += 1;
    }
};

/// A cell on the logical play-field. Both coordinates are always in `0..=4`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPosition {
    col: u8,
    row: u8,
}

impl GridPosition {
    /// Where the player starts each session.
    pub const CENTER: Self = Self { col: 2, row: 2 };

    /// Creates a position, clamping each coordinate into the grid.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self {
            col: clamp_to_grid(col),
            row: clamp_to_grid(row),
        }
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Row-major cell number in `0..LED_COUNT` (`row * 5 + col`).
    ///
    /// This is a logical numbering, not a strip index.
    #[must_use]
    pub const fn cell(self) -> usize {
        self.row as usize * GRID_SIZE as usize + self.col as usize
    }

    /// Inverse of [`GridPosition::cell`]; out-of-range cells clamp to the last one.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "cell is clamped below LED_COUNT, so both parts fit in u8"
    )]
    pub const fn from_cell(cell: usize) -> Self {
        let cell = if cell < LED_COUNT { cell } else { LED_COUNT - 1 };
        Self {
            col: (cell % GRID_SIZE as usize) as u8,
            row: (cell / GRID_SIZE as usize) as u8,
        }
    }

    /// Physical strip index of this cell.
    #[must_use]
    pub const fn led_index(self) -> usize {
        led_index(self.col, self.row)
    }

    /// Every cell, in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..LED_COUNT).map(Self::from_cell)
    }
}

/// Physical strip index for `(col, row)`.
///
/// Even rows: `24 - (row*5 + col)`. Odd rows: `24 - (row*5 + (4 - col))`.
/// Coordinates past the grid edge clamp to it, so the result is always in `0..25`.
#[must_use]
pub const fn led_index(col: u8, row: u8) -> usize {
    let col = clamp_to_grid(col) as usize;
    let row = clamp_to_grid(row) as usize;
    let size = GRID_SIZE as usize;
    if row % 2 == 0 {
        LAST_LED - (row * size + col)
    } else {
        LAST_LED - (row * size + (LAST as usize - col))
    }
}

const fn clamp_to_grid(value: u8) -> u8 {
    if value > LAST { LAST } else { value }
}
