//! Full-panel 5×5 images: the miss cross, the approval ring and the countdown digits.

use crate::frame::{FrameBuffer, Rgb};
use crate::grid::{GRID_SIZE, GridPosition};

/// Red used by the cross and the countdown digits.
pub const ALERT_RED: Rgb = Rgb::new(242, 0, 0);
/// Green used by the approval ring.
pub const APPROVED_GREEN: Rgb = Rgb::new(24, 242, 0);

/// A one-color 5×5 image, declared row by row with `#` for lit cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    // Bit `col` of `rows[row]` is set when that cell is lit.
    rows: [u8; GRID_SIZE as usize],
    color: Rgb,
}

impl Pattern {
    /// Builds a pattern from five 5-character rows (`#` lit, anything else dark).
    ///
    /// Row 0 is the top of the panel; column 0 is the left.
    #[must_use]
    pub const fn from_rows(rows: [&str; GRID_SIZE as usize], color: Rgb) -> Self {
        let mut bits = [0u8; GRID_SIZE as usize];
        let mut row = 0;
        while row < GRID_SIZE as usize {
            let text = rows[row].as_bytes();
            assert!(text.len() == GRID_SIZE as usize, "each row needs 5 cells");
            let mut col = 0;
            while col < GRID_SIZE as usize {
                if text[col] == b'#' {
                    bits[row] |= 1 << col;
                }
                col += 1;
            }
            row += 1;
        }
        Self { rows: bits, color }
    }

    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    #[must_use]
    pub const fn is_lit(&self, position: GridPosition) -> bool {
        let row = self.rows[position.row() as usize];
        row & (1 << position.col()) != 0
    }

    /// Number of lit cells.
    #[must_use]
    pub const fn lit_count(&self) -> u32 {
        let mut count = 0;
        let mut row = 0;
        while row < GRID_SIZE as usize {
            count += self.rows[row].count_ones();
            row += 1;
        }
        count
    }

    /// Clears `frame` and plots every lit cell through the grid mapper.
    pub fn render(&self, frame: &mut FrameBuffer) {
        frame.clear();
        for position in GridPosition::all().filter(|position| self.is_lit(*position)) {
            frame.plot(position, self.color);
        }
    }
}

/// Wrong-button feedback and the failed-result image.
pub const CROSS: Pattern = Pattern::from_rows(
    [
        "#...#", //
        ".#.#.", //
        "..#..", //
        ".#.#.", //
        "#...#",
    ],
    ALERT_RED,
);

/// The approved-result image.
pub const RING: Pattern = Pattern::from_rows(
    [
        ".###.", //
        "#...#", //
        "#...#", //
        "#...#", //
        ".###.",
    ],
    APPROVED_GREEN,
);

pub const DIGIT_3: Pattern = Pattern::from_rows(
    [
        ".###.", //
        "...#.", //
        ".###.", //
        "...#.", //
        ".###.",
    ],
    ALERT_RED,
);

pub const DIGIT_2: Pattern = Pattern::from_rows(
    [
        ".###.", //
        ".#.#.", //
        "..#..", //
        ".#...", //
        ".###.",
    ],
    ALERT_RED,
);

pub const DIGIT_1: Pattern = Pattern::from_rows(
    [
        "..#..", //
        ".##..", //
        "..#..", //
        "..#..", //
        ".###.",
    ],
    ALERT_RED,
);
