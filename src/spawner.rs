//! Target placement: a random cell other than the player's, with a random color code.

use rand::Rng;

use crate::frame::Rgb;
use crate::grid::{GridPosition, LED_COUNT};

/// Which button a target asks for. Button A answers red, button B answers green.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorCode {
    Red,
    Green,
}

impl ColorCode {
    /// Panel color used to draw a target with this code.
    #[must_use]
    pub const fn led_color(self) -> Rgb {
        match self {
            Self::Red => Rgb::new(255, 0, 0),
            Self::Green => Rgb::new(0, 255, 0),
        }
    }
}

/// The cell and color the player must match.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub position: GridPosition,
    pub color: ColorCode,
}

/// Draws a new target that does not sit on `player`.
///
/// The cell is uniform over the 24 cells other than the player's and the color
/// is an independent fair coin. A single draw picks among the remaining cells
/// directly, so a degenerate random source still returns promptly.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "draw is below LED_COUNT - 1, so draw + 1 stays in range"
)]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, player: GridPosition) -> Target {
    let excluded = player.cell();
    // Drawing from the 24 other cells and stepping over the player's gives the
    // same distribution as redrawing until the cell differs, in one draw.
    let draw = rng.random_range(0..LED_COUNT - 1);
    let cell = if draw >= excluded { draw + 1 } else { draw };
    let color = if rng.random::<bool>() {
        ColorCode::Green
    } else {
        ColorCode::Red
    };
    Target {
        position: GridPosition::from_cell(cell),
        color,
    }
}
