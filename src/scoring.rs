//! Hit/miss evaluation for one tick of play.

use embassy_time::Duration;
use rand::Rng;

use crate::grid::GridPosition;
use crate::round::penalty_for;
use crate::spawner::{ColorCode, Target, spawn};

/// Button state sampled once per tick. `true` means pressed.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    /// The red button.
    pub a: bool,
    /// The green button.
    pub b: bool,
}

impl Buttons {
    pub const NONE: Self = Self { a: false, b: false };
    pub const A: Self = Self { a: true, b: false };
    pub const B: Self = Self { a: false, b: true };
    pub const BOTH: Self = Self { a: true, b: true };

    /// The color these buttons answer, if exactly one is held.
    ///
    /// Neither or both held is no answer at all.
    #[must_use]
    pub const fn selected_color(self) -> Option<ColorCode> {
        match (self.a, self.b) {
            (true, false) => Some(ColorCode::Red),
            (false, true) => Some(ColorCode::Green),
            _ => None,
        }
    }
}

/// What the player should see after an evaluation.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing happened this tick.
    None,
    /// Right color on the target; a new target has been spawned.
    Hit,
    /// Wrong color on the target; the target stays put.
    Miss { penalty: i32 },
}

/// Result of [`evaluate`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub score: i32,
    /// Replacement target after a hit.
    pub new_target: Option<Target>,
    pub feedback: Feedback,
}

/// Scores one tick.
///
/// Nothing happens unless the player stands on the target and exactly one
/// button is held. The matching button scores a point and spawns a new target
/// away from the player; the other button costs the penalty of the running
/// phase (see [`penalty_for`]) and leaves the target where it is. The score may
/// go negative; it only stops at the `i32` limits.
pub fn evaluate<R: Rng + ?Sized>(
    score: i32,
    player: GridPosition,
    target: &Target,
    buttons: Buttons,
    phase_duration: Duration,
    rng: &mut R,
) -> Evaluation {
    let unchanged = Evaluation {
        score,
        new_target: None,
        feedback: Feedback::None,
    };
    if player != target.position {
        return unchanged;
    }
    match buttons.selected_color() {
        None => unchanged,
        Some(color) if color == target.color => Evaluation {
            score: score.saturating_add(1),
            new_target: Some(spawn(rng, player)),
            feedback: Feedback::Hit,
        },
        Some(_) => {
            let penalty = penalty_for(phase_duration);
            Evaluation {
                score: score.saturating_sub(penalty),
                new_target: None,
                feedback: Feedback::Miss { penalty },
            }
        }
    }
}
