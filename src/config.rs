//! Compile-time game settings.
//!
//! `build.rs` exports `REFLEX_PASSING_SCORE` and `REFLEX_MAX_CURRENT_MA`
//! (from the environment or a `.env` file, with defaults); everything else is fixed.

use embassy_time::Duration;

use crate::frame::max_brightness;
use crate::grid::LED_COUNT;

/// Settings for one training session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Score at or above which the result is "approved".
    pub passing_score: i32,
    /// Current budget for the LED panel, used to cap brightness.
    pub max_current_ma: u32,
    /// Spacing between game ticks.
    pub tick: Duration,
    /// Blank panel between the end of the round and the result.
    pub idle_after_round: Duration,
    /// How long the result stays up after its image.
    pub result_hold: Duration,
    /// How long each instruction screen stays up.
    pub screen_hold: Duration,
}

impl GameConfig {
    /// The build's settings.
    pub const DEFAULT: Self = Self {
        passing_score: match i32::from_str_radix(env!("REFLEX_PASSING_SCORE"), 10) {
            Ok(score) => score,
            Err(_) => panic!("REFLEX_PASSING_SCORE must be an integer"),
        },
        max_current_ma: match u32::from_str_radix(env!("REFLEX_MAX_CURRENT_MA"), 10) {
            Ok(milliamps) => milliamps,
            Err(_) => panic!("REFLEX_MAX_CURRENT_MA must be a whole number of milliamps"),
        },
        tick: Duration::from_millis(100),
        idle_after_round: Duration::from_millis(5000),
        result_hold: Duration::from_millis(5000),
        screen_hold: Duration::from_millis(3000),
    };

    /// Brightness cap (0-255) that keeps the full panel within `max_current_ma`.
    #[must_use]
    pub const fn max_brightness(&self) -> u8 {
        max_brightness(LED_COUNT, self.max_current_ma)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
