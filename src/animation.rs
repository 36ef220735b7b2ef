//! Timed full-panel sequences, expressed as data.
//!
//! An [`Animation`] is a list of [`Step`]s. The LED driver plays one by
//! showing each step's image and then waiting out its hold, one wait per step.

use embassy_time::Duration;

use crate::frame::FrameBuffer;
use crate::pattern::{CROSS, DIGIT_1, DIGIT_2, DIGIT_3, Pattern, RING};

/// One image held for a fixed time. `None` blanks the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub image: Option<Pattern>,
    pub hold: Duration,
}

impl Step {
    #[must_use]
    pub const fn show(pattern: Pattern, hold_ms: u64) -> Self {
        Self {
            image: Some(pattern),
            hold: Duration::from_millis(hold_ms),
        }
    }

    #[must_use]
    pub const fn blank(hold_ms: u64) -> Self {
        Self {
            image: None,
            hold: Duration::from_millis(hold_ms),
        }
    }

    /// Writes this step's image into `frame`, replacing its contents.
    pub fn render(&self, frame: &mut FrameBuffer) {
        match &self.image {
            Some(pattern) => pattern.render(frame),
            None => frame.clear(),
        }
    }
}

/// A named, fixed sequence of steps.
#[derive(Clone, Copy, Debug)]
pub struct Animation {
    name: &'static str,
    steps: &'static [Step],
}

impl Animation {
    #[must_use]
    pub const fn new(name: &'static str, steps: &'static [Step]) -> Self {
        Self { name, steps }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Sum of every step's hold.
    #[must_use]
    #[expect(clippy::arithmetic_side_effects, reason = "a handful of short holds")]
    pub fn total(&self) -> Duration {
        self.steps
            .iter()
            .fold(Duration::from_ticks(0), |total, step| total + step.hold)
    }
}

/// Shown before the first phase and between phases: a blank pause, then 3, 2, 1.
pub const PRE_ROUND: Animation = Animation::new(
    "pre-round",
    &[
        Step::blank(2000),
        Step::show(DIGIT_3, 1000),
        Step::show(DIGIT_2, 1000),
        Step::show(DIGIT_1, 1000),
    ],
);

/// Wrong button: the cross flashes twice.
// The second flash may be redundant pacing; kept as the device has always behaved.
pub const MISS_FLASH: Animation = Animation::new(
    "miss",
    &[
        Step::show(CROSS, 200),
        Step::blank(200),
        Step::show(CROSS, 200),
        Step::blank(0),
    ],
);

/// Final image when the score reached the passing mark.
pub const APPROVED: Animation = Animation::new(
    "approved",
    &[Step::show(RING, 5000), Step::blank(0)],
);

/// Final image when the score fell short.
pub const FAILED: Animation = Animation::new(
    "failed",
    &[Step::show(CROSS, 5000), Step::blank(0)],
);
