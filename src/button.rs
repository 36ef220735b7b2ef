//! The two answer buttons, wired to ground with internal pull-ups.

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pin, Pull};

use crate::scoring::Buttons;

/// Button A (red) and button B (green).
pub struct ButtonPair {
    a: Input<'static>,
    b: Input<'static>,
}

impl ButtonPair {
    #[must_use]
    pub fn new(a: Peri<'static, impl Pin>, b: Peri<'static, impl Pin>) -> Self {
        Self {
            a: Input::new(a, Pull::Up),
            b: Input::new(b, Pull::Up),
        }
    }

    /// Current state of both buttons. A pulled-low pin is a pressed button.
    #[must_use]
    pub fn read(&self) -> Buttons {
        Buttons {
            a: self.a.is_low(),
            b: self.b.is_low(),
        }
    }
}
