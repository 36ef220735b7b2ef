//! What the status display says before and after the round.

use core::fmt::Write as _;

use heapless::String;

use crate::Result;
use crate::animation::{APPROVED, Animation, FAILED};
use crate::text_screen::TextScreen;

/// Characters that fit on one display line with the 6×8 font.
pub const LINE_CHARS: usize = 20;

/// One formatted display line.
pub type Line = String<LINE_CHARS>;

/// The three screens shown before play, in order.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instructions {
    Title,
    Controls,
    GoodLuck,
}

impl Instructions {
    pub const ALL: [Self; 3] = [Self::Title, Self::Controls, Self::GoodLuck];

    /// Clears `screen` and draws this page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TextOverflow`](crate::Error::TextOverflow) if the passing
    /// score does not fit on its line.
    pub fn draw(self, screen: &mut TextScreen, passing_score: i32) -> Result<()> {
        match self {
            Self::Title => {
                let mut points = Line::new();
                write!(points, "{passing_score} points")?;
                screen.show_lines(&[
                    "Coordination",
                    "training",
                    "",
                    "Passing",
                    "score",
                    "",
                    points.as_str(),
                ])
            }
            Self::Controls => screen.show_lines(&[
                "Steer the blue",
                "LED with the",
                "joystick",
                "",
                "Press A on red",
                "and B on",
                "green",
            ]),
            Self::GoodLuck => screen.show_lines(&["Good", "", "luck"]),
        }
    }
}

/// Outcome of a session.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Failed,
}

impl Verdict {
    /// Approved at or above `passing_score`, failed below it.
    #[must_use]
    pub const fn from_score(score: i32, passing_score: i32) -> Self {
        if score >= passing_score {
            Self::Approved
        } else {
            Self::Failed
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Failed => "Failed",
        }
    }

    /// The panel sequence that accompanies the result text.
    #[must_use]
    pub const fn animation(self) -> Animation {
        match self {
            Self::Approved => APPROVED,
            Self::Failed => FAILED,
        }
    }

    /// Clears `screen` and draws the result page for `score`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TextOverflow`](crate::Error::TextOverflow) if the score
    /// line does not fit.
    pub fn draw(self, screen: &mut TextScreen, score: i32) -> Result<()> {
        let mut score_line = Line::new();
        write!(score_line, "Score = {score}")?;
        screen.show_lines(&["Result", "", self.label(), score_line.as_str()])
    }
}
