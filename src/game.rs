//! The in-round game state: where the player is, what the target is, the score
//! and the phase clock.
//!
//! [`Game`] holds no hardware. The session loop feeds it one normalized
//! joystick position and one button sample per tick, asks it for the frame
//! to show and reacts to the returned [`Feedback`].

use embassy_time::Instant;
use rand::Rng;

use crate::frame::{FrameBuffer, Rgb};
use crate::grid::GridPosition;
use crate::round::{PhaseEvent, RoundClock, RoundPhase};
use crate::scoring::{Buttons, Feedback, evaluate};
use crate::spawner::{Target, spawn};

/// Color of the player's cursor.
pub const PLAYER_COLOR: Rgb = Rgb::new(0, 0, 255);

/// Player, target, score and phase clock for one round.
pub struct Game<R: Rng> {
    rng: R,
    player: GridPosition,
    target: Target,
    score: i32,
    clock: RoundClock,
}

impl<R: Rng> Game<R> {
    /// Puts the player in the center, spawns the first target and starts the
    /// first phase at `now`.
    pub fn new(mut rng: R, now: Instant) -> Self {
        let player = GridPosition::CENTER;
        let target = spawn(&mut rng, player);
        Self::with_target(rng, target, now)
    }

    /// Like [`Game::new`] but with a chosen first target.
    pub const fn with_target(rng: R, target: Target, now: Instant) -> Self {
        Self {
            rng,
            player: GridPosition::CENTER,
            target,
            score: 0,
            clock: RoundClock::start(now),
        }
    }

    #[must_use]
    pub const fn player(&self) -> GridPosition {
        self.player
    }

    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.clock.phase()
    }

    #[must_use]
    pub const fn clock(&self) -> &RoundClock {
        &self.clock
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    /// Advances the phase clock. See [`RoundClock::poll`].
    pub fn poll_phase(&mut self, now: Instant) -> PhaseEvent {
        self.clock.poll(now)
    }

    /// Restarts the running phase at `now`, typically after the countdown.
    pub const fn restart_phase(&mut self, now: Instant) {
        self.clock.restart(now);
    }

    /// Applies one tick of input: moves the player, then scores it.
    ///
    /// Once the round has finished the player still moves but nothing is scored.
    pub fn update(&mut self, player: GridPosition, buttons: Buttons) -> Feedback {
        self.player = player;
        let Some(duration) = self.clock.current_duration() else {
            return Feedback::None;
        };
        let evaluation = evaluate(
            self.score,
            self.player,
            &self.target,
            buttons,
            duration,
            &mut self.rng,
        );
        self.score = evaluation.score;
        if let Some(target) = evaluation.new_target {
            self.target = target;
        }
        evaluation.feedback
    }

    /// Clears `frame` and draws the player, then the target over it.
    pub fn render(&self, frame: &mut FrameBuffer) {
        frame.clear();
        frame.plot(self.player, PLAYER_COLOR);
        frame.plot(self.target.position, self.target.color.led_color());
    }
}
