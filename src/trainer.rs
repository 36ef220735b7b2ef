//! One training session from the first instruction screen to the result.
//!
//! The session reaches the board only through [`LedPanel`], [`PlayerInput`],
//! [`Clock`] and an [`Oled`] on any I²C bus, so the whole flow also runs on the
//! host against stand-ins.

use embassy_time::{Duration, Instant, Timer};
use embedded_hal::i2c::I2c;
use rand::Rng;

use crate::Result;
use crate::animation::{Animation, MISS_FLASH, PRE_ROUND};
use crate::config::GameConfig;
use crate::frame::FrameBuffer;
use crate::game::Game;
use crate::grid::GridPosition;
use crate::oled::Oled;
use crate::round::PhaseEvent;
use crate::scoring::{Buttons, Feedback};
use crate::screens::{Instructions, Verdict};
use crate::text_screen::TextScreen;

/// The 5×5 panel as the session sees it.
#[expect(async_fn_in_trait, reason = "single-threaded executor")]
pub trait LedPanel {
    /// The frame that the next [`LedPanel::show`] sends.
    fn frame_mut(&mut self) -> &mut FrameBuffer;

    /// Sends the current frame.
    async fn show(&mut self);

    /// Shows each step of `animation` for its hold time.
    async fn play(&mut self, animation: &Animation);

    /// Blanks the panel.
    async fn clear(&mut self) {
        self.frame_mut().clear();
        self.show().await;
    }
}

/// Joystick and buttons, sampled once per tick.
#[expect(async_fn_in_trait, reason = "single-threaded executor")]
pub trait PlayerInput {
    async fn read_position(&mut self) -> GridPosition;
    fn read_buttons(&mut self) -> Buttons;
}

/// Time source for the round clock and every pause between screens.
#[expect(async_fn_in_trait, reason = "single-threaded executor")]
pub trait Clock {
    fn now(&self) -> Instant;
    async fn sleep(&mut self, duration: Duration);
}

/// `embassy-time`'s global clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&mut self, duration: Duration) {
        Timer::after(duration).await;
    }
}

/// Runs a full session and returns how it ended.
///
/// Each tick checks the phase clock, reads the stick and buttons, scores them,
/// then redraws the panel, in that order. The countdown plays before the first
/// phase and before each later one; the loop ends when the last phase expires.
///
/// # Errors
///
/// Returns an error if the status display stops answering.
#[expect(clippy::future_not_send, reason = "single-threaded executor")]
pub async fn run_session<P, I, K, B, R>(
    panel: &mut P,
    input: &mut I,
    display: &mut Oled<B>,
    clock: &mut K,
    config: &GameConfig,
    rng: R,
) -> Result<Verdict>
where
    P: LedPanel,
    I: PlayerInput,
    K: Clock,
    B: I2c,
    R: Rng,
{
    let mut screen = TextScreen::new();

    panel.clear().await;
    for page in Instructions::ALL {
        page.draw(&mut screen, config.passing_score)?;
        display.flush(&screen)?;
        clock.sleep(config.screen_hold).await;
    }
    blank(display, &mut screen)?;

    let mut game = Game::new(rng, clock.now());
    #[cfg(feature = "defmt")]
    defmt::info!("First target {:?}", game.target());

    panel.play(&PRE_ROUND).await;
    game.restart_phase(clock.now());

    loop {
        match game.poll_phase(clock.now()) {
            PhaseEvent::Running => {}
            PhaseEvent::Advanced(_) => {
                #[cfg(feature = "defmt")]
                defmt::info!("Next phase: {:?}", game.phase());
                panel.play(&PRE_ROUND).await;
                game.restart_phase(clock.now());
            }
            PhaseEvent::Finished => break,
        }

        let player = input.read_position().await;
        let buttons = input.read_buttons();
        match game.update(player, buttons) {
            Feedback::None => {}
            Feedback::Hit => {
                #[cfg(feature = "defmt")]
                defmt::info!("Hit, score {}, next {:?}", game.score(), game.target());
            }
            Feedback::Miss { .. } => {
                #[cfg(feature = "defmt")]
                defmt::info!("Miss, score {}", game.score());
                panel.play(&MISS_FLASH).await;
            }
        }

        game.render(panel.frame_mut());
        panel.show().await;
        clock.sleep(config.tick).await;
    }

    let score = game.score();
    let verdict = Verdict::from_score(score, config.passing_score);
    #[cfg(feature = "defmt")]
    defmt::info!("Round over: score {} ({:?})", score, verdict);

    panel.clear().await;
    clock.sleep(config.idle_after_round).await;

    verdict.draw(&mut screen, score)?;
    display.flush(&screen)?;
    panel.play(&verdict.animation()).await;
    clock.sleep(config.result_hold).await;

    blank(display, &mut screen)?;
    panel.clear().await;
    clock.sleep(config.result_hold).await;
    Ok(verdict)
}

fn blank<B: I2c>(display: &mut Oled<B>, screen: &mut TextScreen) -> Result<()> {
    screen.clear();
    display.flush(screen)
}
