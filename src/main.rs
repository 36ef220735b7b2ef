//! Reaction trainer firmware: instructions, three timed phases, then the result.
//!
//! Runs on a Raspberry Pi Pico RP2040 wired to a 5×5 WS2812 panel, a two-axis
//! joystick, two buttons and an SSD1306 display (see `reflex_grid::hardware`).
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use panic_probe as _;
use rand::rngs::SmallRng;
use rand::{RngCore as _, SeedableRng as _};
use reflex_grid::state_machine_claims::StateMachineClaims;
use reflex_grid::trainer::{SystemClock, run_session};
use reflex_grid::{GameConfig, Hardware, Never, Result};

static STRIP_CLAIMS: StateMachineClaims = StateMachineClaims::new();

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Never> {
    let config = GameConfig::DEFAULT;
    info!(
        "Reflex grid: passing score {}, LED cap {}/255",
        config.passing_score,
        config.max_brightness()
    );
    let mut hardware = Hardware::new(&config, &STRIP_CLAIMS)?;

    loop {
        let Hardware {
            leds,
            gamepad,
            display,
        } = &mut hardware;
        let rng = SmallRng::seed_from_u64(RoscRng.next_u64());
        let verdict = run_session(leds, gamepad, display, &mut SystemClock, &config, rng).await?;
        info!("Session finished: {:?}", verdict);
        if !cfg!(feature = "replay") {
            break;
        }
    }

    info!("Halted; reset the board to play again");
    core::future::pending().await
}
