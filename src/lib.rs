//! Reaction and coordination trainer for a 5×5 WS2812 panel on a Raspberry Pi Pico.
//!
//! The player steers a blue cursor with a joystick and answers each red or
//! green target with the matching button, across three shrinking phases.
//! Everything above the hardware drivers is plain data and logic and builds
//! on the host with `--no-default-features --features host`.
#![no_std]
#![cfg_attr(not(feature = "host"), no_main)]

pub mod animation;
pub mod config;
mod error;
pub mod frame;
pub mod game;
pub mod grid;
pub mod input;
mod never;
pub mod oled;
pub mod pattern;
pub mod round;
pub mod scoring;
pub mod screens;
pub mod spawner;
pub mod state_machine_claims;
pub mod text_screen;
pub mod trainer;
pub mod wiring;

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod button;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod hardware;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod irqs;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod joystick;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod led_strip;

// Re-export commonly used items
pub use config::GameConfig;
pub use error::{Error, Result};
pub use frame::{FrameBuffer, Rgb};
pub use game::Game;
pub use grid::{GridPosition, led_index};
pub use never::Never;
pub use round::{Phase, PhaseEvent, RoundClock, RoundPhase};
pub use scoring::{Buttons, Feedback};
pub use spawner::{ColorCode, Target};

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use hardware::Hardware;
