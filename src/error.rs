use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Both PIO blocks already have their LED state machine taken.
    #[display("No free PIO state machine for the LED strip")]
    NoFreeStateMachine,

    // `#[error(not(source))]` below tells `derive_more` that `embedded_hal::i2c::ErrorKind`
    // does not implement Rust's `core::error::Error` trait.
    /// An I²C transfer to the status display failed.
    #[display("Display write failed: {_0:?}")]
    DisplayWrite(#[error(not(source))] embedded_hal::i2c::ErrorKind),

    /// Formatted text did not fit its fixed-capacity string.
    #[display("Text does not fit its buffer")]
    TextOverflow,

    /// A text line index past the bottom of the display.
    #[display("Line {_0} is off the display")]
    LineOutOfRange(#[error(not(source))] usize),
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::TextOverflow
    }
}
