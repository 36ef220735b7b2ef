//! Minimal SSD1306 128×64 driver: power-up sequence and full-frame flush.
//!
//! Generic over any `embedded_hal` 1.0 I²C bus, so the same code runs against
//! the RP2040 peripheral and against a recording bus in tests.

use embedded_hal::i2c::{Error as _, I2c};

use crate::text_screen::{BUFFER_LEN, TextScreen, WIDTH};
use crate::{Error, Result};

/// Default 7-bit address of the display module.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

// Control bytes: a command stream, or a data stream.
const COMMAND: u8 = 0x00;
const DATA: u8 = 0x40;

// Data bytes sent per transfer (plus the control byte).
const CHUNK: usize = 16;

const INIT_SEQUENCE: [u8; 25] = [
    0xAE, // display off
    0x20, 0x00, // horizontal addressing
    0x40, // start line 0
    0xA1, // segment remap: column 127 is SEG0
    0xA8, 0x3F, // multiplex 64
    0xC8, // scan COM from the bottom
    0xD3, 0x00, // no vertical offset
    0xDA, 0x12, // alternative COM pins
    0xD5, 0x80, // clock divide / oscillator
    0xD9, 0xF1, // pre-charge
    0xDB, 0x30, // VCOMH deselect
    0x81, 0xFF, // contrast
    0xA4, // follow RAM
    0xA6, // not inverted
    0x8D, 0x14, // charge pump on
    0x2E, // no scrolling
];

const DISPLAY_ON: u8 = 0xAF;

/// SSD1306 on an I²C bus.
pub struct Oled<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Oled<I2C> {
    /// Wraps the bus, runs the power-up sequence and turns the panel on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DisplayWrite`] if any command is not acknowledged.
    pub fn new(i2c: I2C, address: u8) -> Result<Self> {
        let mut oled = Self { i2c, address };
        oled.commands(&INIT_SEQUENCE)?;
        oled.commands(&[DISPLAY_ON])?;
        Ok(oled)
    }

    /// Sends a whole frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DisplayWrite`] if the bus reports a failure.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "WIDTH and the page count fit in a command byte"
    )]
    pub fn flush(&mut self, screen: &TextScreen) -> Result<()> {
        const PAGES: usize = BUFFER_LEN / WIDTH;
        self.commands(&[0x21, 0, (WIDTH - 1) as u8])?;
        self.commands(&[0x22, 0, (PAGES - 1) as u8])?;
        // Every packet starts with the data control byte; only the payload changes.
        let mut packet = [DATA; CHUNK + 1];
        for chunk in screen.as_bytes().chunks_exact(CHUNK) {
            if let Some((_, payload)) = packet.split_first_mut() {
                payload.copy_from_slice(chunk);
            }
            self.write(&packet)?;
        }
        Ok(())
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn commands(&mut self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            self.write(&[COMMAND, byte])?;
        }
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.i2c
            .write(self.address, bytes)
            .map_err(|err| Error::DisplayWrite(err.kind()))
    }
}
