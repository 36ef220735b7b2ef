//! Monochrome 128×64 text buffer for the SSD1306 status display.
//!
//! The buffer uses the controller's page layout (eight rows of pixels per
//! byte, LSB on top), so an [`Oled`](crate::oled::Oled) can send it as-is.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X8},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use crate::{Error, Result};

/// Display width in pixels.
pub const WIDTH: usize = 128;
/// Display height in pixels.
pub const HEIGHT: usize = 64;
/// Bytes in one full frame.
pub const BUFFER_LEN: usize = WIDTH * HEIGHT / 8;
/// Text lines that fit with the 6×8 font.
pub const LINE_COUNT: usize = HEIGHT / 8;

const LEFT_MARGIN: i32 = 5;
const LINE_HEIGHT: i32 = 8;

/// Off-screen pixels for the status display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextScreen {
    buffer: [u8; BUFFER_LEN],
}

impl Default for TextScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TextScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
        }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Draws `text` on line `index` (0 at the top), left-aligned with a small margin.
    ///
    /// Characters past the right edge are clipped. Lines already drawn are not erased.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineOutOfRange`] when `index` is not below [`LINE_COUNT`].
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "index is below LINE_COUNT, so the offset is at most 56"
    )]
    pub fn write_line(&mut self, index: usize, text: &str) -> Result<()> {
        if index >= LINE_COUNT {
            return Err(Error::LineOutOfRange(index));
        }
        let style = MonoTextStyle::new(&FONT_6X8, BinaryColor::On);
        let origin = Point::new(LEFT_MARGIN, LINE_HEIGHT * index as i32);
        match Text::with_baseline(text, origin, style, Baseline::Top).draw(self) {
            Ok(_) => Ok(()),
            Err(never) => match never {},
        }
    }

    /// Draws each line in order starting from the top, after clearing the screen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineOutOfRange`] when there are more lines than fit.
    pub fn show_lines(&mut self, lines: &[&str]) -> Result<()> {
        self.clear();
        for (index, line) in lines.iter().enumerate() {
            self.write_line(index, line)?;
        }
        Ok(())
    }

    /// Whether the pixel at `(x, y)` is lit. Off-screen pixels read as off.
    #[must_use]
    pub fn is_on(&self, x: usize, y: usize) -> bool {
        pixel_slot(x, y)
            .and_then(|(byte, bit)| self.buffer.get(byte).map(|value| value & bit != 0))
            .unwrap_or(false)
    }

    /// Number of lit pixels.
    #[must_use]
    pub fn lit_count(&self) -> u32 {
        self.buffer.iter().map(|byte| byte.count_ones()).sum()
    }

    /// The raw frame in controller page order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.buffer
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        let Some((byte, bit)) = pixel_slot(x, y) else {
            return;
        };
        if let Some(value) = self.buffer.get_mut(byte) {
            if on {
                *value |= bit;
            } else {
                *value &= !bit;
            }
        }
    }
}

// Byte offset and bit mask for one pixel, or None off-screen.
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    reason = "x and y are bounds-checked before use"
)]
const fn pixel_slot(x: usize, y: usize) -> Option<(usize, u8)> {
    if x >= WIDTH || y >= HEIGHT {
        return None;
    }
    Some(((y / 8) * WIDTH + x, 1 << (y % 8)))
}

impl OriginDimensions for TextScreen {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for TextScreen {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(coord.x), usize::try_from(coord.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}
