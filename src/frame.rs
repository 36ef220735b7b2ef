//! The in-memory color frame for the 25-LED panel.
//!
//! A [`FrameBuffer`] is indexed by physical strip position. Higher layers
//! write into it (usually through [`FrameBuffer::plot`], which goes through
//! the grid mapper) and the LED driver flushes it. There is no transaction:
//! whatever the buffer holds at flush time is what the panel shows.

use smart_leds::RGB8;

use crate::grid::{GridPosition, LED_COUNT};

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// The zero color; an unlit LED.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// One color per physical LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [Rgb; LED_COUNT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// An all-black frame.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; LED_COUNT],
        }
    }

    /// Sets every LED to [`BLACK`].
    pub fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }

    /// Overwrites one LED by physical index. Indexes past the strip are ignored.
    pub fn set(&mut self, led_index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(led_index) {
            *pixel = color;
        }
    }

    /// Overwrites the LED under a logical grid cell.
    pub fn plot(&mut self, position: GridPosition, color: Rgb) {
        self.set(position.led_index(), color);
    }

    /// Color currently held for a physical index.
    #[must_use]
    pub fn get(&self, led_index: usize) -> Option<Rgb> {
        self.pixels.get(led_index).copied()
    }

    /// Color currently held for a logical grid cell.
    #[must_use]
    pub fn at(&self, position: GridPosition) -> Rgb {
        self.get(position.led_index()).unwrap_or(BLACK)
    }

    #[must_use]
    pub const fn pixels(&self) -> &[Rgb; LED_COUNT] {
        &self.pixels
    }

    /// True when every LED is black.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|pixel| *pixel == BLACK)
    }

    /// The words a WS2812 state machine shifts out, one per LED, in strip order.
    ///
    /// Each color is scaled by `max_brightness` (0-255) and packed in the
    /// panel's wire order: green, red, blue, from the most significant byte down.
    #[must_use]
    pub fn grb_words(&self, max_brightness: u8) -> [u32; LED_COUNT] {
        let mut words = [0u32; LED_COUNT];
        for (word, color) in words.iter_mut().zip(self.pixels.iter()) {
            *word = grb_word(scale_color(*color, max_brightness));
        }
        words
    }
}

/// Packs one color in wire order (green, red, blue) into the top 24 bits.
#[must_use]
pub const fn grb_word(color: Rgb) -> u32 {
    u32::from_be_bytes([color.g, color.r, color.b, 0])
}

/// Computes a max brightness value given a current budget (mA) and strip length.
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    reason = "inputs are a small LED count and a milliamp budget; the worst case is clamped"
)]
pub const fn max_brightness(len: usize, max_current_ma: u32) -> u8 {
    let worst_case_ma = (len as u32) * 60;
    if worst_case_ma == 0 {
        return u8::MAX;
    }
    let scaled = (max_current_ma as u64 * 255) / worst_case_ma as u64;
    if scaled > 255 { 255 } else { scaled as u8 }
}

#[inline]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    clippy::cast_possible_truncation,
    reason = "the product of two u8 values divided by 255 fits in u8"
)]
const fn scale_brightness(value: u8, brightness: u8) -> u8 {
    ((value as u16 * brightness as u16) / 255) as u8
}

/// Applies a brightness cap to one color.
#[must_use]
pub const fn scale_color(color: Rgb, max_brightness: u8) -> Rgb {
    Rgb::new(
        scale_brightness(color.r, max_brightness),
        scale_brightness(color.g, max_brightness),
        scale_brightness(color.b, max_brightness),
    )
}
