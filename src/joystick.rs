//! Two-axis analog joystick on the RP2040 ADC.

use defmt::warn;
use embassy_rp::Peri;
use embassy_rp::adc::{Adc, AdcPin, Async, Channel, Config};
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::ADC;

use crate::grid::GridPosition;
use crate::input::{ADC_CENTER, normalize};
use crate::irqs::AdcIrqs;

/// The stick's two potentiometers, sampled one after the other.
pub struct Joystick {
    adc: Adc<'static, Async>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl Joystick {
    /// Takes the ADC and the pins wired to the horizontal and vertical axes.
    pub fn new(
        adc: Peri<'static, ADC>,
        x_pin: Peri<'static, impl AdcPin + 'static>,
        y_pin: Peri<'static, impl AdcPin + 'static>,
    ) -> Self {
        Self {
            adc: Adc::new(adc, AdcIrqs, Config::default()),
            x: Channel::new_pin(x_pin, Pull::None),
            y: Channel::new_pin(y_pin, Pull::None),
        }
    }

    /// Raw 12-bit `(x, y)` readings. A failed conversion reads as centered.
    pub async fn read_raw(&mut self) -> (u16, u16) {
        let x = sample(&mut self.adc, &mut self.x).await;
        let y = sample(&mut self.adc, &mut self.y).await;
        (x, y)
    }

    /// The grid cell the stick points at.
    pub async fn read(&mut self) -> GridPosition {
        let (x, y) = self.read_raw().await;
        normalize(x, y)
    }
}

async fn sample(adc: &mut Adc<'static, Async>, channel: &mut Channel<'static>) -> u16 {
    match adc.read(channel).await {
        Ok(raw) => raw,
        Err(err) => {
            warn!("ADC read failed: {:?}", err);
            ADC_CENTER
        }
    }
}
