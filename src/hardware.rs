//! Board bring-up: every peripheral the trainer uses, on its fixed pins.
//!
//! | Part            | Pins                           |
//! |-----------------|--------------------------------|
//! | WS2812 panel    | GP7 (PIO0 SM0, else PIO1 SM0)  |
//! | Joystick        | GP27 = X, GP26 = Y (ADC)       |
//! | Buttons         | GP5 = A (red), GP6 = B (green) |
//! | SSD1306 display | I2C1: SDA GP14, SCL GP15       |

use defmt::info;
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C1;

use crate::Result;
use crate::button::ButtonPair;
use crate::config::GameConfig;
use crate::grid::GridPosition;
use crate::joystick::Joystick;
use crate::led_strip::LedMatrix;
use crate::oled::{DEFAULT_ADDRESS, Oled};
use crate::scoring::Buttons;
use crate::state_machine_claims::StateMachineClaims;
use crate::trainer::PlayerInput;

const I2C_FREQUENCY_HZ: u32 = 400_000;

/// The status display on its bus.
pub type Display = Oled<I2c<'static, I2C1, Blocking>>;

/// Stick and buttons together, as the session reads them.
pub struct Gamepad {
    pub joystick: Joystick,
    pub buttons: ButtonPair,
}

impl PlayerInput for Gamepad {
    async fn read_position(&mut self) -> GridPosition {
        self.joystick.read().await
    }

    fn read_buttons(&mut self) -> Buttons {
        self.buttons.read()
    }
}

pub struct Hardware {
    pub leds: LedMatrix,
    pub gamepad: Gamepad,
    pub display: Display,
}

impl Hardware {
    /// Initializes the chip and claims every peripheral.
    ///
    /// # Errors
    ///
    /// Fails if no PIO state machine is free for the panel or the display
    /// does not answer its power-up commands.
    pub fn new(config: &GameConfig, claims: &StateMachineClaims) -> Result<Self> {
        let peripherals = embassy_rp::init(embassy_rp::config::Config::default());

        let leds = LedMatrix::new(
            claims,
            peripherals.PIO0,
            peripherals.PIO1,
            peripherals.PIN_7,
            config.max_brightness(),
        )?;
        info!("LED panel on {:?} SM0", leds.block());

        let joystick = Joystick::new(peripherals.ADC, peripherals.PIN_27, peripherals.PIN_26);
        let buttons = ButtonPair::new(peripherals.PIN_5, peripherals.PIN_6);

        let mut i2c_config = i2c::Config::default();
        i2c_config.frequency = I2C_FREQUENCY_HZ;
        let bus = I2c::new_blocking(
            peripherals.I2C1,
            peripherals.PIN_15,
            peripherals.PIN_14,
            i2c_config,
        );
        let display = Oled::new(bus, DEFAULT_ADDRESS)?;

        Ok(Self {
            leds,
            gamepad: Gamepad { joystick, buttons },
            display,
        })
    }
}
