//! The 25-LED WS2812 panel, driven by a CPU-fed PIO state machine.
//!
//! [`LedMatrix`] owns a [`FrameBuffer`] and is the board's [`LedPanel`].

use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::peripherals::{PIO0, PIO1};
use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, LoadedProgram, Pio, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use embassy_time::{Duration, Timer};
use fixed::types::U24F8;

use crate::Result;
use crate::animation::Animation;
use crate::frame::FrameBuffer;
use crate::grid::LED_COUNT;
use crate::irqs::{Pio0Irqs, Pio1Irqs};
use crate::state_machine_claims::{PioBlock, StateMachineClaims};
use crate::trainer::LedPanel;

const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;
const RESET_DELAY_US: u64 = 55;

fn load_ws2812_program<'d, PIO: Instance>(common: &mut Common<'d, PIO>) -> LoadedProgram<'d, PIO> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
    common.load_program(&program)
}

/// WS2812 output on state machine 0 of one PIO block.
pub struct PioWs2812Cpu<'d, P: Instance> {
    // Kept alive so the block's pins and program stay configured.
    _common: Common<'d, P>,
    sm: StateMachine<'d, P, 0>,
}

impl<'d, P: Instance> PioWs2812Cpu<'d, P> {
    /// Loads the program and starts the state machine on `pin`.
    pub fn new(
        mut common: Common<'d, P>,
        mut sm: StateMachine<'d, P, 0>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let program = load_ws2812_program(&mut common);
        let mut cfg = Config::default();

        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let ws2812_freq = U24F8::from_num(800);
        let bit_freq = ws2812_freq * CYCLES_PER_BIT;
        cfg.clock_divider = clock_freq / bit_freq;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_enable(true);

        Self {
            _common: common,
            sm,
        }
    }

    /// Pushes one word per LED, then waits out the latch time.
    pub async fn write(&mut self, words: &[u32; LED_COUNT]) {
        let tx = self.sm.tx();
        for word in words {
            tx.wait_push(*word).await;
        }
        Timer::after(Duration::from_micros(RESET_DELAY_US)).await;
    }
}

enum Output {
    Pio0(PioWs2812Cpu<'static, PIO0>),
    Pio1(PioWs2812Cpu<'static, PIO1>),
}

/// The 5×5 panel with its frame buffer and brightness cap.
pub struct LedMatrix {
    output: Output,
    block: PioBlock,
    frame: FrameBuffer,
    max_brightness: u8,
}

impl LedMatrix {
    /// Claims a PIO block (PIO0 first, then PIO1) and starts the strip on `pin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFreeStateMachine`](crate::Error::NoFreeStateMachine)
    /// if both blocks are already claimed.
    pub fn new(
        claims: &StateMachineClaims,
        pio0: Peri<'static, PIO0>,
        pio1: Peri<'static, PIO1>,
        pin: Peri<'static, impl PioPin>,
        max_brightness: u8,
    ) -> Result<Self> {
        let block = claims.claim_first_free()?;
        let output = match block {
            PioBlock::Pio0 => {
                let Pio { common, sm0, .. } = Pio::new(pio0, Pio0Irqs);
                Output::Pio0(PioWs2812Cpu::new(common, sm0, pin))
            }
            PioBlock::Pio1 => {
                let Pio { common, sm0, .. } = Pio::new(pio1, Pio1Irqs);
                Output::Pio1(PioWs2812Cpu::new(common, sm0, pin))
            }
        };
        Ok(Self {
            output,
            block,
            frame: FrameBuffer::new(),
            max_brightness,
        })
    }

    /// The PIO block this strip claimed.
    #[must_use]
    pub const fn block(&self) -> PioBlock {
        self.block
    }
}

impl LedPanel for LedMatrix {
    fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    async fn show(&mut self) {
        let words = self.frame.grb_words(self.max_brightness);
        match &mut self.output {
            Output::Pio0(driver) => driver.write(&words).await,
            Output::Pio1(driver) => driver.write(&words).await,
        }
    }

    /// Leaves the frame on the last step.
    async fn play(&mut self, animation: &Animation) {
        for step in animation.steps() {
            step.render(&mut self.frame);
            self.show().await;
            Timer::after(step.hold).await;
        }
    }
}
