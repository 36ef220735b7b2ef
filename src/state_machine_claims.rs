//! Which PIO block owns the LED strip's state machine.
//!
//! The strip prefers PIO0 and falls back to PIO1 when PIO0's state machine is
//! already taken. With both taken there is nothing left to try.

use portable_atomic::{AtomicBool, Ordering};

use crate::{Error, Result};

/// A PIO block that can host the WS2812 program.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PioBlock {
    Pio0,
    Pio1,
}

impl PioBlock {
    /// Blocks in the order they are tried.
    pub const PREFERENCE: [Self; 2] = [Self::Pio0, Self::Pio1];
}

/// Claim flags for the strip's state machine on each PIO block.
#[derive(Debug, Default)]
pub struct StateMachineClaims {
    pio0: AtomicBool,
    pio1: AtomicBool,
}

impl StateMachineClaims {
    /// Nothing claimed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pio0: AtomicBool::new(false),
            pio1: AtomicBool::new(false),
        }
    }

    const fn flag(&self, block: PioBlock) -> &AtomicBool {
        match block {
            PioBlock::Pio0 => &self.pio0,
            PioBlock::Pio1 => &self.pio1,
        }
    }

    /// Claims `block`. Returns `false` if it was already claimed.
    pub fn claim(&self, block: PioBlock) -> bool {
        self.flag(block)
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Claims the first free block in [`PioBlock::PREFERENCE`] order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFreeStateMachine`] when both blocks are already claimed.
    pub fn claim_first_free(&self) -> Result<PioBlock> {
        PioBlock::PREFERENCE
            .into_iter()
            .find(|block| self.claim(*block))
            .ok_or(Error::NoFreeStateMachine)
    }

    /// Gives `block` back.
    pub fn release(&self, block: PioBlock) {
        self.flag(block).store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_claimed(&self, block: PioBlock) -> bool {
        self.flag(block).load(Ordering::Acquire)
    }
}
