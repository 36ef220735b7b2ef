//! Host-level tests for the LED strip's PIO block claims.

use reflex_grid::Error;
use reflex_grid::state_machine_claims::{PioBlock, StateMachineClaims};

#[test]
fn prefers_pio0() {
    let claims = StateMachineClaims::new();
    assert_eq!(claims.claim_first_free().unwrap(), PioBlock::Pio0);
    assert!(claims.is_claimed(PioBlock::Pio0));
    assert!(!claims.is_claimed(PioBlock::Pio1));
}

#[test]
fn falls_back_to_pio1_when_pio0_is_taken() {
    let claims = StateMachineClaims::new();
    assert!(claims.claim(PioBlock::Pio0));
    assert_eq!(claims.claim_first_free().unwrap(), PioBlock::Pio1);
}

#[test]
fn both_taken_is_an_error() {
    let claims = StateMachineClaims::new();
    claims.claim_first_free().unwrap();
    claims.claim_first_free().unwrap();
    assert!(matches!(
        claims.claim_first_free(),
        Err(Error::NoFreeStateMachine)
    ));
}

#[test]
fn claim_is_exclusive_until_released() {
    let claims = StateMachineClaims::new();
    assert!(claims.claim(PioBlock::Pio1));
    assert!(!claims.claim(PioBlock::Pio1));
    claims.release(PioBlock::Pio1);
    assert!(!claims.is_claimed(PioBlock::Pio1));
    assert!(claims.claim(PioBlock::Pio1));
}

#[test]
fn static_registry_works_without_allocation() {
    static CLAIMS: StateMachineClaims = StateMachineClaims::new();
    assert_eq!(CLAIMS.claim_first_free().unwrap(), PioBlock::Pio0);
    CLAIMS.release(PioBlock::Pio0);
}
