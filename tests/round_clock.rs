//! Host-level tests for the round phase state machine.

use embassy_time::{Duration, Instant};
use reflex_grid::round::{
    DIFFICULTY_CURVE, Phase, PhaseEvent, RoundClock, RoundPhase, penalty_for,
};

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

fn phase_of(clock: &RoundClock) -> Option<Duration> {
    clock.current_duration()
}

#[test]
fn curve_is_strictly_decreasing_and_harsher() {
    let durations: Vec<u64> = DIFFICULTY_CURVE
        .iter()
        .map(|spec| spec.duration.as_millis())
        .collect();
    let penalties: Vec<i32> = DIFFICULTY_CURVE.iter().map(|spec| spec.penalty).collect();
    assert_eq!(durations, [15_000, 10_000, 5_000]);
    assert_eq!(penalties, [1, 2, 3]);
}

#[test]
fn phases_advance_in_order_then_finish() {
    let mut clock = RoundClock::start(at(1_000));
    assert_eq!(clock.phase(), RoundPhase::Active(Phase::FIRST));
    assert_eq!(phase_of(&clock), Some(Duration::from_millis(15_000)));

    assert_eq!(clock.poll(at(15_999)), PhaseEvent::Running);

    let PhaseEvent::Advanced(second) = clock.poll(at(16_000)) else {
        panic!("expected the second phase");
    };
    assert_eq!(second.duration(), Duration::from_millis(10_000));
    assert_eq!(second.number(), 2);
    assert_eq!(clock.phase_start(), at(16_000));

    assert_eq!(clock.poll(at(25_999)), PhaseEvent::Running);
    let PhaseEvent::Advanced(third) = clock.poll(at(26_050)) else {
        panic!("expected the third phase");
    };
    assert_eq!(third.duration(), Duration::from_millis(5_000));
    assert_eq!(clock.phase_start(), at(26_050));

    assert_eq!(clock.poll(at(31_049)), PhaseEvent::Running);
    assert_eq!(clock.poll(at(31_050)), PhaseEvent::Finished);
    assert!(clock.is_finished());
    assert_eq!(phase_of(&clock), None);
}

#[test]
fn finished_is_terminal() {
    let mut clock = RoundClock::start(at(0));
    clock.poll(at(15_000));
    clock.poll(at(25_000));
    assert_eq!(clock.poll(at(30_000)), PhaseEvent::Finished);
    assert_eq!(clock.poll(at(90_000)), PhaseEvent::Running);
    assert_eq!(clock.phase(), RoundPhase::Finished);
}

#[test]
fn one_late_poll_advances_only_one_phase() {
    let mut clock = RoundClock::start(at(0));
    // Long enough to cover every phase, but phases never skip.
    assert!(matches!(clock.poll(at(60_000)), PhaseEvent::Advanced(_)));
    assert_eq!(phase_of(&clock), Some(Duration::from_millis(10_000)));
}

#[test]
fn restart_pushes_the_deadline_back() {
    let mut clock = RoundClock::start(at(0));
    let PhaseEvent::Advanced(_) = clock.poll(at(15_000)) else {
        panic!("expected an advance");
    };
    // The between-phase countdown takes 5 s before play resumes.
    clock.restart(at(20_000));
    assert_eq!(clock.poll(at(29_999)), PhaseEvent::Running);
    assert!(matches!(clock.poll(at(30_000)), PhaseEvent::Advanced(_)));
}

#[test]
fn clock_reading_before_start_counts_as_no_time() {
    let mut clock = RoundClock::start(at(5_000));
    assert_eq!(clock.poll(at(1_000)), PhaseEvent::Running);
    assert_eq!(clock.remaining(at(1_000)), Duration::from_millis(15_000));
    assert_eq!(clock.remaining(at(12_000)), Duration::from_millis(8_000));
    assert_eq!(clock.remaining(at(99_000)), Duration::from_ticks(0));
}

#[test]
fn penalty_steps_with_phase_duration() {
    assert_eq!(penalty_for(Duration::from_millis(15_000)), 1);
    assert_eq!(penalty_for(Duration::from_millis(10_000)), 2);
    assert_eq!(penalty_for(Duration::from_millis(5_000)), 3);
    assert_eq!(penalty_for(Duration::from_millis(1_234)), 3);
}

#[test]
fn phase_penalties_match_table() {
    let mut phase = Phase::FIRST;
    let mut seen = vec![phase.penalty()];
    while let Some(next) = phase.next() {
        seen.push(next.penalty());
        phase = next;
    }
    assert_eq!(seen, [1, 2, 3]);
}
