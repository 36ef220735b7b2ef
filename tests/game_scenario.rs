//! End-to-end play of one round on the host, without hardware.

use embassy_time::{Duration, Instant};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use reflex_grid::frame::{BLACK, FrameBuffer};
use reflex_grid::game::{Game, PLAYER_COLOR};
use reflex_grid::grid::GridPosition;
use reflex_grid::round::{PhaseEvent, RoundPhase};
use reflex_grid::scoring::{Buttons, Feedback, evaluate};
use reflex_grid::spawner::{ColorCode, Target};

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

fn wrong_button(color: ColorCode) -> Buttons {
    match color {
        ColorCode::Red => Buttons::B,
        ColorCode::Green => Buttons::A,
    }
}

#[test]
fn hit_then_misses_across_phases() {
    let rng = SmallRng::seed_from_u64(2024);
    let red = Target {
        position: GridPosition::new(1, 1),
        color: ColorCode::Red,
    };
    let mut game = Game::with_target(rng, red, at(0));
    assert_eq!(game.player(), GridPosition::CENTER);

    // Off target: buttons do nothing.
    assert_eq!(game.update(GridPosition::new(1, 2), Buttons::A), Feedback::None);
    assert_eq!(game.score(), 0);

    // Onto the red target with only the red button.
    assert_eq!(game.update(red.position, Buttons::A), Feedback::Hit);
    assert_eq!(game.score(), 1);
    assert_ne!(game.target().position, red.position);

    // Onto the next target with the wrong button during the first phase.
    let next = game.target();
    assert_eq!(
        game.update(next.position, wrong_button(next.color)),
        Feedback::Miss { penalty: 1 }
    );
    assert_eq!(game.score(), 0);
    assert_eq!(game.target(), next, "a miss keeps the target");

    // Through to the last phase.
    assert!(matches!(game.poll_phase(at(15_000)), PhaseEvent::Advanced(_)));
    game.restart_phase(at(20_000));
    assert!(matches!(game.poll_phase(at(30_000)), PhaseEvent::Advanced(_)));
    game.restart_phase(at(35_000));
    assert_eq!(game.clock().current_duration(), Some(Duration::from_millis(5_000)));

    assert_eq!(
        game.update(next.position, wrong_button(next.color)),
        Feedback::Miss { penalty: 3 }
    );
    assert_eq!(game.score(), -3);

    assert_eq!(game.poll_phase(at(40_000)), PhaseEvent::Finished);
    assert!(game.is_finished());
    assert_eq!(game.phase(), RoundPhase::Finished);

    // Input after the round is ignored.
    assert_eq!(game.update(next.position, Buttons::A), Feedback::None);
    assert_eq!(game.update(next.position, Buttons::B), Feedback::None);
    assert_eq!(game.score(), -3);
}

#[test]
fn scoring_walkthrough_with_chosen_targets() {
    let mut rng = SmallRng::seed_from_u64(1);
    let red = Target {
        position: GridPosition::new(0, 4),
        color: ColorCode::Red,
    };
    let green = Target {
        position: GridPosition::new(3, 0),
        color: ColorCode::Green,
    };

    let first = evaluate(0, red.position, &red, Buttons::A, Duration::from_millis(15_000), &mut rng);
    assert_eq!(first.score, 1);
    assert!(first.new_target.is_some());

    let second = evaluate(
        first.score,
        green.position,
        &green,
        Buttons::A,
        Duration::from_millis(15_000),
        &mut rng,
    );
    assert_eq!(second.score, 0);

    let third = evaluate(
        second.score,
        green.position,
        &green,
        Buttons::A,
        Duration::from_millis(5_000),
        &mut rng,
    );
    assert_eq!(third.score, -3);
}

#[test]
fn new_game_starts_centered_with_target_elsewhere() {
    for seed in 0..200 {
        let game = Game::new(SmallRng::seed_from_u64(seed), at(0));
        assert_eq!(game.player(), GridPosition::CENTER);
        assert_ne!(game.target().position, GridPosition::CENTER);
        assert_eq!(game.score(), 0);
        assert!(matches!(game.phase(), RoundPhase::Active(_)));
    }
}

#[test]
fn render_draws_player_then_target() {
    let target = Target {
        position: GridPosition::new(4, 0),
        color: ColorCode::Green,
    };
    let mut game = Game::with_target(SmallRng::seed_from_u64(3), target, at(0));
    let mut frame = FrameBuffer::new();
    frame.set(7, PLAYER_COLOR);

    game.render(&mut frame);
    assert_eq!(frame.at(GridPosition::CENTER), PLAYER_COLOR);
    assert_eq!(frame.at(target.position), ColorCode::Green.led_color());
    assert_eq!(frame.get(20), Some(ColorCode::Green.led_color()));
    let lit = frame.pixels().iter().filter(|pixel| **pixel != BLACK).count();
    assert_eq!(lit, 2);

    // Standing on the target: the target color wins.
    game.update(target.position, Buttons::NONE);
    game.render(&mut frame);
    assert_eq!(frame.at(target.position), ColorCode::Green.led_color());
    let lit = frame.pixels().iter().filter(|pixel| **pixel != BLACK).count();
    assert_eq!(lit, 1);
}
