//! Host-level tests for the play-field to strip mapping.

use reflex_grid::grid::{GRID_LAYOUT, GRID_SIZE, GridPosition, LED_COUNT, led_index};
use reflex_grid::wiring::StripWiring;

#[test]
fn corners_match_wiring() {
    assert_eq!(led_index(0, 0), 24);
    assert_eq!(led_index(4, 0), 20);
    assert_eq!(led_index(0, 4), 4);
    assert_eq!(led_index(4, 4), 0);
}

#[test]
fn row_one_runs_opposite_to_row_zero() {
    let row0: Vec<usize> = (0..GRID_SIZE).map(|col| led_index(col, 0)).collect();
    let row1: Vec<usize> = (0..GRID_SIZE).map(|col| led_index(col, 1)).collect();
    assert_eq!(row0, [24, 23, 22, 21, 20]);
    assert_eq!(row1, [15, 16, 17, 18, 19]);
}

#[test]
fn every_cell_maps_to_a_distinct_led() {
    let mut seen = [false; LED_COUNT];
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let index = led_index(col, row);
            assert!(index < LED_COUNT, "({col},{row}) -> {index}");
            assert!(!seen[index], "LED {index} used twice");
            seen[index] = true;
        }
    }
    assert!(seen.iter().all(|used| *used));
}

#[test]
fn formula_agrees_with_layout() {
    for (led, &(col, row)) in GRID_LAYOUT.cells().iter().enumerate() {
        assert_eq!(led_index(col, row), led, "({col},{row})");
        assert_eq!(GRID_LAYOUT.led_for(col, row), Some(led));
    }
}

#[test]
fn layout_is_reversed_serpentine() {
    const SERPENTINE: StripWiring<25, 5, 5> = StripWiring::serpentine();
    assert_eq!(SERPENTINE.cells()[0], (0, 0));
    assert_eq!(SERPENTINE.cells()[5], (4, 1));
    assert_eq!(GRID_LAYOUT.cells()[0], (4, 4));
    assert_eq!(GRID_LAYOUT.cells()[24], (0, 0));
    assert_eq!(SERPENTINE.from_far_end(), GRID_LAYOUT);
    assert_eq!(GRID_LAYOUT.led_for(5, 0), None);
}

#[test]
fn out_of_range_coordinates_clamp() {
    assert_eq!(led_index(9, 0), led_index(4, 0));
    assert_eq!(led_index(0, 200), led_index(0, 4));
    assert_eq!(GridPosition::new(7, 7), GridPosition::new(4, 4));
}

#[test]
fn cell_numbering_round_trips() {
    for position in GridPosition::all() {
        assert_eq!(GridPosition::from_cell(position.cell()), position);
    }
    assert_eq!(GridPosition::CENTER.cell(), 12);
    assert_eq!(GridPosition::CENTER.led_index(), 12);
}

#[test]
fn small_layout_reversal_matches_hand_drawn() {
    const WIRED: StripWiring<6, 3, 2> = StripWiring::serpentine().from_far_end();
    assert_eq!(
        WIRED.cells(),
        &[(0, 1), (1, 1), (2, 1), (2, 0), (1, 0), (0, 0)]
    );
    let by_cell: Vec<Option<usize>> = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        .iter()
        .map(|&(col, row)| WIRED.led_for(col, row))
        .collect();
    assert_eq!(by_cell, [Some(5), Some(4), Some(3), Some(0), Some(1), Some(2)]);
}
