use std::collections::HashSet;

use hebi::apple::AppleSet;
use hebi::config::{GameConfig, GridSize};
use hebi::game::{GameState, RenderSnapshot};
use hebi::input::Direction;
use hebi::snake::{Cell, Snake};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn config(rows: u16, cols: u16, max_apples: usize, seed: u64) -> GameConfig {
    GameConfig {
        rows,
        cols,
        max_apples,
        tick_interval_ms: 100,
        seed: Some(seed),
    }
}

fn assert_consistent(state: &GameState) {
    let bounds = state.bounds();
    let snapshot = state.snapshot();

    let body: HashSet<Cell> = snapshot.body.iter().copied().collect();
    assert_eq!(body.len(), snapshot.body.len(), "body overlaps itself");
    assert!(snapshot.body.iter().all(|cell| cell.is_within_bounds(bounds)));
    for pair in snapshot.body.windows(2) {
        let distance = (pair[0].row - pair[1].row).abs() + (pair[0].col - pair[1].col).abs();
        assert_eq!(distance, 1, "segments {pair:?} are not adjacent");
    }

    let apples: HashSet<Cell> = snapshot.apples.iter().copied().collect();
    assert_eq!(apples.len(), snapshot.apples.len(), "duplicate apple");
    assert!(apples.is_disjoint(&body), "apple under the snake");
    assert!(apples.iter().all(|cell| cell.is_within_bounds(bounds)));

    if !state.is_terminal() {
        let free = bounds.total_cells() - snapshot.body.len();
        assert_eq!(snapshot.apples.len(), state.config().max_apples.min(free));
    }
    assert!(!(snapshot.game_over && snapshot.game_win));
}

#[test]
fn random_play_preserves_board_invariants() {
    for seed in 0..40 {
        let mut state = GameState::new(config(6, 7, 3, seed)).expect("valid grid");
        let mut driver = StdRng::seed_from_u64(seed ^ 0x5eed);
        assert_consistent(&state);

        for _ in 0..400 {
            state.handle_input(DIRECTIONS[driver.gen_range(0..DIRECTIONS.len())]);
            state.update();
            assert_consistent(&state);
            if state.is_terminal() {
                break;
            }
        }
    }
}

#[test]
fn reversing_current_heading_is_ignored() {
    let mut state = GameState::new(config(5, 5, 0, 1)).expect("valid grid");

    state.handle_input(Direction::Left);
    assert_eq!(state.snake.pending_direction(), Direction::Right);

    state.handle_input(Direction::Up);
    state.handle_input(Direction::Down);
    assert_eq!(state.snake.pending_direction(), Direction::Down);

    state.update();
    assert_eq!(state.snake.head(), Cell::new(3, 2));
}

#[test]
fn eating_adds_exactly_one_point_and_one_segment() {
    let mut hungry = GameState::new(config(5, 5, 1, 3)).expect("valid grid");
    let mut idle = hungry.clone();
    hungry.apples = AppleSet::from_cells([Cell::new(2, 3)]);
    idle.apples = AppleSet::from_cells([Cell::new(0, 0)]);

    hungry.update();
    idle.update();

    assert_eq!(hungry.score, idle.score + 1);
    assert_eq!(hungry.snake.len(), idle.snake.len() + 1);
    assert_eq!(hungry.snake.head(), idle.snake.head());
}

#[test]
fn moving_into_vacating_tail_is_legal() {
    let mut state = GameState::new(config(3, 3, 0, 5)).expect("valid grid");
    state.snake = Snake::from_segments(
        vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(1, 0),
        ],
        Direction::Left,
    );

    state.handle_input(Direction::Down);
    state.update();

    assert!(!state.is_over());
    assert_eq!(state.snake.head(), Cell::new(1, 0));
    assert_eq!(state.snake.tail(), Cell::new(1, 1));
}

#[test]
fn moving_into_tail_while_growing_is_fatal() {
    let mut state = GameState::new(config(3, 3, 1, 5)).expect("valid grid");
    state.snake = Snake::from_segments(
        vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(1, 0),
        ],
        Direction::Left,
    );
    // Only reachable with a corrupted board; the growing rule must still hold.
    state.apples = AppleSet::from_cells([Cell::new(1, 0)]);

    state.handle_input(Direction::Down);
    state.update();

    assert!(state.is_over());
}

#[test]
fn reset_with_same_seed_is_reproducible() {
    let config = config(9, 11, 4, 1234);
    let fresh: RenderSnapshot = GameState::new(config).expect("valid grid").snapshot();

    let mut state = GameState::new(config).expect("valid grid");
    for _ in 0..3 {
        state.update();
    }
    state.reset(config).expect("same config stays valid");

    let snapshot = state.snapshot();
    assert_eq!(snapshot, fresh);
    assert_eq!(snapshot.body.len(), 3);
    assert_eq!(snapshot.direction, Direction::Right);
    assert_eq!(snapshot.score, 0);
    assert!(!snapshot.game_over && !snapshot.game_win);
    assert_eq!(snapshot.apples.len(), 4);
}

#[test]
fn tiny_grid_gets_fewer_apples_than_requested() {
    let state = GameState::new_with_seed(GridSize { rows: 1, cols: 5 }, 10, 2)
        .expect("valid grid");

    assert_eq!(state.apples.len(), 2);
}

#[test]
fn invalid_configurations_fail_construction() {
    assert!(GameState::new(config(0, 5, 1, 1)).is_err());
    assert!(GameState::new(config(5, 0, 1, 1)).is_err());
    assert!(GameState::new(config(1, 3, 1, 1)).is_err());

    let mut zero_tick = config(5, 5, 1, 1);
    zero_tick.tick_interval_ms = 0;
    assert!(GameState::new(zero_tick).is_err());
}
