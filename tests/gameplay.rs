//! Whole-game properties of the engine, driven with seeded RNGs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swipe_snake::game::{
    CollisionType, Direction, GameConfig, GameEngine, GameEvent, GameState, Position, Snake,
};

fn engine(seed: u64) -> GameEngine<StdRng> {
    GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(seed))
}

fn assert_contiguous(state: &GameState) {
    for pair in state.snake.segments().windows(2) {
        assert_eq!(
            pair[0].manhattan_distance(pair[1]),
            1,
            "segments {:?} and {:?} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

fn assert_no_overlap(state: &GameState) {
    let segments = state.snake.segments();
    for (i, a) in segments.iter().enumerate() {
        assert!(!segments[i + 1..].contains(a), "segment {:?} repeats", a);
    }
}

#[test]
fn random_play_keeps_body_invariants() {
    for seed in 0..20 {
        let mut engine = engine(seed);
        let mut steer = StdRng::seed_from_u64(seed + 1000);
        let mut state = engine.reset();

        for _ in 0..500 {
            if steer.gen_bool(0.3) {
                let dir = Direction::ALL[steer.gen_range(0..4)];
                state = engine.turn(&state, dir);
            }

            let before = state.snake.len();
            let outcome = engine.advance_tick(&state);
            let after = outcome.state.snake.len();

            if outcome.ate_food() {
                assert_eq!(after, before + 1);
            } else {
                assert_eq!(after, before);
            }

            state = outcome.state;
            if !state.is_running() {
                break;
            }
            assert_contiguous(&state);
            assert_no_overlap(&state);
            assert!(state.is_in_bounds(state.snake.head()));
        }
    }
}

#[test]
fn feeding_in_a_straight_line_levels_up_and_speeds_up() {
    let mut engine = engine(3);
    let mut state = GameState::new(
        Snake::new(Position::new(0, 7)),
        Direction::Right,
        Position::new(1, 7),
        15,
        200,
    );
    let mut level_ups = Vec::new();

    for _ in 0..10 {
        // Always put the food right in front of the head
        state.food = state.snake.head().moved_in_direction(state.direction);
        let outcome = engine.advance_tick(&state);

        assert!(outcome.ate_food());
        for event in &outcome.events {
            if let GameEvent::LevelUp { level } = event {
                level_ups.push(*level);
            }
        }
        state = outcome.state;
    }

    assert!(state.is_running());
    assert_eq!(state.snake.len(), 11);
    assert_eq!(state.snake.head(), Position::new(10, 7));
    assert_eq!(state.score, 100);
    assert_eq!(level_ups, vec![2, 3]);
    assert_eq!(state.level, 3);
    assert_eq!(state.speed_ms, 160);
    assert_contiguous(&state);
}

#[test]
fn single_step_right() {
    let mut engine = engine(1);
    let state = GameState::new(
        Snake::new(Position::new(5, 5)),
        Direction::Right,
        Position::new(10, 10),
        15,
        200,
    );

    let outcome = engine.advance_tick(&state);

    assert_eq!(outcome.state.snake.segments(), &[Position::new(6, 5)]);
    assert_eq!(outcome.state.food, Position::new(10, 10));
    assert!(outcome.events.is_empty());
}

#[test]
fn eating_grows_scores_and_moves_food() {
    let mut engine = engine(2);
    let state = GameState::new(
        Snake::new(Position::new(9, 10)),
        Direction::Right,
        Position::new(10, 10),
        15,
        200,
    );

    let outcome = engine.advance_tick(&state);

    assert_eq!(outcome.state.snake.len(), 2);
    assert_eq!(outcome.state.score, 10);
    assert_ne!(outcome.state.food, Position::new(10, 10));
    assert_eq!(outcome.events, vec![GameEvent::AteFood]);
}

#[test]
fn leaving_the_grid_ends_the_game() {
    let mut engine = engine(3);
    let state = GameState::new(
        Snake::new(Position::new(0, 5)),
        Direction::Left,
        Position::new(10, 10),
        15,
        200,
    );

    let outcome = engine.advance_tick(&state);

    assert_eq!(outcome.state.collision(), Some(CollisionType::Wall));
    assert_eq!(outcome.state.snake, state.snake);
    assert_eq!(
        outcome.events,
        vec![GameEvent::GameOver(CollisionType::Wall)]
    );

    // Frozen from here on
    let again = engine.advance_tick(&outcome.state);
    assert!(again.events.is_empty());
    assert_eq!(again.state, outcome.state);
    assert_eq!(engine.turn(&outcome.state, Direction::Up), outcome.state);
}

#[test]
fn reset_is_canonical() {
    let mut engine = engine(4);
    let first = engine.reset();
    let second = engine.reset();

    assert_eq!(first.snake, second.snake);
    assert_eq!(first.direction, second.direction);
    assert_eq!(first.score, second.score);
    assert_eq!(first.level, second.level);
    assert_eq!(first.speed_ms, second.speed_ms);
    assert_eq!(first.phase, second.phase);
    assert_eq!(first.ticks, 0);
    assert_eq!(second.ticks, 0);
}

#[test]
fn reset_recovers_from_game_over() {
    let mut engine = engine(5);
    let mut state = engine.reset();
    state = engine.turn(&state, Direction::Up);

    while state.is_running() {
        state = engine.advance_tick(&state).state;
    }

    let fresh = engine.reset();
    assert!(fresh.is_running());
    assert_eq!(fresh.snake.segments(), &[Position::new(5, 5)]);
}
