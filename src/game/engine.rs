use log::{debug, info};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IteratorRandom;

use super::{
    action::Direction,
    config::{FoodPlacement, GameConfig},
    fruit::Fruit,
    state::{CollisionType, GameState, Phase, Position, Snake},
};

/// Rejection-sampling attempts before falling back to scanning free cells
const FOOD_SAMPLE_ATTEMPTS: usize = 64;

/// Something the outside world may want to react to (sound, stats)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AteFood,
    LevelUp { level: u32 },
    GameOver(CollisionType),
}

/// Result of advancing one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// The successor state
    pub state: GameState,
    /// Events in the order they happened
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    fn quiet(state: GameState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    pub fn ate_food(&self) -> bool {
        self.events.contains(&GameEvent::AteFood)
    }

    pub fn terminated(&self) -> bool {
        !self.state.is_running()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with an explicit RNG (seeded ones make games replayable)
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Canonical initial state: one segment at the start position heading
    /// right, score 0, level 1, initial speed, fresh food
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.config.start_position);
        let food = self.regenerate_food(&snake);

        let mut state = GameState::new(
            snake,
            Direction::Right,
            food,
            self.config.grid_size,
            self.config.initial_speed_ms,
        );
        state.fruit = Fruit::random(&mut self.rng);

        info!(
            "New game on a {0}x{0} grid, food at ({1}, {2})",
            self.config.grid_size, food.x, food.y
        );
        state
    }

    /// Point the snake in a new direction. Ignored once the game is over.
    pub fn turn(&self, state: &GameState, direction: Direction) -> GameState {
        let mut next = state.clone();
        if state.is_running() {
            next.direction = direction;
        }
        next
    }

    /// Execute one step of the game
    pub fn advance_tick(&mut self, state: &GameState) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome::quiet(state.clone());
        }

        let new_head = state.snake.head().moved_in_direction(state.direction);

        if let Some(collision) = self.check_collision(state, new_head) {
            let mut next = state.clone();
            next.phase = Phase::GameOver(collision);

            info!(
                "Game over ({:?}) at ({}, {}) with score {}",
                collision, new_head.x, new_head.y, state.score
            );
            return TickOutcome {
                state: next,
                events: vec![GameEvent::GameOver(collision)],
            };
        }

        let ate_food = new_head == state.food;
        let mut next = state.clone();
        next.snake = state.snake.advanced(new_head, ate_food);
        next.ticks += 1;

        if !ate_food {
            return TickOutcome::quiet(next);
        }

        let mut events = vec![GameEvent::AteFood];
        next.score += self.config.score_increment;
        next.food = self.regenerate_food(&next.snake);
        next.fruit = Fruit::random(&mut self.rng);
        debug!(
            "Ate food at ({}, {}), score {}, next food at ({}, {})",
            new_head.x, new_head.y, next.score, next.food.x, next.food.y
        );

        let threshold = self.config.level_up_threshold;
        let crossed = match (
            state.score.checked_div(threshold),
            next.score.checked_div(threshold),
        ) {
            (Some(before), Some(after)) => after > before,
            _ => false,
        };
        if crossed && next.level < self.config.max_level {
            next.level += 1;
            next.speed_ms = next
                .speed_ms
                .saturating_sub(self.config.speed_step_ms)
                .max(self.config.min_speed_ms);
            events.push(GameEvent::LevelUp { level: next.level });

            info!("Level {} reached, tick interval {}ms", next.level, next.speed_ms);
        }

        TickOutcome {
            state: next,
            events,
        }
    }

    /// Pick a cell for the next food item according to the placement policy
    pub fn regenerate_food(&mut self, snake: &Snake) -> Position {
        match self.config.food_placement {
            FoodPlacement::Uniform => self.random_cell(),
            FoodPlacement::AvoidSnake => self.spawn_food_avoid_snake(snake),
        }
    }

    /// The pre-move body counts in full, tail included
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.contains(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn random_cell(&mut self) -> Position {
        let size = self.config.grid_size as i32;
        Position::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size))
    }

    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Position {
        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let pos = self.random_cell();
            if !snake.contains(pos) {
                return pos;
            }
        }

        // Crowded board: choose among the free cells directly
        let size = self.config.grid_size as i32;
        let free = (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.contains(*pos));

        match free.choose(&mut self.rng) {
            Some(pos) => pos,
            // The snake fills the whole grid
            None => self.random_cell(),
        }
    }
}
