use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::fruit::Fruit;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    pub fn manhattan_distance(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// The snake's body, head first, tail last. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// A single-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first. Returns None for an
    /// empty body, a repeated cell, or neighbours that are not one step apart.
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        let adjacent = segments
            .windows(2)
            .all(|pair| pair[0].manhattan_distance(pair[1]) == 1);
        let unique = segments
            .iter()
            .enumerate()
            .all(|(i, pos)| !segments[i + 1..].contains(pos));

        if adjacent && unique {
            Some(Self { body: segments })
        } else {
            None
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// New snake with `head` prepended; the tail is kept only when growing
    pub fn advanced(&self, head: Position, grow: bool) -> Self {
        let keep = if grow {
            self.body.len()
        } else {
            self.body.len() - 1
        };

        let mut body = Vec::with_capacity(keep + 1);
        body.push(head);
        body.extend_from_slice(&self.body[..keep]);
        Self { body }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; the body holds at least the head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why the snake died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    Wall,
    SelfCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver(CollisionType),
}

/// Complete game state. Each tick produces a fresh record; drivers replace
/// the one they hold instead of editing fields in place.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Position,
    pub fruit: Fruit,
    pub grid_size: usize,
    pub score: u32,
    pub level: u32,
    pub speed_ms: u64,
    pub ticks: u32,
    pub phase: Phase,
}

impl GameState {
    /// A running state at score 0, level 1
    pub fn new(
        snake: Snake,
        direction: Direction,
        food: Position,
        grid_size: usize,
        speed_ms: u64,
    ) -> Self {
        Self {
            snake,
            direction,
            food,
            fruit: Fruit::RedApple,
            grid_size,
            score: 0,
            level: 1,
            speed_ms,
            ticks: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn collision(&self) -> Option<CollisionType> {
        match self.phase {
            Phase::Running => None,
            Phase::GameOver(collision) => Some(collision),
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let size = self.grid_size as i32;
        pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}
