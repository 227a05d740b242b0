//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! States are plain values: the engine reads one and hands back its successor.

pub mod action;
pub mod config;
pub mod engine;
pub mod fruit;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{FoodPlacement, GameConfig, SwipeMapping};
pub use engine::{GameEngine, GameEvent, TickOutcome};
pub use fruit::Fruit;
pub use state::{CollisionType, GameState, Phase, Position, Snake};
