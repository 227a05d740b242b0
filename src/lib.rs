//! Swipe Snake - a swipe-controlled Snake game for the terminal
//!
//! This library provides:
//! - Core game logic as a pure state reducer (game module)
//! - Keyboard and swipe translation (input module)
//! - Sound cues for game events (audio module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive driver (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
