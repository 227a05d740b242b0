pub mod handler;
pub mod swipe;

pub use handler::{InputAction, InputHandler};
pub use swipe::{Point, SwipeTracker, classify_swipe};
