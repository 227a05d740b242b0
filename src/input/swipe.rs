//! Swipe classification: turns a press/release pair of screen points into a
//! direction change.

use crate::game::{Direction, SwipeMapping};

/// A point in screen space (terminal column/row for mouse input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Classify the swipe from `start` to `end` given the current heading.
///
/// Returns `None` when the gesture is a no-op: no movement, or a guard
/// rejected the new direction.
pub fn classify_swipe(
    start: Point,
    end: Point,
    current: Direction,
    mapping: SwipeMapping,
) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    match mapping {
        SwipeMapping::Reference => reference_swipe(dx, dy, current),
        SwipeMapping::Natural => natural_swipe(dx, dy, current),
    }
}

// Horizontal swipes are mirrored. The horizontal guards only stop re-setting
// the value already held, so Right -> Left is allowed; the vertical guards do
// block reversals.
fn reference_swipe(dx: i32, dy: i32, current: Direction) -> Option<Direction> {
    if dx.unsigned_abs() > dy.unsigned_abs() {
        if dx > 0 && current != Direction::Left {
            Some(Direction::Left)
        } else if dx < 0 && current != Direction::Right {
            Some(Direction::Right)
        } else {
            None
        }
    } else if dy > 0 && current != Direction::Up {
        Some(Direction::Down)
    } else if dy < 0 && current != Direction::Down {
        Some(Direction::Up)
    } else {
        None
    }
}

fn natural_swipe(dx: i32, dy: i32, current: Direction) -> Option<Direction> {
    let candidate = if dx.unsigned_abs() > dy.unsigned_abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Down
    } else if dy < 0 {
        Direction::Up
    } else {
        return None;
    };

    if candidate == current || current.is_opposite(candidate) {
        None
    } else {
        Some(candidate)
    }
}

/// Remembers where a press started until the matching release arrives
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Finish the gesture. A release without a press is ignored.
    pub fn release(
        &mut self,
        at: Point,
        current: Direction,
        mapping: SwipeMapping,
    ) -> Option<Direction> {
        let start = self.start.take()?;
        classify_swipe(start, at, current, mapping)
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
