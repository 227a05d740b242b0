use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::game::{Direction, SwipeMapping};

use super::swipe::{Point, SwipeTracker};

/// Terminal cells are about twice as tall as they are wide
const ROW_ASPECT: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Direction from a key press; reversal filtering is up to the caller
    Key(Direction),
    /// Direction already accepted by the swipe classifier
    Swipe(Direction),
    Restart,
    Quit,
    None,
}

pub struct InputHandler {
    mapping: SwipeMapping,
    tracker: SwipeTracker,
}

impl InputHandler {
    pub fn new(mapping: SwipeMapping) -> Self {
        Self {
            mapping,
            tracker: SwipeTracker::new(),
        }
    }

    pub fn handle_event(&mut self, event: &Event, current: Direction) -> InputAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(*key),
            Event::Mouse(mouse) => self.handle_mouse_event(*mouse, current),
            _ => InputAction::None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                InputAction::Key(Direction::Up)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                InputAction::Key(Direction::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                InputAction::Key(Direction::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                InputAction::Key(Direction::Right)
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => InputAction::Restart,

            _ => InputAction::None,
        }
    }

    /// A left-button press starts a swipe and the release ends it
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, current: Direction) -> InputAction {
        let at = Point::new(mouse.column as i32, mouse.row as i32 * ROW_ASPECT);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.tracker.press(at);
                InputAction::None
            }
            MouseEventKind::Up(MouseButton::Left) => self
                .tracker
                .release(at, current, self.mapping)
                .map(InputAction::Swipe)
                .unwrap_or(InputAction::None),
            _ => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(SwipeMapping::default())
    }
}
