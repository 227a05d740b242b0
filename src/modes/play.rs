use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};

use crate::audio::AudioSignaler;
use crate::game::{Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputAction, InputHandler};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Redraw at roughly 30 FPS, independent of the game speed
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: AudioSignaler,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, audio: AudioSignaler) -> Self {
        let input_handler = InputHandler::new(config.swipe_mapping);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler,
            audio,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "Session over: {} games, high score {}",
            self.metrics.games_played, self.metrics.high_score
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_period = self.state.tick_interval();
        let mut tick_timer = new_tick_timer(tick_period);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(event) = maybe_event {
                        let event = event.context("Failed to read terminal event")?;
                        self.handle_event(&event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // Level-ups and resets change the tick rate
            if self.state.tick_interval() != tick_period {
                tick_period = self.state.tick_interval();
                tick_timer = new_tick_timer(tick_period);
                debug!("Tick interval now {:?}", tick_period);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        match self.input_handler.handle_event(event, self.state.direction) {
            InputAction::Key(direction) => self.steer_by_key(direction),
            InputAction::Swipe(direction) => {
                self.state = self.engine.turn(&self.state, direction);
            }
            InputAction::Restart => {
                // Restarting is only offered on the game-over screen
                if !self.state.is_running() {
                    self.reset_game();
                }
            }
            InputAction::Quit => {
                self.should_quit = true;
            }
            InputAction::None => {}
        }
    }

    /// Keys never reverse the snake onto itself
    fn steer_by_key(&mut self, direction: Direction) {
        if !self.state.direction.is_opposite(direction) {
            self.state = self.engine.turn(&self.state, direction);
        }
    }

    fn update_game(&mut self) {
        if !self.state.is_running() {
            return;
        }

        let outcome = self.engine.advance_tick(&self.state);
        self.audio.on_events(&outcome.events);
        self.metrics.on_events(&outcome.events, outcome.state.score);
        self.state = outcome.state;
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// First tick one full period from now, so a fresh speed is felt right away
fn new_tick_timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Phase, Position};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = PlayMode::new(GameConfig::default(), AudioSignaler::silent());
        assert!(mode.state.is_running());
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.snake.head(), Position::new(5, 5));
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut mode = PlayMode::new(GameConfig::default(), AudioSignaler::silent());
        mode.state.score = 30;

        mode.handle_event(&key(KeyCode::Char('r')));
        assert_eq!(mode.state.score, 30);

        mode.state.phase = Phase::GameOver(CollisionType::Wall);
        mode.handle_event(&key(KeyCode::Char('r')));
        assert_eq!(mode.state.score, 0);
        assert!(mode.state.is_running());
    }

    #[test]
    fn test_key_reversal_ignored() {
        let mut mode = PlayMode::new(GameConfig::default(), AudioSignaler::silent());

        mode.handle_event(&key(KeyCode::Left));
        assert_eq!(mode.state.direction, Direction::Right);

        mode.handle_event(&key(KeyCode::Up));
        assert_eq!(mode.state.direction, Direction::Up);
    }

    #[test]
    fn test_ticks_stop_after_game_over() {
        let mut mode = PlayMode::new(GameConfig::default(), AudioSignaler::silent());
        mode.handle_event(&key(KeyCode::Up));

        // (5,5) heading up dies after six moves
        for _ in 0..10 {
            mode.update_game();
        }

        assert_eq!(mode.state.collision(), Some(CollisionType::Wall));
        assert_eq!(mode.metrics.games_played, 1);
        let frozen = mode.state.clone();
        mode.update_game();
        assert_eq!(mode.state, frozen);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = PlayMode::new(GameConfig::default(), AudioSignaler::silent());
        mode.handle_event(&key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }
}
