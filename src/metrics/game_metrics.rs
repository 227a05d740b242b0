use std::time::{Duration, Instant};

use crate::game::GameEvent;

/// Per-session statistics. Kept in memory only; nothing survives a restart
/// of the program.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub best_level: u32,
    pub games_played: u32,
    pub food_eaten: u32,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            best_level: 1,
            games_played: 0,
            food_eaten: 0,
            running: true,
        }
    }

    /// Refresh the clock; it stops while the game-over screen is up
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.food_eaten = 0;
        self.running = true;
    }

    pub fn on_events(&mut self, events: &[GameEvent], score: u32) {
        for event in events {
            match event {
                GameEvent::AteFood => self.food_eaten += 1,
                GameEvent::LevelUp { level } => self.best_level = self.best_level.max(*level),
                GameEvent::GameOver(_) => self.on_game_over(score),
            }
        }
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.running = false;
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
