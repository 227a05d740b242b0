use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::state::Position;

/// Largest grid the terminal renderer can draw (two columns per cell)
pub const MAX_GRID_SIZE: usize = 200;

/// Where regenerated food is allowed to land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlacement {
    /// Resample until the food lands on a cell the snake does not occupy
    #[default]
    AvoidSnake,
    /// Any cell of the grid, including ones under the snake
    Uniform,
}

/// How a horizontal swipe maps onto a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SwipeMapping {
    /// Swiping right turns left and vice versa; only the guards of the
    /// mobile build apply, so a horizontal reversal goes through
    #[default]
    Reference,
    /// Swipe direction equals travel direction and 180-degree turns are ignored
    Natural,
}

/// Difficulty parameters for a session. Fixed once the game starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side of the square grid
    pub grid_size: usize,
    /// Where the single-segment snake starts after a reset
    pub start_position: Position,
    /// Tick interval at level 1
    pub initial_speed_ms: u64,
    /// How much faster each level gets
    pub speed_step_ms: u64,
    /// The tick interval never drops below this
    pub min_speed_ms: u64,
    /// Points per food eaten
    pub score_increment: u32,
    /// A level is gained every time the score reaches or passes a multiple of this
    pub level_up_threshold: u32,
    pub max_level: u32,
    pub food_placement: FoodPlacement,
    pub swipe_mapping: SwipeMapping,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            start_position: Position::new(5, 5),
            initial_speed_ms: 200,
            speed_step_ms: 20,
            min_speed_ms: 50,
            score_increment: 10,
            level_up_threshold: 50,
            max_level: 10,
            food_placement: FoodPlacement::default(),
            swipe_mapping: SwipeMapping::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Read a JSON config file. Missing fields fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .map_err(|e| anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 {
            return Err("grid_size must be positive".to_string());
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(format!(
                "grid_size {} is too large (at most {})",
                self.grid_size, MAX_GRID_SIZE
            ));
        }

        let size = self.grid_size as i32;
        let start = self.start_position;
        if start.x < 0 || start.x >= size || start.y < 0 || start.y >= size {
            return Err(format!(
                "start_position ({}, {}) is outside a {}x{} grid",
                start.x, start.y, size, size
            ));
        }

        if self.min_speed_ms == 0 {
            return Err("min_speed_ms must be positive".to_string());
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(format!(
                "min_speed_ms ({}) must not exceed initial_speed_ms ({})",
                self.min_speed_ms, self.initial_speed_ms
            ));
        }

        if self.score_increment == 0 {
            return Err("score_increment must be positive".to_string());
        }
        if self.level_up_threshold == 0 {
            return Err("level_up_threshold must be positive".to_string());
        }
        if self.max_level == 0 {
            return Err("max_level must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.start_position, Position::new(5, 5));
        assert_eq!(config.initial_speed_ms, 200);
        assert_eq!(config.speed_step_ms, 20);
        assert_eq!(config.min_speed_ms, 50);
        assert_eq!(config.score_increment, 10);
        assert_eq!(config.level_up_threshold, 50);
        assert_eq!(config.max_level, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_grid_size() {
        let config = GameConfig::new(20);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_speed_ms, 200);
    }

    #[test]
    fn test_validation_zero_grid() {
        let config = GameConfig::new(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_grid_upper_bound() {
        assert!(GameConfig::new(MAX_GRID_SIZE).validate().is_ok());

        let err = GameConfig::new(MAX_GRID_SIZE + 1).validate().unwrap_err();
        assert!(err.contains("too large"));
        assert!(GameConfig::new(40000).validate().is_err());
    }

    #[test]
    fn test_validation_start_outside_grid() {
        let config = GameConfig::new(5);
        let err = config.validate().unwrap_err();
        assert!(err.contains("start_position"));
    }

    #[test]
    fn test_validation_speed_floor() {
        let mut config = GameConfig::default();
        config.min_speed_ms = 0;
        assert!(config.validate().is_err());

        config.min_speed_ms = 300;
        assert!(config.validate().is_err());

        config.min_speed_ms = 200;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_scoring() {
        let mut config = GameConfig::default();
        config.score_increment = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.level_up_threshold = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.max_level = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"grid_size": 20, "swipe_mapping": "natural"}"#).unwrap();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.swipe_mapping, SwipeMapping::Natural);
        assert_eq!(config.food_placement, FoodPlacement::AvoidSnake);
        assert_eq!(config.initial_speed_ms, 200);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("swipe_snake_cfg_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"grid_size": 12, "food_placement": "uniform"}"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.food_placement, FoodPlacement::Uniform);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let path = std::env::temp_dir().join(format!("swipe_snake_bad_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"grid_size": 3}"#).unwrap();

        assert!(GameConfig::load(&path).is_err());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("swipe_snake_does_not_exist.json");
        assert!(GameConfig::load(&path).is_err());
    }
}
