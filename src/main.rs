use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{LevelFilter, info};
use swipe_snake::audio::{AudioSignaler, BellPlayer};
use swipe_snake::game::{FoodPlacement, GameConfig, SwipeMapping};
use swipe_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "swipe_snake")]
#[command(version, about = "Swipe-controlled Snake for the terminal")]
struct Cli {
    /// JSON file with difficulty parameters; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side of the square grid
    #[arg(long)]
    grid_size: Option<usize>,

    /// Starting tick interval in milliseconds
    #[arg(long)]
    speed: Option<u64>,

    /// Where new food may appear
    #[arg(long, value_enum)]
    food_placement: Option<FoodPlacement>,

    /// How horizontal swipes map to directions
    #[arg(long, value_enum)]
    swipe_mapping: Option<SwipeMapping>,

    /// Disable the terminal bell cues
    #[arg(long)]
    mute: bool,

    /// Write logs here (the game owns the terminal, so logs are off without it)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(speed) = self.speed {
            config.initial_speed_ms = speed;
        }
        if let Some(food_placement) = self.food_placement {
            config.food_placement = food_placement;
        }
        if let Some(swipe_mapping) = self.swipe_mapping {
            config.swipe_mapping = swipe_mapping;
        }

        config
            .validate()
            .map_err(|e| anyhow!("Invalid game configuration: {}", e))?;
        Ok(config)
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .filter_level(LevelFilter::Info)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = cli.game_config()?;
    info!("Starting with {:?}", config);

    let audio = if cli.mute {
        AudioSignaler::silent()
    } else {
        AudioSignaler::new(Box::new(BellPlayer::stdout()))
    };

    let mut play_mode = PlayMode::new(config, audio);
    play_mode.run().await?;

    Ok(())
}
