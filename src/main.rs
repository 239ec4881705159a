use anyhow::{Context, Result};
use clap::Parser;
use snake_classic::game::GameConfig;
use snake_classic::modes::PlayMode;
use snake_classic::scores::HighScores;
use snake_classic::sound::TerminalBell;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_classic")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Board height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Grid cell size in pixels
    #[arg(long)]
    grid_size: Option<u32>,

    /// Snake moves per second
    #[arg(long)]
    speed: Option<u32>,

    /// Frame rate cap
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// High score file
    #[arg(long, default_value = "data/high_scores.json")]
    scores: PathBuf,

    /// Log file (the terminal is taken by the game)
    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(speed) = self.speed {
            config.ticks_per_second = speed;
        }
        if let Some(fps) = self.fps {
            config.frames_per_second = fps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = cli.game_config()?;
    tracing::info!(?config, "starting");

    let high_scores = HighScores::load(&cli.scores);
    let mut play_mode = PlayMode::new(config, high_scores, TerminalBell::new(std::io::stderr()));
    play_mode.run().await?;

    Ok(())
}
