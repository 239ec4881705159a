use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::grid::Grid;
use crate::render::board::{COLUMNS_PER_CELL, ROWS_PER_CELL};

/// Configuration for the game
///
/// One value is built at startup and handed to every component that needs
/// board geometry or timing, so nothing reads global constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in pixels
    pub screen_width: u32,
    /// Board height in pixels
    pub screen_height: u32,
    /// Side length of one grid cell in pixels
    pub grid_size: u32,
    /// Logic updates (snake moves) per second
    pub ticks_per_second: u32,
    /// Upper bound on frames rendered per second
    pub frames_per_second: u32,
    /// Cells in a freshly spawned snake, head included
    pub initial_snake_length: usize,
    /// Gap in pixels left on the right/bottom edge of each drawn segment
    pub cell_inset: u32,
    /// Caps how many owed ticks one frame may run; `None` never clamps
    pub max_catch_up_ticks: Option<u32>,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            grid_size: 20,
            ticks_per_second: 6,
            frames_per_second: 60,
            initial_snake_length: 1,
            cell_inset: 2,
            max_catch_up_ticks: Some(5),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size in pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(200, 200)
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a playable board
    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size > 0, "grid_size must be positive");
        ensure!(
            self.screen_width >= self.grid_size && self.screen_height >= self.grid_size,
            "board {}x{} is smaller than one {}px cell",
            self.screen_width,
            self.screen_height,
            self.grid_size
        );
        let span = |pixels: u32, per_cell: i32| {
            let cells = u64::from(pixels).div_ceil(u64::from(self.grid_size));
            cells * u64::from(per_cell.unsigned_abs())
        };
        ensure!(
            span(self.screen_width, COLUMNS_PER_CELL) <= u64::from(u16::MAX)
                && span(self.screen_height, ROWS_PER_CELL) <= u64::from(u16::MAX),
            "board {}x{} with {}px cells is too large to draw",
            self.screen_width,
            self.screen_height,
            self.grid_size
        );
        ensure!(self.ticks_per_second > 0, "ticks_per_second must be positive");
        ensure!(
            self.frames_per_second > 0,
            "frames_per_second must be positive"
        );
        ensure!(
            self.initial_snake_length > 0,
            "initial_snake_length must be at least 1"
        );
        ensure!(
            self.cell_inset < self.grid_size,
            "cell_inset must be smaller than grid_size"
        );
        if let Some(max) = self.max_catch_up_ticks {
            ensure!(max > 0, "max_catch_up_ticks must be positive when set");
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.screen_width, self.screen_height, self.grid_size)
    }

    /// Logic time consumed by one tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// Minimum wall time between rendered frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.ticks_per_second, 6);
        assert_eq!(config.initial_snake_length, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(400, 300);
        assert_eq!(config.screen_width, 400);
        assert_eq!(config.screen_height, 300);
        assert_eq!(config.grid_size, 20);
    }

    #[test]
    fn test_intervals() {
        let config = GameConfig {
            ticks_per_second: 4,
            frames_per_second: 50,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_grid = GameConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert!(zero_grid.validate().is_err());

        let tiny_board = GameConfig::new(10, 600);
        assert!(tiny_board.validate().is_err());

        let frozen = GameConfig {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert!(frozen.validate().is_err());

        let fat_inset = GameConfig {
            cell_inset: 20,
            ..Default::default()
        };
        assert!(fat_inset.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_board() {
        let wide = GameConfig {
            screen_width: 2_000_000_000,
            screen_height: 20,
            grid_size: 1,
            cell_inset: 0,
            ..Default::default()
        };
        assert!(wide.validate().is_err());

        let past_i32 = GameConfig::new(3_000_000_000, 600);
        assert!(past_i32.validate().is_err());

        // Would truncate to the wrong terminal width
        let truncated = GameConfig {
            screen_width: 200_000,
            grid_size: 1,
            cell_inset: 0,
            ..Default::default()
        };
        assert!(truncated.validate().is_err());

        // Largest board that still fits: 32767 cells * 2 columns
        let widest = GameConfig {
            screen_width: 32_767,
            screen_height: 20,
            grid_size: 1,
            cell_inset: 0,
            ..Default::default()
        };
        assert!(widest.validate().is_ok());
        assert_eq!(
            crate::render::Board::size(&widest.grid()),
            (65_534, 20)
        );
    }

    #[test]
    fn test_load_partial_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "grid_size": 10, "ticks_per_second": 12 }"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.ticks_per_second, 12);
        assert_eq!(config.screen_width, 800);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = GameConfig::load(&temp_dir.path().join("absent.json"));
        assert!(result.is_err());
    }
}
