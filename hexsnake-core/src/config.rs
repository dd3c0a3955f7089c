//! Game configuration and the two board presets

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ConfigError;
use crate::food::FoodSpawner;
use crate::geometry::Layout;
use crate::input::KeyMap;

/// Largest accepted cols, rows or radius
pub const MAX_BOARD_SPAN: u32 = i16::MAX as u32;

/// Largest accepted number of cells
pub const MAX_BOARD_CELLS: usize = 1 << 20;

/// Window size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub width: u32,
    pub height: u32,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// How long the snake waits between moves
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    /// Constant delay
    Fixed { delay_ms: u64 },
    /// Moves per second, rising by `step` per food eaten, capped at `max_rate`
    Accelerating { start_rate: f32, step: f32, max_rate: f32 },
}

impl Pace {
    /// Delay between moves after `eaten` foods
    pub fn delay(&self, eaten: u32) -> Duration {
        match *self {
            Pace::Fixed { delay_ms } => Duration::from_millis(delay_ms),
            Pace::Accelerating { .. } => Duration::from_secs_f32(1.0 / self.rate(eaten)),
        }
    }

    /// Moves per second after `eaten` foods
    pub fn rate(&self, eaten: u32) -> f32 {
        match *self {
            Pace::Fixed { delay_ms } => 1000.0 / delay_ms as f32,
            Pace::Accelerating { start_rate, step, max_rate } => {
                (start_rate + step * eaten as f32).min(max_rate)
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Pace::Fixed { delay_ms: 0 } => Err(ConfigError::InvalidPace("delay must be positive".into())),
            Pace::Fixed { .. } => Ok(()),
            Pace::Accelerating { start_rate, step, max_rate } => {
                if !(start_rate.is_finite() && start_rate > 0.0) {
                    return Err(ConfigError::InvalidPace(format!("start rate {start_rate}")));
                }
                if !(step.is_finite() && step >= 0.0) {
                    return Err(ConfigError::InvalidPace(format!("step {step}")));
                }
                if !(max_rate.is_finite() && max_rate >= start_rate) {
                    return Err(ConfigError::InvalidPace(format!("max rate {max_rate} below start rate {start_rate}")));
                }
                Ok(())
            }
        }
    }
}

/// Everything needed to build a game
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub name: String,
    pub board: Board,
    /// Hexagon radius in pixels
    pub hex_size: f32,
    pub window: Window,
    /// Points per food
    pub reward: u32,
    pub pace: Pace,
    /// Food only spawns where |q| and |r| are within this bound
    pub food_extent: Option<u32>,
    pub show_grid: bool,
    /// Score and instructions text
    pub show_hud: bool,
    pub key_map: KeyMap,
    /// Restart key also works while the game is running
    pub restart_anytime: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::bounded()
    }
}

impl GameConfig {
    /// 15x15 rectangular board, fixed 150 ms pace
    pub fn bounded() -> Self {
        Self {
            name: "bounded".to_string(),
            board: Board::rect(15, 15),
            hex_size: 20.0,
            window: Window::default(),
            reward: 10,
            pace: Pace::Fixed { delay_ms: 150 },
            food_extent: None,
            show_grid: true,
            show_hud: false,
            key_map: KeyMap::Bounded,
            restart_anytime: false,
        }
    }

    /// Radius-15 board, pace rising from 8 to 15 moves per second
    pub fn radial() -> Self {
        Self {
            name: "radial".to_string(),
            board: Board::radius(15),
            hex_size: 20.0,
            window: Window::default(),
            reward: 10,
            pace: Pace::Accelerating {
                start_rate: 8.0,
                step: 0.1,
                max_rate: 15.0,
            },
            food_extent: Some(10),
            show_grid: false,
            show_hud: true,
            key_map: KeyMap::Arrows,
            restart_anytime: true,
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "bounded" => Ok(Self::bounded()),
            "radial" => Ok(Self::radial()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.board {
            Board::Rect { cols, rows } if cols == 0 || rows == 0 => {
                return Err(ConfigError::EmptyBoard(format!("{cols}x{rows} rectangle")));
            }
            Board::Rect { cols, rows } if cols > MAX_BOARD_SPAN || rows > MAX_BOARD_SPAN => {
                return Err(ConfigError::BoardTooLarge(format!("{cols}x{rows} rectangle")));
            }
            Board::Radius { radius } if radius > MAX_BOARD_SPAN => {
                return Err(ConfigError::BoardTooLarge(format!("radius {radius}")));
            }
            _ => {}
        }
        if self.board.cell_count() > MAX_BOARD_CELLS {
            return Err(ConfigError::BoardTooLarge(format!(
                "{} cells, at most {MAX_BOARD_CELLS} allowed",
                self.board.cell_count()
            )));
        }
        if !(self.hex_size.is_finite() && self.hex_size > 0.0) {
            return Err(ConfigError::InvalidHexSize(self.hex_size));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidWindow {
                width: self.window.width,
                height: self.window.height,
            });
        }
        self.pace.validate()?;
        if self.food_spawner().region_size() == 0 {
            let region = match self.food_extent {
                Some(extent) => format!("food extent {extent}"),
                None => "whole board".to_string(),
            };
            return Err(ConfigError::EmptyFoodRegion(region));
        }
        Ok(())
    }

    pub fn food_spawner(&self) -> FoodSpawner {
        FoodSpawner::new(self.board, self.food_extent)
    }

    /// Pixel layout centering the board in the window
    pub fn layout(&self) -> Layout {
        Layout::centered(&self.board, self.hex_size, self.window)
    }

    /// Load from JSON file and validate
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
