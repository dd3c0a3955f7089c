//! HEXSNAKE Core - Game engine
//!
//! This crate provides the core logic for Snake on a hex grid:
//! - Hex coordinates (axial), directions and distance
//! - Pixel geometry for flat-topped hexes
//! - Board boundaries (rectangle or radius) and food placement
//! - Game state and tick logic
//! - Frame draw lists for an external renderer
//! - A greedy autopilot for headless runs

pub mod hex;
pub mod geometry;
pub mod board;
pub mod snake;
pub mod food;
pub mod input;
pub mod config;
pub mod error;
pub mod game;
pub mod scene;
pub mod autopilot;

// Re-exports for convenient access
pub use hex::{hex_distance, neighbors, Direction, Hex, DIRECTIONS};
pub use geometry::{axial_to_pixel, hex_corners, pixel_to_axial, Layout, Point};
pub use board::Board;
pub use snake::Snake;
pub use food::FoodSpawner;
pub use input::{Input, Key, KeyMap};
pub use config::{GameConfig, Pace, Window};
pub use error::{ConfigError, SetupError};
pub use game::{Collision, Flow, GameState, MoveClock, Status, TickOutcome, START_DIRECTION};
pub use scene::{Fill, Scene};
pub use autopilot::{Autopilot, RunSummary};
