//! Error types for configuration and scenario setup

use crate::hex::Hex;

/// Rejected `GameConfig`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("board has no cells: {0}")]
    EmptyBoard(String),

    #[error("hex size must be finite and positive, got {0}")]
    InvalidHexSize(f32),

    #[error("window must be non-empty, got {width}x{height}")]
    InvalidWindow { width: u32, height: u32 },

    #[error("invalid pace: {0}")]
    InvalidPace(String),

    #[error("board too large: {0}")]
    BoardTooLarge(String),

    #[error("no cell on the board can hold food ({0})")]
    EmptyFoodRegion(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Rejected snake/food placement when setting up a scenario
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("snake needs at least one cell")]
    EmptySnake,

    #[error("snake cell {0} appears more than once")]
    DuplicateCell(Hex),

    #[error("snake cell {0} lies outside the board")]
    OutOfBounds(Hex),

    #[error("{0} is not a legal food cell")]
    IllegalFood(Hex),
}
