//! Keyboard mapping

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hex::Direction;

/// Keys the game reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Right,
    Down,
    Left,
    Up,
    E,
    Q,
    R,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key: {0}")]
pub struct ParseKeyError(String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "right" | "d" => Ok(Key::Right),
            "down" | "s" => Ok(Key::Down),
            "left" | "a" => Ok(Key::Left),
            "up" | "w" => Ok(Key::Up),
            "e" => Ok(Key::E),
            "q" => Ok(Key::Q),
            "r" | "restart" => Ok(Key::R),
            "esc" | "escape" | "quit" => Ok(Key::Escape),
            _ => Err(ParseKeyError(s.to_string())),
        }
    }
}

/// What a key press asks the game to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    Restart,
    Quit,
}

/// Key layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMap {
    /// Arrow keys plus `E` (NE) and `Q` (SW)
    #[default]
    Bounded,
    /// Arrow keys only
    Arrows,
}

impl KeyMap {
    pub fn input(&self, key: Key) -> Option<Input> {
        let input = match key {
            Key::Right => Input::Turn(Direction::SouthEast),
            Key::Down => Input::Turn(Direction::South),
            Key::Left => Input::Turn(Direction::NorthWest),
            Key::Up => Input::Turn(Direction::North),
            Key::E if *self == KeyMap::Bounded => Input::Turn(Direction::NorthEast),
            Key::Q if *self == KeyMap::Bounded => Input::Turn(Direction::SouthWest),
            Key::E | Key::Q => return None,
            Key::R => Input::Restart,
            Key::Escape => Input::Quit,
        };
        Some(input)
    }

    /// Help lines shown by the instructions overlay
    pub fn help(&self) -> Vec<&'static str> {
        let mut lines = vec!["Controls:", "Arrow keys: move"];
        if *self == KeyMap::Bounded {
            lines.push("E / Q: diagonals");
        }
        lines.extend(["R: restart", "Esc: quit"]);
        lines
    }
}
