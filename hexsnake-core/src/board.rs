//! Board boundary policies

use serde::{Deserialize, Serialize};

use crate::hex::{hex_distance, hexes_in_range, span, Hex};

/// Legal region of the playing field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Board {
    /// Cells with 0 <= q < cols and 0 <= r < rows
    Rect { cols: u32, rows: u32 },
    /// Cells within `radius` steps of the origin
    Radius { radius: u32 },
}

impl Board {
    pub const fn rect(cols: u32, rows: u32) -> Self {
        Board::Rect { cols, rows }
    }

    pub const fn radius(radius: u32) -> Self {
        Board::Radius { radius }
    }

    /// Check if this hex is on the board
    pub fn contains(&self, hex: Hex) -> bool {
        match *self {
            Board::Rect { cols, rows } => {
                hex.q >= 0 && hex.r >= 0 && (hex.q as u32) < cols && (hex.r as u32) < rows
            }
            Board::Radius { radius } => hex_distance(Hex::ORIGIN, hex) <= radius,
        }
    }

    /// Where a fresh snake starts
    pub fn start_cell(&self) -> Hex {
        match *self {
            Board::Rect { cols, rows } => Hex::new(span(cols / 2), span(rows / 2)),
            Board::Radius { .. } => Hex::ORIGIN,
        }
    }

    pub fn cell_count(&self) -> usize {
        match *self {
            Board::Rect { cols, rows } => (cols as usize).saturating_mul(rows as usize),
            Board::Radius { radius } => {
                let r = radius as usize;
                r.saturating_mul(r.saturating_add(1)).saturating_mul(3).saturating_add(1)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Every cell on the board. Rect boards are listed column by column.
    pub fn cells(&self) -> Vec<Hex> {
        match *self {
            Board::Rect { cols, rows } => (0..span(cols))
                .flat_map(move |q| (0..span(rows)).map(move |r| Hex::new(q, r)))
                .collect(),
            Board::Radius { radius } => hexes_in_range(Hex::ORIGIN, radius).collect(),
        }
    }

    /// Inclusive (q, r) bounding box of the board
    pub fn bounds(&self) -> (Hex, Hex) {
        match *self {
            Board::Rect { cols, rows } => (
                Hex::new(0, 0),
                Hex::new(span(cols) - 1, span(rows) - 1),
            ),
            Board::Radius { radius } => {
                let r = span(radius);
                (Hex::new(-r, -r), Hex::new(r, r))
            }
        }
    }
}
