//! Snake body: ordered cells plus an occupancy index

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::error::SetupError;
use crate::hex::Hex;

/// Occupied cells, head first. Never empty, never repeats a cell.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Hex>,
    occupied: FxHashSet<Hex>,
}

impl Snake {
    /// Single-cell snake
    pub fn new(start: Hex) -> Self {
        let mut occupied = FxHashSet::default();
        occupied.insert(start);
        Self {
            body: VecDeque::from([start]),
            occupied,
        }
    }

    /// Snake from cells listed head first
    pub fn from_cells(cells: impl IntoIterator<Item = Hex>) -> Result<Self, SetupError> {
        let mut body = VecDeque::new();
        let mut occupied = FxHashSet::default();
        for cell in cells {
            if !occupied.insert(cell) {
                return Err(SetupError::DuplicateCell(cell));
            }
            body.push_back(cell);
        }
        if body.is_empty() {
            return Err(SetupError::EmptySnake);
        }
        Ok(Self { body, occupied })
    }

    pub fn head(&self) -> Hex {
        self.body[0]
    }

    pub fn tail(&self) -> Hex {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.occupied.contains(&hex)
    }

    /// Cells head first
    pub fn iter(&self) -> impl Iterator<Item = Hex> + '_ {
        self.body.iter().copied()
    }

    pub fn cells(&self) -> Vec<Hex> {
        self.iter().collect()
    }

    /// Prepend a new head. Refuses (returns false) if the cell is occupied.
    pub fn push_head(&mut self, hex: Hex) -> bool {
        if !self.occupied.insert(hex) {
            return false;
        }
        self.body.push_front(hex);
        true
    }

    /// Drop the last cell. The final remaining cell is never removed.
    pub fn pop_tail(&mut self) -> Option<Hex> {
        if self.body.len() <= 1 {
            return None;
        }
        let tail = self.body.pop_back()?;
        self.occupied.remove(&tail);
        Some(tail)
    }
}

impl PartialEq for Snake {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

impl Eq for Snake {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(Hex::new(7, 7));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Hex::new(7, 7));
        assert_eq!(snake.tail(), Hex::new(7, 7));
        assert!(snake.contains(Hex::new(7, 7)));
    }

    #[test]
    fn test_from_cells() {
        let snake = Snake::from_cells([Hex::new(2, 2), Hex::new(1, 2)]).unwrap();
        assert_eq!(snake.head(), Hex::new(2, 2));
        assert_eq!(snake.tail(), Hex::new(1, 2));

        assert_eq!(Snake::from_cells([]), Err(SetupError::EmptySnake));
        assert_eq!(
            Snake::from_cells([Hex::new(0, 0), Hex::new(1, 0), Hex::new(0, 0)]),
            Err(SetupError::DuplicateCell(Hex::new(0, 0)))
        );
    }

    #[test]
    fn test_index_follows_body() {
        let mut snake = Snake::new(Hex::new(0, 0));
        assert!(snake.push_head(Hex::new(1, 0)));
        assert!(snake.push_head(Hex::new(2, 0)));
        assert!(!snake.push_head(Hex::new(1, 0)));
        assert_eq!(snake.len(), 3);

        assert_eq!(snake.pop_tail(), Some(Hex::new(0, 0)));
        assert!(!snake.contains(Hex::new(0, 0)));
        assert_eq!(snake.cells(), vec![Hex::new(2, 0), Hex::new(1, 0)]);

        assert_eq!(snake.pop_tail(), Some(Hex::new(1, 0)));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
        assert!(snake.contains(Hex::new(2, 0)));
    }
}
