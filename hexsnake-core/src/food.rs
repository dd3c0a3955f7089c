//! Food placement
//!
//! Small or crowded regions are enumerated and sampled uniformly. Large sparse
//! regions use rejection sampling with a bounded number of attempts, falling
//! back to enumeration.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::hex::{span, Hex};
use crate::snake::Snake;

/// Regions with at most this many cells are always enumerated
const ENUMERATE_LIMIT: usize = 4096;

/// Misses allowed before rejection sampling gives up
const MAX_REJECTIONS: usize = 64;

/// Picks food cells inside the board, optionally restricted to a square
/// `|q| <= extent && |r| <= extent` around the origin
#[derive(Clone, Debug)]
pub struct FoodSpawner {
    board: Board,
    extent: Option<u32>,
    lo: Hex,
    hi: Hex,
    region_size: usize,
}

impl FoodSpawner {
    pub fn new(board: Board, extent: Option<u32>) -> Self {
        let (mut lo, mut hi) = board.bounds();
        if let Some(e) = extent {
            let e = span(e);
            lo = Hex::new(lo.q.max(-e), lo.r.max(-e));
            hi = Hex::new(hi.q.min(e), hi.r.min(e));
        }

        let mut spawner = Self {
            board,
            extent,
            lo,
            hi,
            region_size: 0,
        };
        spawner.region_size = spawner.candidates().count();
        spawner
    }

    /// Number of cells food may ever occupy
    pub fn region_size(&self) -> usize {
        self.region_size
    }

    /// Check if food may be placed on this hex (ignoring the snake)
    pub fn allows(&self, hex: Hex) -> bool {
        let in_extent = match self.extent {
            Some(e) => hex.q.unsigned_abs() <= e && hex.r.unsigned_abs() <= e,
            None => true,
        };
        in_extent && self.board.contains(hex)
    }

    /// Every cell in the food region
    pub fn candidates(&self) -> impl Iterator<Item = Hex> + '_ {
        (self.lo.q..=self.hi.q)
            .flat_map(move |q| (self.lo.r..=self.hi.r).map(move |r| Hex::new(q, r)))
            .filter(move |&hex| self.allows(hex))
    }

    /// Choose a free cell, or `None` if the region is full
    pub fn spawn<R: Rng + ?Sized>(&self, snake: &Snake, rng: &mut R) -> Option<Hex> {
        let free = self.region_size.saturating_sub(snake.len());
        let sparse = free * 2 >= self.region_size;

        if self.region_size > ENUMERATE_LIMIT && sparse {
            if let Some(hex) = self.spawn_rejection(snake, rng) {
                return Some(hex);
            }
        }
        self.spawn_enumerated(snake, rng)
    }

    fn spawn_enumerated<R: Rng + ?Sized>(&self, snake: &Snake, rng: &mut R) -> Option<Hex> {
        let free: Vec<Hex> = self.candidates().filter(|&hex| !snake.contains(hex)).collect();
        free.choose(rng).copied()
    }

    fn spawn_rejection<R: Rng + ?Sized>(&self, snake: &Snake, rng: &mut R) -> Option<Hex> {
        (0..MAX_REJECTIONS)
            .map(|_| Hex::new(rng.gen_range(self.lo.q..=self.hi.q), rng.gen_range(self.lo.r..=self.hi.r)))
            .find(|&hex| self.allows(hex) && !snake.contains(hex))
    }
}
