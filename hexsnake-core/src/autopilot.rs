//! Greedy steering for headless runs

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::game::{Collision, GameState, TickOutcome};
use crate::hex::{Direction, Hex};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Noise added to move scores so ties break randomly
const NOISE_SCALE: f32 = 0.01;

/// Subtracted from moves into a cell with no way out
const DEAD_END_PENALTY: f32 = 1000.0;

/// Per free neighbor of the target cell
const EXIT_BONUS: f32 = 0.25;

// ============================================================================
// AUTOPILOT
// ============================================================================

/// How a finished (or capped) run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u32,
    pub eaten: u32,
    pub length: usize,
    pub ticks: u64,
    /// `None` if the tick cap was reached first
    pub collision: Option<Collision>,
}

/// Heads for the food while avoiding walls, its own body and dead ends
pub struct Autopilot {
    rng: ChaCha8Rng,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Best direction for the next tick, or `None` if every move crashes
    pub fn choose(&mut self, state: &GameState) -> Option<Direction> {
        let mut best: Option<(Direction, f32)> = None;
        for dir in Direction::ALL {
            if !state.can_steer(dir) {
                continue;
            }
            let Some(score) = move_score(state, dir) else {
                continue;
            };
            let score = score + self.rng.gen::<f32>() * NOISE_SCALE;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((dir, score));
            }
        }
        best.map(|(dir, _)| dir)
    }

    /// Drive `state` until it ends or `max_ticks` ticks have run
    pub fn play_game(&mut self, state: &mut GameState, max_ticks: u64) -> RunSummary {
        let mut collision = None;
        while !state.is_over() && state.ticks() < max_ticks {
            if let Some(dir) = self.choose(state) {
                state.steer(dir);
            }
            if let TickOutcome::Crashed { collision: c, .. } = state.tick() {
                collision = Some(c);
            }
        }

        RunSummary {
            score: state.score(),
            eaten: state.eaten(),
            length: state.snake().len(),
            ticks: state.ticks(),
            collision,
        }
    }
}

// ============================================================================
// MOVE SCORING
// ============================================================================

/// Score a move (higher = better); `None` if it ends the game
fn move_score(state: &GameState, dir: Direction) -> Option<f32> {
    let target = state.snake().head() + dir;
    if !is_free(state, target) {
        return None;
    }

    let mut score = match state.food() {
        Some(food) => -(target.distance_to(food) as f32),
        None => 0.0,
    };

    let exits = target
        .neighbors()
        .into_iter()
        .filter(|&n| n != state.snake().head() && is_free(state, n))
        .count();
    if exits == 0 {
        score -= DEAD_END_PENALTY;
    }
    score += exits as f32 * EXIT_BONUS;

    Some(score)
}

fn is_free(state: &GameState, hex: Hex) -> bool {
    state.board().contains(hex) && !state.snake().contains(hex)
}
