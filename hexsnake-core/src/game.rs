//! Game state and tick logic

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, SetupError};
use crate::food::FoodSpawner;
use crate::hex::{Direction, Hex};
use crate::input::{Input, Key};
use crate::snake::Snake;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Initial heading of every fresh snake
pub const START_DIRECTION: Direction = Direction::SouthEast;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Running,
    GameOver,
}

/// What the head ran into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collision {
    Boundary,
    SelfBite,
}

/// Result of one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// No tick fired, or the game is over
    Idle,
    Moved { head: Hex },
    Ate { head: Hex, score: u32 },
    Crashed { at: Hex, collision: Collision },
}

/// Whether the caller's loop should keep going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// ============================================================================
// MOVE CLOCK
// ============================================================================

/// Accumulates frame time and fires once it exceeds the move delay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveClock {
    elapsed: Duration,
}

impl MoveClock {
    /// Returns true when a move is due. Leftover time is dropped on firing.
    pub fn advance(&mut self, dt: Duration, delay: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed > delay {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// A single game. Owns every piece of mutable state; `reset` rebuilds it.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    spawner: FoodSpawner,

    /// Head first
    snake: Snake,

    /// Applied on the next tick
    direction: Direction,

    /// Direction of the last executed move
    heading: Direction,

    food: Option<Hex>,
    score: u32,
    eaten: u32,
    status: Status,
    clock: MoveClock,
    ticks: u64,
    rng: ChaCha8Rng,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game; `seed` makes food placement reproducible
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self::fresh(config, rng))
    }

    fn fresh(config: GameConfig, mut rng: ChaCha8Rng) -> Self {
        let spawner = config.food_spawner();
        let snake = Snake::new(config.board.start_cell());
        let food = spawner.spawn(&snake, &mut rng);
        Self {
            config,
            spawner,
            snake,
            direction: START_DIRECTION,
            heading: START_DIRECTION,
            food,
            score: 0,
            eaten: 0,
            status: Status::Running,
            clock: MoveClock::default(),
            ticks: 0,
            rng,
        }
    }

    /// Replace the snake, e.g. to set up a scenario. Food is re-placed if the
    /// new body covers it.
    pub fn with_snake(mut self, snake: Snake, direction: Direction) -> Result<Self, SetupError> {
        if let Some(cell) = snake.iter().find(|&c| !self.config.board.contains(c)) {
            return Err(SetupError::OutOfBounds(cell));
        }
        self.snake = snake;
        self.direction = direction;
        self.heading = direction;
        if self.food.map_or(true, |f| self.snake.contains(f)) {
            self.food = self.spawner.spawn(&self.snake, &mut self.rng);
        }
        Ok(self)
    }

    /// Place food by hand (`None` clears it)
    pub fn with_food(mut self, food: Option<Hex>) -> Result<Self, SetupError> {
        if let Some(cell) = food {
            if !self.spawner.allows(cell) || self.snake.contains(cell) {
                return Err(SetupError::IllegalFood(cell));
            }
        }
        self.food = food;
        Ok(self)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> Board {
        self.config.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn food(&self) -> Option<Hex> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Foods eaten this game
    pub fn eaten(&self) -> u32 {
        self.eaten
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Ticks executed since the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn clock(&self) -> MoveClock {
        self.clock
    }

    /// Current delay between moves
    pub fn move_delay(&self) -> Duration {
        self.config.pace.delay(self.eaten)
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    /// Would `direction` be accepted right now?
    pub fn can_steer(&self, direction: Direction) -> bool {
        !direction.is_opposite(self.direction)
    }

    /// Request a direction for the next tick. Reversals are ignored.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.is_over() || !self.can_steer(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Start over. Ignored while running unless the config allows it.
    pub fn restart(&mut self) -> bool {
        if !self.is_over() && !self.config.restart_anytime {
            return false;
        }
        self.reset();
        true
    }

    /// Rebuild the initial state from the config. Food uses the running RNG.
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::fresh(self.config.clone(), rng);
        tracing::debug!(food = ?self.food, "game reset");
    }

    pub fn handle(&mut self, input: Input) -> Flow {
        match input {
            Input::Turn(direction) => {
                self.steer(direction);
            }
            Input::Restart => {
                self.restart();
            }
            Input::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Translate a key through the configured key map
    pub fn press(&mut self, key: Key) -> Flow {
        match self.config.key_map.input(key) {
            Some(input) => self.handle(input),
            None => Flow::Continue,
        }
    }

    // ========================================================================
    // TICKS
    // ========================================================================

    /// Feed elapsed frame time; ticks once the move delay has passed
    pub fn update(&mut self, dt: Duration) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Idle;
        }
        let delay = self.move_delay();
        if self.clock.advance(dt, delay) {
            self.tick()
        } else {
            TickOutcome::Idle
        }
    }

    /// Advance the snake one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        let target = self.snake.head() + self.direction;
        if !self.config.board.contains(target) {
            return self.crash(target, Collision::Boundary);
        }
        if !self.snake.push_head(target) {
            return self.crash(target, Collision::SelfBite);
        }
        self.heading = self.direction;

        if self.food == Some(target) {
            self.score += self.config.reward;
            self.eaten += 1;
            self.food = self.spawner.spawn(&self.snake, &mut self.rng);
            match self.food {
                Some(food) => tracing::debug!(%food, score = self.score, "food eaten"),
                None => tracing::warn!(length = self.snake.len(), "no free cell left for food"),
            }
            TickOutcome::Ate {
                head: target,
                score: self.score,
            }
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved { head: target }
        }
    }

    fn crash(&mut self, at: Hex, collision: Collision) -> TickOutcome {
        self.status = Status::GameOver;
        tracing::debug!(%at, ?collision, score = self.score, length = self.snake.len(), "game over");
        TickOutcome::Crashed { at, collision }
    }
}

// ============================================================================
// TESTS
// ============================================================================
