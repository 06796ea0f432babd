use core::fmt;

use crate::apple::place_apple;
use crate::autopilot;
use crate::config::{CELL_COUNT, IDLE_TICK_MS, RUNNING_TICK_MS};
use crate::coordinate::Coordinate;
use crate::direction::{Direction, Turn};
use crate::snake::Snake;
use crate::traits::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The snake tried to grow with every cell already occupied
    BodyFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Autopilot demo, waiting for the start chord
    Idle,
    /// A fresh round is being set up, ticks do nothing
    Starting,
    /// The player is steering
    Running,
}

/// How a round ended, reported only for rounds the player was steering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundSummary {
    /// Body length just before the crash
    pub score: usize,
}

impl RoundSummary {
    pub fn won(&self) -> bool {
        self.score == CELL_COUNT
    }
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.won() {
            f.write_str("YouWin! ")?;
        }
        write!(f, "Score:{}", self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Round setup in progress, nothing happened
    Skipped,
    /// The snake moved one cell, eating the apple if `ate`
    Moved { ate: bool },
    /// Wall or body hit. The board has already been reset to the idle demo.
    Crashed(Option<RoundSummary>),
}

pub struct Game<R> {
    snake: Snake,
    apple: Option<Coordinate>,
    state: GameState,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    pub fn new(mut rng: R) -> Self {
        let snake = Snake::new(Direction::North);
        let apple = place_apple(&snake, None, &mut rng);
        Self {
            snake,
            apple,
            state: GameState::Idle,
            rng,
        }
    }

    /// Board with a given snake and apple, in the given state
    pub fn with_board(rng: R, snake: Snake, apple: Option<Coordinate>, state: GameState) -> Self {
        Self {
            snake,
            apple,
            state,
            rng,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Option<Coordinate> {
        self.apple
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Pause to wait after a tick that moved the snake
    pub fn tick_interval_ms(&self) -> u32 {
        match self.state {
            GameState::Running => RUNNING_TICK_MS,
            GameState::Idle | GameState::Starting => IDLE_TICK_MS,
        }
    }

    /// Steering is always live. While idle the autopilot overrides it.
    pub fn turn(&mut self, turn: Turn) {
        let heading = self.snake.direction().turn(turn);
        self.snake.set_direction(heading);
    }

    pub fn stir_rng(&mut self, entropy: u32) {
        self.rng.stir(entropy);
    }

    /// Enter [`GameState::Starting`] with a fresh snake and apple.
    /// Returns `false`, changing nothing, unless the game is idle.
    pub fn begin_start(&mut self) -> bool {
        if self.state != GameState::Idle {
            return false;
        }
        self.state = GameState::Starting;
        self.reset_board();
        true
    }

    /// Hand control to the player once the round is set up
    pub fn finish_start(&mut self) {
        if self.state == GameState::Starting {
            self.state = GameState::Running;
        }
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self) -> Result<Tick, Error> {
        if self.state == GameState::Starting {
            return Ok(Tick::Skipped);
        }

        let head = self.snake.head();
        if self.state == GameState::Idle {
            let heading = autopilot::steer(&self.snake, self.apple);
            self.snake.set_direction(heading);
        }

        let next = self.snake.direction().next_coordinate(head);
        if !next.is_valid() || self.snake.would_bite(next) {
            let summary = (self.state == GameState::Running).then(|| RoundSummary {
                score: self.snake.len(),
            });
            self.state = GameState::Idle;
            self.reset_board();
            return Ok(Tick::Crashed(summary));
        }

        let ate = self.apple == Some(next);
        if ate {
            self.snake.advance(false)?;
            self.apple = place_apple(&self.snake, self.apple, &mut self.rng);
            debug!("apple eaten, length {}", self.snake.len());
        } else {
            self.snake.advance(true)?;
        }
        Ok(Tick::Moved { ate })
    }

    fn reset_board(&mut self) {
        self.snake = Snake::new(Direction::North);
        self.apple = place_apple(&self.snake, self.apple, &mut self.rng);
    }
}
