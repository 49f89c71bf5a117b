use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::apple::AppleSet;
use crate::config::{GameConfig, GridSize};
use crate::error::ConfigError;
use crate::input::Direction;
use crate::rng;
use crate::snake::{Cell, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    GameWin,
}

/// Why the last game ended in `GameOver`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderSnapshot {
    pub body: Vec<Cell>,
    pub direction: Direction,
    pub apples: Vec<Cell>,
    pub score: u32,
    pub game_over: bool,
    pub game_win: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apples: AppleSet,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    tick_count: u64,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Builds a fresh game, rejecting configurations no game can start from.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = config.grid();
        let mut rng = rng::seeded(config.seed);
        let snake = Snake::spawn_centered(bounds);
        let mut apples = AppleSet::new();
        apples.fill(&mut rng, bounds, &snake, config.max_apples);

        info!(
            rows = config.rows,
            cols = config.cols,
            max_apples = config.max_apples,
            seed = ?config.seed,
            "game reset"
        );

        Ok(Self {
            snake,
            apples,
            score: 0,
            status: GameStatus::Playing,
            death_reason: None,
            tick_count: 0,
            config,
            rng,
        })
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(
        bounds: GridSize,
        max_apples: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(GameConfig {
            rows: bounds.rows,
            cols: bounds.cols,
            max_apples,
            tick_interval_ms: crate::config::DEFAULT_TICK_INTERVAL_MS,
            seed: Some(seed),
        })
    }

    /// Replaces this game with a fresh one built from `config`.
    ///
    /// On error the current game is left untouched.
    pub fn reset(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Advances simulation by one gameplay tick: predict, validate, commit.
    pub fn update(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;

        let next_head = self.snake.peek_next_head();
        let eating = self.apples.contains(next_head);

        if !next_head.is_within_bounds(self.bounds()) {
            self.end(DeathReason::WallCollision);
            return;
        }
        if self.snake.is_self_collision(next_head, eating) {
            self.end(DeathReason::SelfCollision);
            return;
        }

        self.snake.move_forward(eating);
        if !eating {
            return;
        }

        self.score += 1;
        let _ = self.apples.remove_at(next_head);
        debug!(
            score = self.score,
            length = self.snake.len(),
            row = next_head.row,
            col = next_head.col,
            "apple eaten"
        );

        if self.snake.len() == self.bounds().total_cells() {
            self.status = GameStatus::GameWin;
            info!(score = self.score, ticks = self.tick_count, "grid filled");
            return;
        }

        let bounds = self.bounds();
        let _ = self.apples.spawn_if_room(
            &mut self.rng,
            bounds,
            &self.snake,
            self.config.max_apples,
        );
    }

    /// Buffers a direction intent for the next tick; ignored once terminal.
    pub fn handle_input(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing {
            self.snake.set_direction(direction);
        }
    }

    /// Copies out the state a renderer draws.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            body: self.snake.segments().copied().collect(),
            direction: self.snake.direction(),
            apples: self.apples.positions().to_vec(),
            score: self.score,
            game_over: self.is_over(),
            game_win: self.is_win(),
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status == GameStatus::GameWin
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn end(&mut self, reason: DeathReason) {
        self.snake.face_pending();
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        info!(?reason, score = self.score, ticks = self.tick_count, "game over");
    }
}
