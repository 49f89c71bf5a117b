use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

/// Initial body length of a freshly spawned snake.
pub const SPAWN_LENGTH: usize = 3;

/// Grid position in `(row, col)` cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Returns true when the cell lies inside `[0, rows) x [0, cols)`.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.row >= 0
            && self.col >= 0
            && self.row < i32::from(bounds.rows)
            && self.col < i32::from(bounds.cols)
    }
}

/// Snake body plus its committed and buffered heading.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake body needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Creates the three-cell spawn snake on the middle row, facing right.
    ///
    /// The head sits on the centre column, shifted right when the grid is
    /// too narrow for the tail to fit behind it.
    #[must_use]
    pub fn spawn_centered(bounds: GridSize) -> Self {
        let row = i32::from(bounds.rows / 2);
        let head_col = i32::from(bounds.cols / 2).max(SPAWN_LENGTH as i32 - 1);
        let segments = (0..SPAWN_LENGTH as i32)
            .map(|offset| Cell::new(row, head_col - offset))
            .collect();

        Self::from_segments(segments, Direction::Right)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Buffers `direction` for the next tick unless it reverses the current
    /// heading. Later calls overwrite earlier ones.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.pending_direction = direction;
        }
    }

    /// Head position the next `move_forward` would produce.
    #[must_use]
    pub fn peek_next_head(&self) -> Cell {
        self.head().step(self.pending_direction)
    }

    /// Commits the buffered direction and advances one cell, keeping the
    /// tail when `grow` is set.
    pub fn move_forward(&mut self, grow: bool) {
        self.direction = self.pending_direction;
        let next_head = self.head().step(self.direction);

        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Commits the buffered direction without moving.
    ///
    /// Used on a fatal tick so the head faces the cell it crashed into.
    pub fn face_pending(&mut self) {
        self.direction = self.pending_direction;
    }

    /// Returns true when `candidate` would hit the body after this tick.
    ///
    /// A growing snake keeps its tail, so the whole body counts. Otherwise
    /// the tail cell vacates during the move and is excluded.
    #[must_use]
    pub fn is_self_collision(&self, candidate: Cell, grow: bool) -> bool {
        let checked = if grow {
            self.body.len()
        } else {
            self.body.len() - 1
        };

        self.body.iter().take(checked).any(|segment| *segment == candidate)
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction buffered for the next tick.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
