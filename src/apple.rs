use std::collections::HashSet;

use rand::Rng;
use tracing::trace;

use crate::config::GridSize;
use crate::rng::random_cell;
use crate::snake::{Cell, Snake};

/// Apples currently on the board, in spawn order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AppleSet {
    positions: Vec<Cell>,
}

impl AppleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from explicit positions, dropping duplicates.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut set = Self::new();
        for cell in cells {
            if !set.contains(cell) {
                set.positions.push(cell);
            }
        }
        set
    }

    /// Draws random cells until one falls outside `occupied`.
    ///
    /// Returns `None` without drawing when every cell of `bounds` is
    /// occupied; otherwise rejection sampling is guaranteed to terminate.
    pub fn respawn_one<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        occupied: &HashSet<Cell>,
    ) -> Option<Cell> {
        if occupied.len() >= bounds.total_cells() {
            return None;
        }

        loop {
            let candidate = random_cell(rng, bounds);
            if !occupied.contains(&candidate) {
                return Some(candidate);
            }
        }
    }

    /// Adds one apple on a free cell when below `max_apples` and the grid
    /// still has room. Returns the new position, if any.
    pub fn spawn_if_room<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        max_apples: usize,
    ) -> Option<Cell> {
        if self.positions.len() >= max_apples {
            return None;
        }
        if snake.len() + self.positions.len() >= bounds.total_cells() {
            return None;
        }

        let occupied: HashSet<Cell> = snake
            .segments()
            .copied()
            .chain(self.positions.iter().copied())
            .collect();

        let cell = Self::respawn_one(rng, bounds, &occupied)?;
        trace!(row = cell.row, col = cell.col, "apple spawned");
        self.positions.push(cell);
        Some(cell)
    }

    /// Spawns apples until `max_apples` exist or the grid is full.
    pub fn fill<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        max_apples: usize,
    ) {
        while self
            .spawn_if_room(rng, bounds, snake, max_apples)
            .is_some()
        {}
    }

    /// Removes the apple at `cell`. Returns false when none was there.
    pub fn remove_at(&mut self, cell: Cell) -> bool {
        match self.positions.iter().position(|apple| *apple == cell) {
            Some(index) => {
                let _ = self.positions.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.positions.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.positions.iter()
    }

    #[must_use]
    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::AppleSet;

    fn corner_snake() -> Snake {
        Snake::from_segments(
            vec![Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)],
            Direction::Right,
        )
    }

    #[test]
    fn apple_spawn_never_overlaps_snake_or_apples() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize { rows: 6, cols: 8 };
        let snake = corner_snake();
        let mut apples = AppleSet::new();

        apples.fill(&mut rng, bounds, &snake, 20);

        assert_eq!(apples.len(), 20);
        let unique: HashSet<Cell> = apples.iter().copied().collect();
        assert_eq!(unique.len(), 20);
        assert!(apples.iter().all(|apple| !snake.occupies(*apple)));
        assert!(apples.iter().all(|apple| apple.is_within_bounds(bounds)));
    }

    #[test]
    fn fill_stops_when_grid_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize { rows: 2, cols: 3 };
        let mut apples = AppleSet::new();

        apples.fill(&mut rng, bounds, &corner_snake(), 10);

        assert_eq!(apples.len(), 3);
    }

    #[test]
    fn spawn_is_noop_at_capacity() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize { rows: 5, cols: 5 };
        let mut apples = AppleSet::from_cells([Cell::new(4, 4)]);

        let spawned = apples.spawn_if_room(&mut rng, bounds, &corner_snake(), 1);

        assert_eq!(spawned, None);
        assert_eq!(apples.len(), 1);
    }

    #[test]
    fn last_free_cell_is_always_selected() {
        let bounds = GridSize { rows: 2, cols: 2 };
        let occupied: HashSet<Cell> = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]
            .into_iter()
            .collect();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                AppleSet::respawn_one(&mut rng, bounds, &occupied),
                Some(Cell::new(1, 1))
            );
        }
    }

    #[test]
    fn respawn_refuses_full_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = GridSize { rows: 1, cols: 2 };
        let occupied: HashSet<Cell> = [Cell::new(0, 0), Cell::new(0, 1)].into_iter().collect();

        assert_eq!(AppleSet::respawn_one(&mut rng, bounds, &occupied), None);
    }

    #[test]
    fn remove_at_drops_exactly_one_entry() {
        let mut apples = AppleSet::from_cells([Cell::new(1, 1), Cell::new(2, 2), Cell::new(1, 1)]);

        assert_eq!(apples.len(), 2);
        assert!(apples.remove_at(Cell::new(1, 1)));
        assert!(!apples.remove_at(Cell::new(1, 1)));
        assert_eq!(apples.positions(), &[Cell::new(2, 2)]);
    }
}
