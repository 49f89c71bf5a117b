use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridSize;
use crate::snake::Cell;

/// Builds the game's random source, reproducible when `seed` is given.
#[must_use]
pub fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draws a uniformly distributed cell inside `bounds`.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Cell {
    Cell {
        row: rng.gen_range(0..i32::from(bounds.rows)),
        col: rng.gen_range(0..i32::from(bounds.cols)),
    }
}
