use rand::{Rng, seq::IteratorRandom};

use super::grid::{Cell, Grid};

/// Random draws tried before scanning the grid for free cells
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// The apple the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: Cell,
}

impl Apple {
    /// Place an apple on a uniformly random cell
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self {
            position: random_cell(grid, rng),
        }
    }

    /// Place an apple on a known cell
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the apple to a random cell outside `forbidden`.
    ///
    /// If every cell is forbidden the apple lands on any cell.
    pub fn relocate<R: Rng + ?Sized>(&mut self, forbidden: &[Cell], grid: &Grid, rng: &mut R) {
        let attempts = if forbidden.len() < grid.area() {
            MAX_SAMPLE_ATTEMPTS
        } else {
            0
        };
        for _ in 0..attempts {
            let candidate = random_cell(grid, rng);
            if !forbidden.contains(&candidate) {
                self.position = candidate;
                return;
            }
        }

        // Crowded grid: pick uniformly among whatever is left
        self.position = grid
            .cells()
            .filter(|cell| !forbidden.contains(cell))
            .choose(rng)
            .unwrap_or_else(|| random_cell(grid, rng));
    }
}

fn random_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Cell {
    let x = rng.gen_range(0..grid.width()) as i32;
    let y = rng.gen_range(0..grid.height()) as i32;
    Cell::new(x, y)
}
