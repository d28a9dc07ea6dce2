use serde::{Deserialize, Serialize};

use super::{action::Direction, error::ConfigError};

/// A (column, row) coordinate on the grid. Not a pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta, ignoring any edge policy
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction, ignoring any edge policy
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// How movement past the edge of the grid is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Leaving one side re-enters from the opposite side
    Wrap,
    /// Leaving the grid ends the round
    #[default]
    BoundedReset,
}

/// The playing field. Immutable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: u32,
    edge_policy: EdgePolicy,
}

impl Grid {
    pub fn new(
        width: usize,
        height: usize,
        cell_size: u32,
        edge_policy: EdgePolicy,
    ) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        // Coordinates and pixel offsets are i32
        let max = i32::MAX as usize;
        if width > max || height > max || width.checked_mul(height).is_none() {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if cell_size > i32::MAX as u32 {
            return Err(ConfigError::CellSizeTooLarge(cell_size));
        }

        Ok(Self {
            width,
            height,
            cell_size,
            edge_policy,
        })
    }

    /// Grid size in cells as (width, height)
    pub fn cell_count(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// The cell in the middle of the grid, rounding down
    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Check if a cell is within `[0, W) x [0, H)`
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width as i32 && cell.y >= 0 && cell.y < self.height as i32
    }

    /// Apply one step of movement under the configured edge policy.
    ///
    /// Under [`EdgePolicy::BoundedReset`] the stepped cell is returned as is and
    /// may lie outside the grid; detecting that is up to the caller.
    pub fn normalize(&self, cell: Cell, direction: Direction) -> Cell {
        let stepped = cell.moved_in_direction(direction);

        match self.edge_policy {
            EdgePolicy::Wrap => Cell::new(
                stepped.x.rem_euclid(self.width as i32),
                stepped.y.rem_euclid(self.height as i32),
            ),
            EdgePolicy::BoundedReset => stepped,
        }
    }

    /// Every cell on the grid in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32).flat_map(move |y| (0..self.width as i32).map(move |x| Cell::new(x, y)))
    }

    /// Top-left pixel of a cell
    pub fn pixel_origin(&self, cell: Cell) -> (i32, i32) {
        let size = self.cell_size as i32;
        (cell.x.saturating_mul(size), cell.y.saturating_mul(size))
    }

    /// The cell covering a pixel
    pub fn cell_at_pixel(&self, px: i32, py: i32) -> Cell {
        let size = self.cell_size as i32;
        Cell::new(px.div_euclid(size), py.div_euclid(size))
    }
}
