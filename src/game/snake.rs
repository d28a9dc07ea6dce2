use super::{
    action::Direction,
    error::ConfigError,
    grid::{Cell, Grid},
};

/// Heading a fresh snake starts with
pub const START_HEADING: Direction = Direction::Right;

/// The snake in the game
///
/// The body is ordered head first. It never holds more cells than the target
/// length; after [`Snake::grow`] it catches up on the next [`Snake::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    heading: Direction,
    target_length: usize,
    start: Cell,
}

impl Snake {
    /// Create a single-segment snake at `start`, heading right
    pub fn new(start: Cell) -> Self {
        Self {
            body: vec![start],
            heading: START_HEADING,
            target_length: 1,
            start,
        }
    }

    /// Create a snake with an explicit body, head first.
    ///
    /// `start` is where the snake respawns after a reset.
    pub fn from_segments(
        start: Cell,
        segments: Vec<Cell>,
        heading: Direction,
    ) -> Result<Self, ConfigError> {
        if segments.is_empty() {
            return Err(ConfigError::EmptyBody);
        }

        Ok(Self {
            target_length: segments.len(),
            body: segments,
            heading,
            start,
        })
    }

    /// Turn to `direction` unless it would reverse the snake onto itself
    pub fn set_heading(&mut self, direction: Direction) {
        if !self.heading.is_opposite(direction) {
            self.heading = direction;
        }
    }

    /// Move one step along the current heading, dropping the tail if the body
    /// is already at its target length
    pub fn advance(&mut self, grid: &Grid) {
        let new_head = grid.normalize(self.head_cell(), self.heading);
        self.body.insert(0, new_head);

        if self.body.len() > self.target_length {
            self.body.pop();
        }
    }

    /// Ask for one more segment. The body grows on the next advance.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Back to a single segment at the start cell, heading right
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push(self.start);
        self.heading = START_HEADING;
        self.target_length = 1;
    }

    pub fn head_cell(&self) -> Cell {
        self.body[0]
    }

    /// Body segments excluding the head. The neck is included.
    pub fn body_without_head(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// The whole body, head first
    pub fn body_snapshot(&self) -> &[Cell] {
        &self.body
    }

    /// Check if cell collides with the snake body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_without_head().contains(&cell)
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Number of cells currently in the body
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn start(&self) -> Cell {
        self.start
    }
}
