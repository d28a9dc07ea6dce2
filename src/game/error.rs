use thiserror::Error;

use super::grid::Cell;

/// Errors raised while building a session. Gameplay itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width must be at least one cell")]
    ZeroWidth,
    #[error("grid height must be at least one cell")]
    ZeroHeight,
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("a {width}x{height} grid does not fit in i32 coordinates")]
    GridTooLarge { width: usize, height: usize },
    #[error("cell size {0} does not fit in i32 pixels")]
    CellSizeTooLarge(u32),
    #[error("tick interval must be at least one millisecond")]
    ZeroTickInterval,
    #[error("start cell {start:?} lies outside a {width}x{height} grid")]
    StartOutOfBounds {
        start: Cell,
        width: usize,
        height: usize,
    },
    #[error("a snake needs at least one segment")]
    EmptyBody,
}
