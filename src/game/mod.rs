//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Hosts drive it by calling [`RoundController::tick`] once per tick and read the
//! snake and apple back for drawing.

pub mod action;
pub mod apple;
pub mod config;
pub mod drawable;
pub mod engine;
pub mod error;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use apple::Apple;
pub use config::GameConfig;
pub use drawable::{Drawable, VisualTag};
pub use engine::{ResetCause, RoundController, RoundEnd, TickOutcome};
pub use error::ConfigError;
pub use grid::{Cell, EdgePolicy, Grid};
pub use snake::Snake;
