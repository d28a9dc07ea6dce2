//! Grid Snake - a tick-driven snake game on a fixed grid
//!
//! This library provides:
//! - The game-state engine: grid, snake, apple and the per-tick round controller (game module)
//! - Keyboard intent mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
