use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    error::ConfigError,
    grid::{Cell, EdgePolicy, Grid},
};

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Side of one cell in pixels, for pixel-based hosts
    pub cell_size: u32,
    /// What happens when the snake crosses the edge
    pub edge_policy: EdgePolicy,
    /// Where the snake spawns and respawns; the grid centre when unset
    pub start: Option<Cell>,
    /// Milliseconds between ticks
    pub tick_ms: u64,
    /// Seed for apple placement; entropy when unset
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            edge_policy: EdgePolicy::BoundedReset,
            start: None,
            tick_ms: 100,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Build the grid this config describes
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(
            self.grid_width,
            self.grid_height,
            self.cell_size,
            self.edge_policy,
        )
    }

    /// The spawn cell, checked against the grid
    pub fn start_cell(&self, grid: &Grid) -> Result<Cell, ConfigError> {
        let start = self.start.unwrap_or_else(|| grid.center());
        if !grid.contains(start) {
            return Err(ConfigError::StartOutOfBounds {
                start,
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(start)
    }

    /// Reject settings a session cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        let grid = self.grid()?;
        self.start_cell(&grid)?;
        Ok(())
    }
}
