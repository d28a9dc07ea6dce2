use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// Session statistics shown in the header. Derived from tick outcomes; the
/// engine does not keep score itself.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_length: usize,
    pub rounds_played: u32,
    pub apples_eaten: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 1,
            rounds_played: 0,
            apples_eaten: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold one tick into the totals. `current_length` is the snake's target
    /// length after the tick.
    pub fn record_tick(&mut self, outcome: &TickOutcome, current_length: usize) {
        if outcome.ate_apple {
            self.apples_eaten += 1;
        }

        let reached = match outcome.reset {
            Some(end) => {
                self.rounds_played += 1;
                end.length
            }
            None => current_length,
        };
        self.best_length = self.best_length.max(reached);
    }

    /// Manual restart: clock starts over, totals stay
    pub fn on_restart(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
