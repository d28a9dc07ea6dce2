use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::{
    action::{Action, Direction},
    apple::Apple,
    config::GameConfig,
    error::ConfigError,
    grid::{EdgePolicy, Grid},
    snake::Snake,
};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// The head ran into the body
    SelfCollision,
    /// The head left a bounded grid
    OutOfBounds,
}

/// A round that ended during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnd {
    pub cause: ResetCause,
    /// Target length the snake had reached before the reset
    pub length: usize,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the head landed on the apple
    pub ate_apple: bool,
    /// Set when the snake was reset this tick
    pub reset: Option<RoundEnd>,
}

/// Owns the snake and apple and advances them one tick at a time.
///
/// There is no game-over state. A collision resets the snake in place and the
/// session carries on.
pub struct RoundController {
    grid: Grid,
    snake: Snake,
    apple: Apple,
    rng: StdRng,
    ticks: u64,
}

impl RoundController {
    /// Start a session from a config, failing fast on invalid settings
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        let start = config.start_cell(&grid)?;

        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = Snake::new(start);
        let mut apple = Apple::new(&grid, &mut rng);
        apple.relocate(snake.body_snapshot(), &grid, &mut rng);

        info!(
            "new session: {}x{} grid, {:?}, start ({}, {})",
            grid.width(),
            grid.height(),
            grid.edge_policy(),
            start.x,
            start.y
        );

        Ok(Self::from_parts(grid, snake, apple, rng))
    }

    /// Assemble a session from existing pieces
    pub fn from_parts(grid: Grid, snake: Snake, apple: Apple, rng: StdRng) -> Self {
        Self {
            grid,
            snake,
            apple,
            rng,
            ticks: 0,
        }
    }

    /// Run one tick: turn, move, eat, then check for collisions.
    pub fn tick(&mut self, pending_direction: Option<Direction>) -> TickOutcome {
        self.ticks += 1;
        let mut outcome = TickOutcome::default();

        if let Some(direction) = pending_direction {
            self.snake.set_heading(direction);
        }

        self.snake.advance(&self.grid);
        let head = self.snake.head_cell();

        if head == self.apple.position() {
            self.snake.grow();
            self.apple
                .relocate(self.snake.body_snapshot(), &self.grid, &mut self.rng);
            outcome.ate_apple = true;
            debug!(
                "apple eaten at ({}, {}), target length {}",
                head.x,
                head.y,
                self.snake.target_length()
            );
        }

        // A self hit wins over the boundary check
        if self.snake.collides_with_body(head) {
            outcome.reset = Some(self.reset_snake(ResetCause::SelfCollision));
            return outcome;
        }

        if self.grid.edge_policy() == EdgePolicy::BoundedReset && !self.grid.contains(head) {
            outcome.reset = Some(self.reset_snake(ResetCause::OutOfBounds));
        }

        outcome
    }

    /// Run one tick from an [`Action`]
    pub fn step(&mut self, action: Action) -> TickOutcome {
        self.tick(action.direction())
    }

    /// Start over by hand: fresh snake and a new apple
    pub fn restart(&mut self) {
        self.snake.reset();
        self.apple
            .relocate(self.snake.body_snapshot(), &self.grid, &mut self.rng);
        info!("session restarted");
    }

    fn reset_snake(&mut self, cause: ResetCause) -> RoundEnd {
        let end = RoundEnd {
            cause,
            length: self.snake.target_length(),
        };
        info!("round over: {:?} at length {}", cause, end.length);
        self.snake.reset();

        // Keep the respawned head visible
        if self.apple.position() == self.snake.start() {
            self.apple
                .relocate(self.snake.body_snapshot(), &self.grid, &mut self.rng);
        }
        end
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    /// Ticks run since the session started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apples eaten in the current round
    pub fn score(&self) -> usize {
        self.snake.target_length() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Cell;
    use rand::Rng;

    fn controller(grid: Grid, snake: Snake, apple: Cell) -> RoundController {
        RoundController::from_parts(grid, snake, Apple::at(apple), StdRng::seed_from_u64(11))
    }

    fn bounded(width: usize, height: usize) -> Grid {
        Grid::new(width, height, 20, EdgePolicy::BoundedReset).unwrap()
    }

    fn wrap(width: usize, height: usize) -> Grid {
        Grid::new(width, height, 20, EdgePolicy::Wrap).unwrap()
    }

    #[test]
    fn test_new_session() {
        let round = RoundController::new(&GameConfig::default().with_seed(1)).unwrap();

        assert_eq!(round.snake().len(), 1);
        assert_eq!(round.snake().head_cell(), Cell::new(16, 12));
        assert_eq!(round.snake().heading(), Direction::Right);
        assert!(round.grid().contains(round.apple().position()));
        assert_ne!(round.apple().position(), Cell::new(16, 12));
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn test_new_session_rejects_bad_config() {
        let result = RoundController::new(&GameConfig::new(0, 24));
        assert!(matches!(result, Err(ConfigError::ZeroWidth)));
    }

    #[test]
    fn test_basic_movement() {
        let mut round = controller(bounded(10, 10), Snake::new(Cell::new(5, 5)), Cell::new(0, 0));

        let outcome = round.tick(None);

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(round.snake().head_cell(), Cell::new(6, 5));
        assert_eq!(round.ticks(), 1);
    }

    #[test]
    fn test_opposite_intent_is_ignored() {
        let snake = Snake::from_segments(
            Cell::new(5, 5),
            vec![Cell::new(5, 5), Cell::new(4, 5)],
            Direction::Right,
        )
        .unwrap();
        let mut round = controller(bounded(10, 10), snake, Cell::new(0, 0));

        let outcome = round.step(Action::Move(Direction::Left));

        assert!(outcome.reset.is_none());
        assert_eq!(round.snake().heading(), Direction::Right);
        assert_eq!(round.snake().head_cell(), Cell::new(6, 5));
    }

    #[test]
    fn test_apple_consumption() {
        let mut round = controller(bounded(10, 10), Snake::new(Cell::new(5, 5)), Cell::new(6, 5));

        let outcome = round.tick(None);

        assert!(outcome.ate_apple);
        assert_eq!(round.snake().target_length(), 2);
        assert_eq!(round.snake().len(), 1);
        assert_ne!(round.apple().position(), Cell::new(6, 5));
        assert!(!round.snake().occupies(round.apple().position()));
        assert_eq!(round.score(), 1);

        // Growth shows up one tick later
        round.tick(None);
        assert_eq!(round.snake().len(), 2);
    }

    #[test]
    fn test_scenario_from_center_of_default_grid() {
        let config = GameConfig::default().with_seed(5);
        let grid = config.grid().unwrap();
        let start = grid.cell_at_pixel(320, 240);
        let apple = grid.cell_at_pixel(340, 240);
        let mut round = controller(grid, Snake::new(start), apple);

        let outcome = round.tick(None);

        assert_eq!(grid.pixel_origin(round.snake().head_cell()), (340, 240));
        assert!(outcome.ate_apple);
        assert_eq!(round.snake().target_length(), 2);
        assert_ne!(round.apple().position(), apple);

        round.tick(None);
        assert_eq!(round.snake().len(), 2);
    }

    #[test]
    fn test_self_collision_resets() {
        // U shape heading up; turning left lands on the fourth segment
        let snake = Snake::from_segments(
            Cell::new(2, 2),
            vec![
                Cell::new(5, 5),
                Cell::new(5, 6),
                Cell::new(4, 6),
                Cell::new(4, 5),
                Cell::new(4, 4),
            ],
            Direction::Up,
        )
        .unwrap();
        let mut round = controller(bounded(10, 10), snake, Cell::new(9, 9));

        let outcome = round.tick(Some(Direction::Left));

        assert_eq!(
            outcome.reset,
            Some(RoundEnd {
                cause: ResetCause::SelfCollision,
                length: 5,
            })
        );
        assert_eq!(round.snake().len(), 1);
        assert_eq!(round.snake().head_cell(), Cell::new(2, 2));
        assert_eq!(round.snake().heading(), Direction::Right);
    }

    #[test]
    fn test_moving_into_vacated_tail_is_safe() {
        let snake = Snake::from_segments(
            Cell::new(2, 2),
            vec![
                Cell::new(5, 5),
                Cell::new(5, 6),
                Cell::new(4, 6),
                Cell::new(4, 5),
            ],
            Direction::Up,
        )
        .unwrap();
        let mut round = controller(bounded(10, 10), snake, Cell::new(9, 9));

        let outcome = round.tick(Some(Direction::Left));

        assert!(outcome.reset.is_none());
        assert_eq!(round.snake().head_cell(), Cell::new(4, 5));
        assert_eq!(round.snake().len(), 4);
    }

    #[test]
    fn test_bounded_edge_resets() {
        let snake = Snake::from_segments(Cell::new(3, 3), vec![Cell::new(9, 5)], Direction::Right)
            .unwrap();
        let mut round = controller(bounded(10, 10), snake, Cell::new(0, 0));

        let outcome = round.tick(None);

        assert_eq!(
            outcome.reset.map(|end| end.cause),
            Some(ResetCause::OutOfBounds)
        );
        assert_eq!(round.snake().len(), 1);
        assert_eq!(round.snake().head_cell(), Cell::new(3, 3));
        assert_eq!(round.apple().position(), Cell::new(0, 0));
    }

    #[test]
    fn test_reset_moves_apple_off_start_cell() {
        let snake = Snake::from_segments(Cell::new(3, 3), vec![Cell::new(9, 5)], Direction::Right)
            .unwrap();
        let mut round = controller(bounded(10, 10), snake, Cell::new(3, 3));

        let outcome = round.tick(None);

        assert!(outcome.reset.is_some());
        assert_eq!(round.snake().head_cell(), Cell::new(3, 3));
        assert_ne!(round.apple().position(), Cell::new(3, 3));
    }

    #[test]
    fn test_wrap_edge_continues() {
        let snake = Snake::from_segments(Cell::new(3, 3), vec![Cell::new(9, 5)], Direction::Right)
            .unwrap();
        let mut round = controller(wrap(10, 10), snake, Cell::new(0, 0));

        let outcome = round.tick(None);

        assert!(outcome.reset.is_none());
        assert_eq!(round.snake().head_cell(), Cell::new(0, 5));
    }

    #[test]
    fn test_wrap_apple_across_edge() {
        let snake = Snake::from_segments(Cell::new(3, 3), vec![Cell::new(5, 0)], Direction::Up)
            .unwrap();
        let mut round = controller(wrap(10, 10), snake, Cell::new(5, 9));

        let outcome = round.tick(None);

        assert!(outcome.ate_apple);
        assert_eq!(round.snake().head_cell(), Cell::new(5, 9));
    }

    #[test]
    fn test_restart_clears_progress() {
        let snake = Snake::from_segments(
            Cell::new(1, 1),
            vec![Cell::new(5, 5), Cell::new(4, 5)],
            Direction::Right,
        )
        .unwrap();
        let mut round = controller(bounded(10, 10), snake, Cell::new(1, 1));

        round.restart();

        assert_eq!(round.snake().body_snapshot(), &[Cell::new(1, 1)]);
        assert_ne!(round.apple().position(), Cell::new(1, 1));
    }

    #[test]
    fn test_length_never_exceeds_target() {
        for policy in [EdgePolicy::Wrap, EdgePolicy::BoundedReset] {
            let config = GameConfig::small().with_edge_policy(policy).with_seed(99);
            let mut round = RoundController::new(&config).unwrap();
            let mut intents = StdRng::seed_from_u64(2024);
            let mut grew_last_tick = false;

            for _ in 0..2_000 {
                let direction = Direction::ALL[intents.gen_range(0..4)];
                let outcome = round.tick(Some(direction));
                let snake = round.snake();

                assert!(snake.len() <= snake.target_length());
                if grew_last_tick && !outcome.ate_apple && outcome.reset.is_none() {
                    assert_eq!(snake.len(), snake.target_length());
                }
                if outcome.reset.is_some() {
                    assert_eq!(snake.len(), 1);
                }
                assert!(round.grid().contains(snake.head_cell()));
                assert!(round.grid().contains(round.apple().position()));

                grew_last_tick = outcome.ate_apple && outcome.reset.is_none();
            }
        }
    }
}
