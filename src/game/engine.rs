use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    config::GameConfig,
    food::Food,
    snake::{CollisionKind, Snake},
    state::GameState,
};

/// Result of one logic tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionKind>,
    /// The snake covers every cell and no food can be placed
    pub board_full: bool,
}

impl TickOutcome {
    /// The game cannot continue after this tick
    pub fn is_terminal(&self) -> bool {
        self.collision.is_some() || self.board_full
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the state for a new game
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(&self.config);
        let food = Food::spawn(&self.config.grid(), &mut self.rng, snake.body());
        GameState::new(snake, food)
    }

    /// Run one logic tick: move, eat, then check for collisions.
    ///
    /// Food eaten this tick grows the snake on the following tick.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        state.snake.move_forward();
        state.ticks += 1;

        if state.snake.check_food_collision(state.food.position()) {
            state.snake.grow();
            state.score += 1;
            outcome.ate_food = true;

            // The pending growth fills one more cell on the next move
            let grid = self.config.grid();
            if state.snake.len() + 1 >= grid.total_cells() {
                outcome.board_full = true;
            } else {
                state
                    .food
                    .respawn(&grid, &mut self.rng, state.snake.body());
            }
        }

        outcome.collision = state.snake.collision();
        if let Some(kind) = outcome.collision {
            tracing::debug!(?kind, tick = state.ticks, "snake collided");
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction};

    fn seeded(config: GameConfig) -> GameEngine {
        GameEngine::new(GameConfig {
            seed: Some(1234),
            ..config
        })
    }

    #[test]
    fn test_reset() {
        let mut engine = seeded(GameConfig::default());
        let state = engine.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.snake.len(), 1);
        assert!(!state.is_occupied_by_snake(state.food.position()));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = seeded(GameConfig::default());
        let mut state = engine.reset();
        state.food = Food::at(Cell::new(0, 0));

        let outcome = engine.tick(&mut state);

        assert!(!outcome.is_terminal());
        assert!(!outcome.ate_food);
        assert_eq!(state.ticks, 1);
        assert_eq!(state.snake.head_position(), Cell::new(420, 300));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = seeded(GameConfig::default());
        let mut state = engine.reset();
        state.food = Food::at(Cell::new(420, 300));

        let outcome = engine.tick(&mut state);

        assert!(outcome.ate_food);
        assert_eq!(state.score, 1);
        // Growth lands on the next move
        assert_eq!(state.snake.len(), 1);
        assert!(!state.is_occupied_by_snake(state.food.position()));

        state.food = Food::at(Cell::new(0, 0));
        engine.tick(&mut state);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = seeded(GameConfig::small());
        let grid = engine.config().grid();
        let mut state = GameState::new(
            Snake::spawn(grid, Cell::new(0, 100), Direction::Left, 3),
            Food::at(Cell::new(100, 100)),
        );

        let outcome = engine.tick(&mut state);

        assert!(outcome.is_terminal());
        assert_eq!(outcome.collision, Some(CollisionKind::Wall));
    }

    #[test]
    fn test_board_full_stops_placement() {
        // 2x1 board: a one-cell snake that eats fills it
        let config = GameConfig {
            screen_width: 40,
            screen_height: 20,
            grid_size: 20,
            ..GameConfig::default()
        };
        let mut engine = seeded(config);
        let grid = engine.config().grid();
        let mut state = GameState::new(
            Snake::spawn(grid, Cell::new(0, 0), Direction::Right, 1),
            Food::at(Cell::new(20, 0)),
        );

        let outcome = engine.tick(&mut state);

        assert!(outcome.ate_food);
        assert!(outcome.board_full);
        assert!(outcome.is_terminal());
        assert_eq!(outcome.collision, None);
    }
}
