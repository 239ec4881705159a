use super::food::Food;
use super::grid::Cell;
use super::snake::Snake;

/// Everything that changes while one game is played
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    /// Logic ticks taken since the game started
    pub ticks: u32,
}

impl GameState {
    pub fn new(snake: Snake, food: Food) -> Self {
        Self {
            snake,
            food,
            score: 0,
            ticks: 0,
        }
    }

    /// Check if a cell is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.body().contains(&cell)
    }
}
