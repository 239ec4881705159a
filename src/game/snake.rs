//! The snake: body segments, heading and deferred growth.
//!
//! The snake never decides on its own that it has died. Collision is a
//! query the owner runs after every move; once it reports a hit the owner
//! stops moving the snake and builds a fresh one for the next game.

use super::config::GameConfig;
use super::direction::Direction;
use super::grid::{Cell, Grid};

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the board
    Wall,
    /// Head landed on another segment
    SelfHit,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
    /// Direction applied on the last move
    direction: Direction,
    /// Direction the next move will use
    pending_direction: Direction,
    pending_growth: bool,
    grid: Grid,
}

impl Snake {
    /// Spawn at the board centre heading right, with the rest of the
    /// initial length trailing to the left of the head.
    pub fn new(config: &GameConfig) -> Self {
        let grid = config.grid();
        Self::spawn(grid, grid.center(), Direction::Right, config.initial_snake_length)
    }

    /// Snake of `length` cells with its head at `head`, facing `direction`
    pub fn spawn(grid: Grid, head: Cell, direction: Direction, length: usize) -> Self {
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);

        let back = direction.opposite();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(grid.step(prev, back));
        }

        Self::from_body(grid, body, direction)
    }

    /// Snake from explicit segments, head first.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn from_body(grid: Grid, body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "snake needs at least a head");
        Self {
            body,
            direction,
            pending_direction: direction,
            pending_growth: false,
            grid,
        }
    }

    /// Request a turn for the next move.
    ///
    /// A request for the exact opposite of the direction applied on the last
    /// move is ignored, even if a different turn is already pending.
    pub fn change_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.pending_direction = requested;
        }
    }

    /// Advance one grid step in the pending direction.
    ///
    /// The tail is kept if `grow` was called since the last move, so length
    /// only changes here.
    pub fn move_forward(&mut self) {
        self.direction = self.pending_direction;

        let new_head = self.grid.step(self.head_position(), self.direction);
        self.body.insert(0, new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop();
        }
    }

    /// Grow by one segment on the next move
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Which collision, if any, the head is currently in
    pub fn collision(&self) -> Option<CollisionKind> {
        let head = self.head_position();

        if !self.grid.contains(head) {
            return Some(CollisionKind::Wall);
        }

        if self.body[1..].contains(&head) {
            return Some(CollisionKind::SelfHit);
        }

        None
    }

    pub fn check_collision(&self) -> bool {
        self.collision().is_some()
    }

    pub fn head_position(&self) -> Cell {
        self.body[0]
    }

    pub fn check_food_collision(&self, food: Cell) -> bool {
        self.head_position() == food
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn is_growing(&self) -> bool {
        self.pending_growth
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
