use rand::Rng;

use super::grid::{Cell, Grid};

/// Pick a random grid-aligned cell that is not in `occupied`.
///
/// Retries until it finds a free cell. There is no retry limit: this relies
/// on the board having free cells, which holds while the snake is shorter
/// than the board. With every cell occupied this never returns, so callers
/// must end the game before the board fills up (see
/// [`GameEngine::tick`](super::engine::GameEngine::tick)).
pub fn place<R: Rng + ?Sized>(grid: &Grid, rng: &mut R, occupied: &[Cell]) -> Cell {
    loop {
        let cell = grid.random_cell(rng);
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Food at an exact cell
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Food at a random cell outside `occupied`
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, rng: &mut R, occupied: &[Cell]) -> Self {
        Self::at(place(grid, rng, occupied))
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a new random cell outside `occupied`
    pub fn respawn<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R, occupied: &[Cell]) {
        self.position = place(grid, rng, occupied);
        tracing::debug!(x = self.position.x, y = self.position.y, "food respawned");
    }

    pub fn check_collision(&self, head: Cell) -> bool {
        self.position == head
    }
}
