//! Pixel/grid conversions for the board.
//!
//! Positions are kept in pixels, the way the board is measured, but every
//! position the game produces is snapped to a multiple of the grid size.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A grid-aligned position on the board, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel rectangle covered by a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Board dimensions and grid size. Stateless; all methods are pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    size: i32,
}

impl Grid {
    /// `size` must be positive; `GameConfig::validate` enforces this.
    /// Dimensions beyond `i32::MAX` saturate.
    pub fn new(width: u32, height: u32, size: u32) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
            size: i32::try_from(size.max(1)).unwrap_or(i32::MAX),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Snap a pixel coordinate to the cell that contains it
    pub fn to_cell(&self, pixel_x: i32, pixel_y: i32) -> Cell {
        Cell::new(
            pixel_x.div_euclid(self.size) * self.size,
            pixel_y.div_euclid(self.size) * self.size,
        )
    }

    /// Full pixel rectangle of a cell
    pub fn cell_bounds(&self, cell: Cell) -> CellBounds {
        self.inset_bounds(cell, 0)
    }

    /// Cell rectangle shrunk by `inset` pixels on the right and bottom edges,
    /// leaving a visible gap between neighbouring segments.
    pub fn inset_bounds(&self, cell: Cell, inset: u32) -> CellBounds {
        let side = (self.size - inset as i32).max(1);
        CellBounds {
            left: cell.x,
            top: cell.y,
            width: side,
            height: side,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn is_aligned(&self, cell: Cell) -> bool {
        cell.x.rem_euclid(self.size) == 0 && cell.y.rem_euclid(self.size) == 0
    }

    /// Number of aligned x positions in `[0, width)`
    pub fn columns(&self) -> i32 {
        self.cells_across(self.width)
    }

    /// Number of aligned y positions in `[0, height)`
    pub fn rows(&self) -> i32 {
        self.cells_across(self.height)
    }

    fn cells_across(&self, pixels: i32) -> i32 {
        let cells = pixels.max(0).unsigned_abs().div_ceil(self.size.unsigned_abs());
        i32::try_from(cells).unwrap_or(i32::MAX)
    }

    pub fn total_cells(&self) -> usize {
        let count = |n: i32| usize::try_from(n).unwrap_or(0);
        count(self.columns()).saturating_mul(count(self.rows()))
    }

    /// Cell at a (column, row) index pair
    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.size, row * self.size)
    }

    /// (column, row) index of a cell
    pub fn index_of(&self, cell: Cell) -> (i32, i32) {
        (cell.x.div_euclid(self.size), cell.y.div_euclid(self.size))
    }

    /// The aligned cell containing the board's centre pixel
    pub fn center(&self) -> Cell {
        self.to_cell(self.width / 2, self.height / 2)
    }

    /// Neighbouring cell one grid step away
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(cell.x + dx * self.size, cell.y + dy * self.size)
    }

    /// Uniformly random on-board cell
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let column = rng.gen_range(0..self.columns().max(1));
        let row = rng.gen_range(0..self.rows().max(1));
        self.cell_at(column, row)
    }
}
