use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::game::{CellBounds, GameState, Grid};

/// Terminal columns used for one grid cell (terminal cells are about twice
/// as tall as they are wide)
pub const COLUMNS_PER_CELL: i32 = 2;
pub const ROWS_PER_CELL: i32 = 1;

const SEGMENT: &str = "█";

/// Snake and food painted onto the terminal buffer
pub struct Board<'a> {
    state: &'a GameState,
    grid: Grid,
    inset: u32,
}

impl<'a> Board<'a> {
    pub fn new(state: &'a GameState, grid: Grid, inset: u32) -> Self {
        Self { state, grid, inset }
    }

    /// Terminal size needed to show the whole board, saturating at
    /// `u16::MAX` for boards `GameConfig::validate` would reject
    pub fn size(grid: &Grid) -> (u16, u16) {
        let fit = |cells: i32, per_cell: i32| {
            u16::try_from(cells.saturating_mul(per_cell)).unwrap_or(u16::MAX)
        };
        (
            fit(grid.columns(), COLUMNS_PER_CELL),
            fit(grid.rows(), ROWS_PER_CELL),
        )
    }

    fn paint(&self, bounds: CellBounds, style: Style, area: Rect, buf: &mut Buffer) {
        let (columns, rows) = terminal_span(bounds, self.grid.size());

        for row in rows {
            for column in columns.clone() {
                let x = area.x.saturating_add(column);
                let y = area.y.saturating_add(row);
                if x >= area.right() || y >= area.bottom() {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(SEGMENT).set_style(style);
                }
            }
        }
    }
}

/// Terminal columns and rows covered by a pixel rectangle, relative to the
/// board's top-left corner
pub fn terminal_span(bounds: CellBounds, grid_size: i32) -> (Range<u16>, Range<u16>) {
    let scale = |pixels: i32, per_cell: i32| (pixels * per_cell).max(0);
    let ceil_div = |value: i32| (value + grid_size - 1) / grid_size;

    let column_start = scale(bounds.left, COLUMNS_PER_CELL) / grid_size;
    let column_end = ceil_div(scale(bounds.left + bounds.width, COLUMNS_PER_CELL));
    let row_start = scale(bounds.top, ROWS_PER_CELL) / grid_size;
    let row_end = ceil_div(scale(bounds.top + bounds.height, ROWS_PER_CELL));

    (
        column_start as u16..column_end as u16,
        row_start as u16..row_end as u16,
    )
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let food = self.state.food.position();
        if self.grid.contains(food) {
            let bounds = self.grid.cell_bounds(food);
            self.paint(bounds, Style::default().fg(Color::Red), area, buf);
        }

        // Tail first so the head is painted on top
        let body = self.state.snake.body();
        for (i, segment) in body.iter().enumerate().rev() {
            if !self.grid.contains(*segment) {
                continue;
            }
            let color = if i == 0 { Color::Cyan } else { Color::Green };
            let bounds = self.grid.inset_bounds(*segment, self.inset);
            self.paint(bounds, Style::default().fg(color), area, buf);
        }
    }
}
