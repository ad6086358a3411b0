// rules.rs - Bounded (non-wrapping) Conway step

use std::ops::RangeInclusive;

use crate::grid::{Cell, Grid};

/// Rows and columns of the 3x3 window around (row, col), clamped to the grid.
pub(crate) fn neighbour_window(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> (RangeInclusive<usize>, RangeInclusive<usize>) {
    debug_assert!(rows > 0 && cols > 0, "empty {rows}x{cols} grid has no windows");
    let row_range = row.saturating_sub(1)..=(row + 1).min(rows - 1);
    let col_range = col.saturating_sub(1)..=(col + 1).min(cols - 1);
    (row_range, col_range)
}

/// Live neighbours of (row, col): the window sum minus the cell itself.
pub fn alive_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row_range, col_range) = neighbour_window(grid.rows(), grid.cols(), row, col);
    let mut window_sum = 0;
    for r in row_range {
        for c in col_range.clone() {
            window_sum += grid.get(r, c).value();
        }
    }
    window_sum - grid.get(row, col).value()
}

pub fn next_state(cell: Cell, alive_neighbours: u8) -> Cell {
    match (cell, alive_neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,
    }
}

/// Next generation. Every cell is computed from `grid`, never from the partially built result.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::dead(grid.rows(), grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = grid.get(row, col);
            next.set(row, col, next_state(cell, alive_neighbours(grid, row, col)));
        }
    }
    next
}
