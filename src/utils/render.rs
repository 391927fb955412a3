use std::collections::HashSet;

use crate::common::cell::Cell;
use crate::common::grid::Grid;

const PATH_SYMBOL: &str = "o ";
const OBSTRUCTED_SYMBOL: &str = "# ";
const FREE_SYMBOL: &str = ". ";

/// Renders a grid as text with the cells of `path` marked.
///
/// Each row becomes one line. Cells on the path are drawn as `o`, then
/// obstructed cells as `#`, and free cells as `.`, each followed by a space.
///
/// # Example
/// ```rust
/// use grid_astar::{find_path, Cell, Grid};
/// use grid_astar::utils::render::render_path;
///
/// let grid: Grid = "
///     . # .
///     . # .
///     . . .
/// ".parse().unwrap();
/// let path = find_path(&grid, Cell::new(0, 0), Cell::new(2, 0)).unwrap();
///
/// assert_eq!(render_path(&grid, &path), "o # o \no # o \n. o . \n");
/// ```
pub fn render_path(grid: &Grid, path: &[Cell]) -> String {
    let on_path: HashSet<Cell> = path.iter().copied().collect();
    let mut out = String::with_capacity((grid.width() * 2 + 1) * grid.height());

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            // Grid dimensions never exceed MAX_DIMENSION, which is i32::MAX.
            let cell = Cell::new(x as i32, y as i32);
            let symbol = if on_path.contains(&cell) {
                PATH_SYMBOL
            } else if grid.is_obstructed(cell) {
                OBSTRUCTED_SYMBOL
            } else {
                FREE_SYMBOL
            };
            out.push_str(symbol);
        }
        out.push('\n');
    }

    out
}
