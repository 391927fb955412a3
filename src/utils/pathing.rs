use crate::common::cell::Cell;

/// Total movement cost of a path: the sum of the straight-line
/// distances between consecutive cells.
///
/// Returns 0 for empty and single-cell paths.
pub fn path_cost(path: &[Cell]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

/// Whether every consecutive pair of cells in the path is 8-adjacent.
///
/// Empty and single-cell paths are trivially connected.
pub fn is_connected_path(path: &[Cell]) -> bool {
    path.windows(2).all(|w| w[0].is_adjacent_to(w[1]))
}

/// Utility function for converting a position and a path
/// into the next cell to move to along the path.
///
/// If the position is not on the path, it returns the first
/// cell of the path so the caller can move towards it.
///
/// Returns None if the current position is the final
/// cell in the path, or if the path is empty.
pub fn next_step(current: Cell, path: &[Cell]) -> Option<Cell> {
    match path.iter().position(|c| *c == current) {
        Some(i) => path.get(i + 1).copied(),
        None => path.first().copied(),
    }
}
