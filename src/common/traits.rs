use super::cell::Cell;

/// Trait that encapsulates the grid queries a search needs:
/// its dimensions and whether a cell can be entered.
///
/// [Grid](crate::common::grid::Grid) is the bundled implementation, but
/// any fixed-size obstacle field can be searched by implementing this.
pub trait Passable {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Whether the cell is marked as obstructed.
    ///
    /// Only called for in-bounds cells.
    fn is_obstructed(&self, cell: Cell) -> bool;

    /// Whether `cell` lies within `[0, width) x [0, height)`.
    fn in_bounds(&self, cell: Cell) -> bool {
        cell.in_bounds(self.width(), self.height())
    }

    /// Returns false for out-of-bounds or obstructed cells, true otherwise.
    fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_obstructed(cell)
    }
}

/// Trait that encapsulates being able to get a straight-line
/// distance from one node to another.
pub trait GetDistanceTo {
    fn get_distance_to(self, other: Self) -> f64;
}

impl GetDistanceTo for Cell {
    fn get_distance_to(self, other: Self) -> f64 {
        self.distance_to(other)
    }
}
