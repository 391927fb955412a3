use std::fmt;

use serde::{Deserialize, Serialize};

/// A single grid coordinate.
///
/// Cells are plain values: equality, hashing, and ordering are all by
/// `(x, y)`. Coordinates are signed so that offsets past the grid edge
/// can be represented before bounds filtering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance between the centers of two cells.
    pub fn distance_to(self, other: Cell) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether `other` is one of the 8 cells touching this one.
    ///
    /// A cell is not adjacent to itself.
    pub fn is_adjacent_to(self, other: Cell) -> bool {
        let dx = (i64::from(other.x) - i64::from(self.x)).abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }

    /// Whether this cell lies within `[0, width) x [0, height)`.
    pub fn in_bounds(self, width: usize, height: usize) -> bool {
        let in_range = |v: i32, limit: usize| usize::try_from(v).is_ok_and(|v| v < limit);
        in_range(self.x, width) && in_range(self.y, height)
    }

    /// Returns the cell offset by `(dx, dy)`, or None on coordinate overflow.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Cell> {
        Some(Cell::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_orthogonal_and_diagonal() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.distance_to(Cell::new(1, 0)), 1.0);
        assert_eq!(origin.distance_to(Cell::new(0, -1)), 1.0);
        assert_eq!(origin.distance_to(Cell::new(1, 1)), std::f64::consts::SQRT_2);
        assert_eq!(origin.distance_to(Cell::new(3, 4)), 5.0);
        assert_eq!(origin.distance_to(origin), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Cell::new(2, 7);
        let b = Cell::new(-3, 1);
        assert_eq!(a.distance_to(b), b.distance_to(a));
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(5, 5);
        assert!(c.is_adjacent_to(Cell::new(4, 4)));
        assert!(c.is_adjacent_to(Cell::new(5, 6)));
        assert!(c.is_adjacent_to(Cell::new(6, 4)));
        assert!(!c.is_adjacent_to(c));
        assert!(!c.is_adjacent_to(Cell::new(7, 5)));
        assert!(!c.is_adjacent_to(Cell::new(5, 3)));
    }

    #[test]
    fn in_bounds_is_half_open() {
        assert!(Cell::new(0, 0).in_bounds(3, 2));
        assert!(Cell::new(2, 1).in_bounds(3, 2));
        assert!(!Cell::new(3, 1).in_bounds(3, 2));
        assert!(!Cell::new(2, 2).in_bounds(3, 2));
        assert!(!Cell::new(-1, 0).in_bounds(3, 2));
        assert!(!Cell::new(0, 0).in_bounds(0, 0));
    }

    #[test]
    fn checked_offset_overflow() {
        assert_eq!(Cell::new(0, 0).checked_offset(-1, 1), Some(Cell::new(-1, 1)));
        assert_eq!(Cell::new(i32::MAX, 0).checked_offset(1, 0), None);
        assert_eq!(Cell::new(0, i32::MIN).checked_offset(0, -1), None);
    }

    #[test]
    fn display_and_from_tuple() {
        let c: Cell = (3, -2).into();
        assert_eq!(c, Cell::new(3, -2));
        assert_eq!(c.to_string(), "(3, -2)");
    }
}
