use crate::common::cell::Cell;
use crate::common::traits::Passable;

/// Offsets to the 8 surrounding cells, `dx` major then `dy`.
const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Lazy iterator over the in-bounds 8-neighbors of a cell.
///
/// The order is fixed, so enumerating the same cell twice always yields
/// the same sequence. Create a new iterator to restart.
#[derive(Debug, Clone)]
pub struct GridNeighbors {
    center: Cell,
    width: usize,
    height: usize,
    next: usize,
}

impl Iterator for GridNeighbors {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while let Some(&(dx, dy)) = OFFSETS.get(self.next) {
            self.next += 1;
            let Some(cell) = self.center.checked_offset(dx, dy) else {
                continue;
            };
            if cell.in_bounds(self.width, self.height) {
                return Some(cell);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.next))
    }
}

/// Enumerates the up-to-8 cells around `node` that lie inside a
/// `width` x `height` grid, ignoring obstructions.
pub fn cell_neighbors(node: Cell, width: usize, height: usize) -> GridNeighbors {
    GridNeighbors {
        center: node,
        width,
        height,
        next: 0,
    }
}

/// Enumerates the neighbors of `node` that can be entered on `grid`.
pub fn passable_neighbors<G: Passable>(grid: &G, node: Cell) -> impl Iterator<Item = Cell> + '_ {
    cell_neighbors(node, grid.width(), grid.height()).filter(move |n| grid.is_passable(*n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::grid::Grid;

    #[test]
    fn interior_cell_has_eight_neighbors_in_raster_order() {
        let neighbors: Vec<Cell> = cell_neighbors(Cell::new(1, 1), 3, 3).collect();
        assert_eq!(
            neighbors,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 2),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2),
            ]
        );
    }

    #[test]
    fn corner_cell_is_clipped_to_bounds() {
        let neighbors: Vec<Cell> = cell_neighbors(Cell::new(0, 0), 3, 3).collect();
        assert_eq!(
            neighbors,
            vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );

        let neighbors: Vec<Cell> = cell_neighbors(Cell::new(2, 2), 3, 3).collect();
        assert_eq!(
            neighbors,
            vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(2, 1)]
        );
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(cell_neighbors(Cell::new(0, 0), 1, 1).count(), 0);
    }

    #[test]
    fn enumeration_is_repeatable() {
        let first: Vec<Cell> = cell_neighbors(Cell::new(4, 0), 5, 2).collect();
        let second: Vec<Cell> = cell_neighbors(Cell::new(4, 0), 5, 2).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let center = Cell::new(i32::MAX, i32::MAX);
        assert_eq!(cell_neighbors(center, usize::MAX, usize::MAX).count(), 3);
    }

    #[test]
    fn passable_neighbors_skip_obstructions() {
        let grid: Grid = "
            . # .
            . . #
            . . .
        "
        .parse()
        .unwrap();

        let neighbors: Vec<Cell> = passable_neighbors(&grid, Cell::new(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 0),
                Cell::new(2, 2),
            ]
        );
    }
}
