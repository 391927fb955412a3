use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::{PathError, Result};
use super::traits::Passable;

const FREE_SYMBOL: char = '.';
const OBSTRUCTED_SYMBOL: char = '#';

/// Largest width or height a grid may have; every cell must be addressable by a [Cell].
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// A fixed-size rectangular field of cells, each either free or obstructed.
///
/// Cells are stored row-major; `(x, y)` addresses column `x` of row `y`.
/// Neither dimension exceeds [MAX_DIMENSION].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: usize,
    height: usize,
    obstructed: Vec<bool>,
}

/// Unvalidated serialized form of a [Grid].
#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    obstructed: Vec<bool>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = PathError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let cell_count = check_dimensions(raw.width, raw.height)?;
        if raw.obstructed.len() != cell_count {
            return Err(PathError::CellCountMismatch {
                expected: cell_count,
                found: raw.obstructed.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            obstructed: raw.obstructed,
        })
    }
}

/// Returns the number of cells in a `width` x `height` grid, or an error
/// if either dimension is larger than [MAX_DIMENSION].
fn check_dimensions(width: usize, height: usize) -> Result<usize> {
    let too_large = PathError::GridTooLarge { width, height };
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(too_large);
    }
    width.checked_mul(height).ok_or(too_large)
}

impl Grid {
    /// Creates a `width` x `height` grid with every cell free.
    ///
    /// # Panics
    ///
    /// Panics if either dimension exceeds [MAX_DIMENSION]. Use
    /// [try_new](Grid::try_new) to handle that case instead.
    pub fn new(width: usize, height: usize) -> Self {
        Self::try_new(width, height).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Creates a `width` x `height` grid with every cell free, or returns
    /// [PathError::GridTooLarge] if either dimension exceeds [MAX_DIMENSION].
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        let cell_count = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            obstructed: vec![false; cell_count],
        })
    }

    /// Builds a grid from rows of 0/1 flags, indexed `rows[y][x]`.
    ///
    /// Any non-zero value marks the cell as obstructed. Every row must
    /// have the same length as the first.
    ///
    /// # Example
    /// ```rust
    /// use grid_astar::{Cell, Grid};
    ///
    /// let grid = Grid::from_obstruction_rows(&[
    ///     [0u8, 0, 0],
    ///     [1, 1, 0],
    /// ]).unwrap();
    ///
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// assert!(grid.is_obstructed(Cell::new(1, 1)));
    /// assert!(!grid.is_obstructed(Cell::new(2, 1)));
    /// ```
    pub fn from_obstruction_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut obstructed = Vec::with_capacity(check_dimensions(width, rows.len())?);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(PathError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            obstructed.extend(values.iter().map(|v| *v != 0));
        }

        Ok(Self {
            width,
            height: rows.len(),
            obstructed,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `cell` is inside the grid.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Whether `cell` is obstructed. Out-of-bounds cells report false.
    pub fn is_obstructed(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.obstructed[i])
    }

    /// Marks `cell` as obstructed or free.
    pub fn set_obstructed(&mut self, cell: Cell, obstructed: bool) -> Result<()> {
        let i = self.index(cell).ok_or(PathError::CellOutOfBounds {
            cell,
            width: self.width,
            height: self.height,
        })?;
        self.obstructed[i] = obstructed;
        Ok(())
    }

    /// Number of obstructed cells in the grid.
    pub fn obstructed_count(&self) -> usize {
        self.obstructed.iter().filter(|o| **o).count()
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if !cell.in_bounds(self.width, self.height) {
            return None;
        }
        // In-bounds coordinates are non-negative.
        Some(cell.y as usize * self.width + cell.x as usize)
    }
}

impl Passable for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_obstructed(&self, cell: Cell) -> bool {
        Grid::is_obstructed(self, cell)
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        Grid::in_bounds(self, cell)
    }
}

/// Parses a grid from text: one line per row, `.` for free cells and
/// `#` for obstructed ones. Whitespace inside a line and blank lines are
/// ignored, so the output of [render_path](crate::utils::render::render_path)
/// for an empty path parses back into the same grid.
impl FromStr for Grid {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows: Vec<Vec<u8>> = Vec::new();

        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            let row = rows.len();
            let values = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(column, c)| match c {
                    FREE_SYMBOL => Ok(0),
                    OBSTRUCTED_SYMBOL => Ok(1),
                    found => Err(PathError::InvalidCharacter { row, column, found }),
                })
                .collect::<Result<Vec<u8>>>()?;
            rows.push(values);
        }

        Grid::from_obstruction_rows(&rows[..])
    }
}
