use crate::error::HeatmapError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A board coordinate. Rows grow "forward" for asymmetric pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Applies an offset, returning `None` if the coordinate would overflow.
    pub fn shifted(self, offset: Offset) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add(offset.row)?,
            col: self.col.checked_add(offset.col)?,
        })
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One atomic move of a piece, as a relative displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Offset {
    pub row: i32,
    pub col: i32,
}

impl Offset {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn scaled(self, factor: i32) -> Offset {
        Offset::new(self.row * factor, self.col * factor)
    }

    /// Chebyshev length of the displacement.
    pub fn range(self) -> i32 {
        self.row.abs().max(self.col.abs())
    }
}

impl From<(i32, i32)> for Offset {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Board dimensions. Both sides are always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bounds {
    rows: i32,
    cols: i32,
}

impl Bounds {
    pub fn new(rows: i32, cols: i32) -> Result<Self, HeatmapError> {
        if rows <= 0 || cols <= 0 {
            return Err(HeatmapError::InvalidGeometry(format!(
                "board dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self { rows, cols })
    }

    pub fn square(size: i32) -> Result<Self, HeatmapError> {
        Self::new(size, size)
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.rows / 2, self.cols / 2)
    }

    /// Longest straight-line distance a slider can usefully travel.
    pub fn max_extent(&self) -> i32 {
        self.rows.max(self.cols) - 1
    }

    pub(crate) fn index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row as usize * self.cols as usize + cell.col as usize)
        } else {
            None
        }
    }

    pub(crate) fn cell_at(&self, index: usize) -> Cell {
        let cols = self.cols as usize;
        Cell::new((index / cols) as i32, (index % cols) as i32)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
