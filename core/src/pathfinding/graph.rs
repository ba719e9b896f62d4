use crate::error::{HeatmapError, StartProblem};
use crate::grid::{Bounds, Cell, Offset};
use rustc_hash::FxHashSet;

/// Implicit move graph: a cell's neighbours are the cells one offset away
/// that lie on the board and are not blocked.
pub struct MoveGraph<'a> {
    bounds: Bounds,
    offsets: &'a [Offset],
    obstacles: FxHashSet<Cell>,
}

impl<'a> MoveGraph<'a> {
    pub fn new(bounds: Bounds, offsets: &'a [Offset], obstacles: &[Cell]) -> Self {
        let obstacles = obstacles
            .iter()
            .copied()
            .filter(|&cell| bounds.contains(cell))
            .collect();

        Self {
            bounds,
            offsets,
            obstacles,
        }
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.obstacles.iter().copied()
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.bounds.contains(cell) && !self.obstacles.contains(&cell)
    }

    pub fn validate_start(&self, start: Cell) -> Result<(), HeatmapError> {
        let reason = if !self.bounds.contains(start) {
            StartProblem::OutOfBounds
        } else if self.obstacles.contains(&start) {
            StartProblem::OnObstacle
        } else {
            return Ok(());
        };

        Err(HeatmapError::InvalidStart {
            cell: start,
            reason,
        })
    }

    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.offsets
            .iter()
            .filter_map(move |&offset| cell.shifted(offset))
            .filter(|&next| self.is_open(next))
    }
}
