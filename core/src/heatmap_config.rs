use crate::error::{HeatmapError, StartProblem};
use crate::grid::{Bounds, Cell};

/// Board setup for a heatmap query.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub bounds: Bounds,
    /// Defaults to the board centre when unset.
    pub start: Option<Cell>,
    pub obstacles: Vec<Cell>,
    pub target: Option<Cell>,
}

impl HeatmapConfig {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            start: None,
            obstacles: Vec::new(),
            target: None,
        }
    }

    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_obstacles(mut self, obstacles: Vec<Cell>) -> Self {
        self.obstacles = obstacles;
        self
    }

    pub fn with_target(mut self, target: Cell) -> Self {
        self.target = Some(target);
        self
    }

    pub fn start_cell(&self) -> Cell {
        self.start.unwrap_or_else(|| self.bounds.center())
    }

    /// Stricter than the search itself: obstacles must lie on the board and
    /// the start must be on the board and free.
    pub fn validate(&self) -> Result<(), HeatmapError> {
        let start = self.start_cell();
        if !self.bounds.contains(start) {
            return Err(HeatmapError::InvalidStart {
                cell: start,
                reason: StartProblem::OutOfBounds,
            });
        }

        for &obstacle in &self.obstacles {
            if !self.bounds.contains(obstacle) {
                return Err(HeatmapError::InvalidGeometry(format!(
                    "obstacle at {} is outside the {} board",
                    obstacle, self.bounds
                )));
            }
            if obstacle == start {
                return Err(HeatmapError::InvalidStart {
                    cell: start,
                    reason: StartProblem::OnObstacle,
                });
            }
        }

        Ok(())
    }

    /// Squares that could hold the piece at all.
    pub fn open_cell_count(&self) -> usize {
        let mut obstacles: Vec<Cell> = self
            .obstacles
            .iter()
            .copied()
            .filter(|&cell| self.bounds.contains(cell))
            .collect();
        obstacles.sort_unstable();
        obstacles.dedup();
        self.bounds.cell_count() - obstacles.len()
    }
}
