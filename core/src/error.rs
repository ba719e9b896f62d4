use crate::grid::Cell;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeatmapError {
    /// The start cell is off the board or sits on an obstacle.
    #[error("invalid start {cell}: {reason}")]
    InvalidStart { cell: Cell, reason: StartProblem },
    /// Non-positive board dimensions or a malformed coordinate pair.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartProblem {
    OutOfBounds,
    OnObstacle,
}

impl std::fmt::Display for StartProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartProblem::OutOfBounds => write!(f, "outside the board"),
            StartProblem::OnObstacle => write!(f, "occupied by an obstacle"),
        }
    }
}
