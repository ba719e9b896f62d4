use crate::grid::Cell;
use rustc_hash::FxHashMap;

pub type PathResult = (Option<Vec<Cell>>, usize, f64);

pub fn reconstruct_path(parent_map: &FxHashMap<Cell, Cell>, start: Cell, target: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current_cell = target;

    while current_cell != start {
        path.push(current_cell);
        current_cell = parent_map[&current_cell];
    }

    path.push(start);
    path.reverse();
    path
}

/// Number of moves a path represents.
pub fn move_count(path: &[Cell]) -> usize {
    path.len().saturating_sub(1)
}
