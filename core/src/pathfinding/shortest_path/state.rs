use super::super::graph::MoveGraph;
use super::super::utils::reconstruct_path;
use crate::grid::Cell;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

pub struct BfsState {
    start: Cell,
    queue: VecDeque<Cell>,
    pub visited: FxHashSet<Cell>,
    parent_map: FxHashMap<Cell, Cell>,
}

impl BfsState {
    pub fn new(start: Cell) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            start,
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: Cell, current: Cell) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.queue.push_back(neighbor);
        }
    }

    pub fn find_path_to_target(&mut self, target: Cell, graph: &MoveGraph<'_>) -> Option<Vec<Cell>> {
        while let Some(current_cell) = self.queue.pop_front() {
            if current_cell == target {
                return Some(reconstruct_path(&self.parent_map, self.start, target));
            }

            for neighbor in graph.neighbors(current_cell) {
                self.visit_neighbor(neighbor, current_cell);
            }
        }

        None
    }
}
