use super::distance_field::{DistanceField, OBSTACLE, UNREACHABLE};
use super::graph::MoveGraph;
use crate::error::HeatmapError;
use crate::grid::{Bounds, Cell, Offset};
use std::{collections::VecDeque, time::Instant};
use tracing::debug;

/// Minimum number of moves from `start` to every cell of the board.
///
/// Obstacle cells read as [`OBSTACLE`], cells the piece can never land on
/// as [`UNREACHABLE`]. Fails before any traversal if `start` is off the
/// board or blocked.
pub fn compute_distance_field(
    bounds: Bounds,
    offsets: &[Offset],
    start: Cell,
    obstacles: &[Cell],
) -> Result<DistanceField, HeatmapError> {
    let graph = MoveGraph::new(bounds, offsets, obstacles);
    graph.validate_start(start)?;

    let search_timer = Instant::now();
    let mut field = DistanceField::new(bounds, start);
    for obstacle in graph.obstacles() {
        field.set(obstacle, OBSTACLE);
    }

    let mut queue = VecDeque::new();
    field.set(start, 0);
    queue.push_back((start, 0));

    while let Some((current_cell, current_distance)) = queue.pop_front() {
        for neighbor in graph.neighbors(current_cell) {
            if field.get(neighbor) == UNREACHABLE {
                field.set(neighbor, current_distance + 1);
                queue.push_back((neighbor, current_distance + 1));
            }
        }
    }

    debug!(
        board = %bounds,
        start = %start,
        offsets = offsets.len(),
        reached = field.reachable_count(),
        elapsed_secs = search_timer.elapsed().as_secs_f64(),
        "distance field computed"
    );

    Ok(field)
}
