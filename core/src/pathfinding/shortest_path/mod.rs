mod state;

use super::graph::MoveGraph;
use super::utils::PathResult;
use crate::error::HeatmapError;
use crate::grid::{Bounds, Cell, Offset};
use state::BfsState;
use std::time::Instant;
use tracing::debug;

/// One shortest sequence of cells from `start` to `target`, both inclusive.
///
/// Returns `Ok(None)` when the target cannot be reached, including targets
/// off the board or on an obstacle. `start == target` yields `[start]`.
pub fn find_shortest_path(
    bounds: Bounds,
    offsets: &[Offset],
    start: Cell,
    target: Cell,
    obstacles: &[Cell],
) -> Result<Option<Vec<Cell>>, HeatmapError> {
    let (path, _, _) = find_shortest_path_with_stats(bounds, offsets, start, target, obstacles)?;
    Ok(path)
}

/// Like [`find_shortest_path`], also reporting cells visited and search time.
pub fn find_shortest_path_with_stats(
    bounds: Bounds,
    offsets: &[Offset],
    start: Cell,
    target: Cell,
    obstacles: &[Cell],
) -> Result<PathResult, HeatmapError> {
    let graph = MoveGraph::new(bounds, offsets, obstacles);
    graph.validate_start(start)?;

    let search_timer = Instant::now();

    if !graph.is_open(target) {
        debug!(target_cell = %target, "target can never be discovered");
        return Ok((None, 0, search_timer.elapsed().as_secs_f64()));
    }

    let mut bfs_state = BfsState::new(start);
    let path = bfs_state.find_path_to_target(target, &graph);

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(
        start = %start,
        target_cell = %target,
        found = path.is_some(),
        visited = bfs_state.visited.len(),
        elapsed_secs = elapsed_time,
        "shortest path search finished"
    );

    Ok((path, bfs_state.visited.len(), elapsed_time))
}
