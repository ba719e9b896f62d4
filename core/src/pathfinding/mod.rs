pub mod bfs;
pub mod distance_field;
pub mod graph;
pub mod shortest_path;
pub mod utils;

// Re-export the public functions
pub use bfs::compute_distance_field;
pub use distance_field::{DistanceField, OBSTACLE, UNREACHABLE};
pub use graph::MoveGraph;
pub use shortest_path::{find_shortest_path, find_shortest_path_with_stats};
pub use utils::{PathResult, move_count};
