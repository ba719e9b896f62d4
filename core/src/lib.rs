pub mod error;
pub mod grid;
pub mod heatmap_config;
pub mod parsing;
pub mod pathfinding;
pub mod pieces;
pub mod string_normalization;

// Re-export commonly used items
pub use error::{HeatmapError, StartProblem};
pub use grid::{Bounds, Cell, Offset};
pub use heatmap_config::HeatmapConfig;
pub use parsing::{format_position, parse_obstacles, parse_position, parse_size};
pub use pathfinding::{
    DistanceField, OBSTACLE, UNREACHABLE, compute_distance_field, find_shortest_path,
    find_shortest_path_with_stats, move_count,
};
pub use pieces::{Category, Piece, PieceCatalog, PieceLookup, catalog};
