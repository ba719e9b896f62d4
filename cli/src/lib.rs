pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::{Command, HeatmapApp, parse_command};
pub use args::Args;
pub use colors::ColorScheme;
pub use search::{HeatmapRequest, HeatmapResult, create_heatmap_request, execute_heatmap};
pub use utils::format_number;
