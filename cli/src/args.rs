use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "piece-heatmap")]
#[command(about = "Generate movement heatmaps for chess pieces")]
#[command(after_help = "Examples:
  piece-heatmap knight --size 8 --position e4
  piece-heatmap \"flying ox\" --size 12 --position 6,6
  piece-heatmap rook --size 10 --position 5,5 --obstacles \"3,5;7,5\"
  piece-heatmap knight --position 0,0 --target 7,7
  piece-heatmap --list fairy
  piece-heatmap --search dragon")]
pub struct Args {
    /// Name of the chess piece
    pub piece: Option<String>,

    /// Board size, e.g. 8 or 10x6
    #[arg(short, long, value_name = "SIZE", default_value = "8")]
    pub size: String,

    /// Starting position, e.g. e4 or 4,4 (default: board centre)
    #[arg(short, long, value_name = "POSITION")]
    pub position: Option<String>,

    /// Obstacle positions separated by semicolons, e.g. "3,5;7,5"
    #[arg(short, long, value_name = "POSITIONS")]
    pub obstacles: Option<String>,

    /// Also find a shortest path to this position
    #[arg(short, long, value_name = "POSITION")]
    pub target: Option<String>,

    /// Cell width for display
    #[arg(short, long, value_name = "WIDTH", default_value = "3")]
    pub width: usize,

    /// Don't show the movement count legend
    #[arg(long)]
    pub no_legend: bool,

    /// List available pieces, optionally by category
    #[arg(short, long, value_name = "CATEGORY", num_args = 0..=1, default_missing_value = "all")]
    pub list: Option<String>,

    /// Search for pieces containing a term
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Show detailed information about the piece
    #[arg(short, long)]
    pub info: bool,

    /// Output the heatmap as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the heatmap
    #[arg(short, long)]
    pub quiet: bool,
}
