mod dispatch;

use clap::Parser;
use piece_heatmap::Args;

fn args(argv: &[&str]) -> Args {
    Args::parse_from(std::iter::once("piece-heatmap").chain(argv.iter().copied()))
}
