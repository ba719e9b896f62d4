mod colors;
mod json;

use clap::Parser;
use piece_heatmap::{Args, HeatmapResult, create_heatmap_request, execute_heatmap};

fn args(argv: &[&str]) -> Args {
    Args::parse_from(std::iter::once("piece-heatmap").chain(argv.iter().copied()))
}

fn heatmap(argv: &[&str]) -> HeatmapResult<'static> {
    let request = create_heatmap_request(args(argv), heatmap_core::catalog()).unwrap();
    execute_heatmap(request).unwrap()
}
