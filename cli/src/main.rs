use clap::Parser;
use piece_heatmap::logging::init_logging;
use piece_heatmap::{Args, ColorScheme, HeatmapApp};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color && !args.json);
    let app = HeatmapApp::new();

    if let Err(error_message) = app.run(args, &colors) {
        eprintln!("{}", colors.error(&format!("Error: {}", error_message)));
        std::process::exit(1);
    }
}
