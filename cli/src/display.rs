use heatmap_core::{
    Bounds, Category, Cell, DistanceField, OBSTACLE, Piece, PieceCatalog, UNREACHABLE, move_count,
};
use rustc_hash::FxHashSet;

use crate::colors::ColorScheme;
use crate::search::{HeatmapResult, PathSearch};
use crate::utils::{format_number, format_path, format_reachable};

const OFFSETS_PER_LINE: usize = 4;

/// Plain text for one heatmap cell, right-aligned to `width`.
pub fn format_cell(value: i32, width: usize) -> String {
    let symbol = match value {
        UNREACHABLE => "-".to_string(),
        OBSTACLE => "X".to_string(),
        distance => distance.to_string(),
    };
    format!("{:>width$}", symbol, width = width)
}

/// One line per board row. Padding is applied before coloring so escape
/// codes never disturb alignment.
pub fn format_heatmap_rows(
    field: &DistanceField,
    width: usize,
    path: Option<&[Cell]>,
    colors: &ColorScheme,
) -> Vec<String> {
    let path_cells: FxHashSet<Cell> = path
        .map(|cells| cells.iter().skip(1).copied().collect())
        .unwrap_or_default();
    let start = field.start();

    field
        .rows()
        .enumerate()
        .map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(|(col, &value)| {
                    let cell = Cell::new(row as i32, col as i32);
                    let text = format_cell(value, width);
                    if cell != start && path_cells.contains(&cell) {
                        colors.path(&text).to_string()
                    } else {
                        colors.distance(&text, value).to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn display_heatmap_result(result: &HeatmapResult<'_>, colors: &ColorScheme) {
    let options = &result.display_options;
    let path = result
        .path_search
        .as_ref()
        .and_then(|search| search.path.as_deref());

    if !options.quiet {
        display_header(result, colors);
        println!();
    }

    for line in format_heatmap_rows(&result.field, options.width, path, colors) {
        println!("{}", line);
    }

    if !options.quiet && !options.no_legend {
        println!();
        display_legend(result, colors);
    }

    if let Some(search) = &result.path_search {
        println!();
        display_path_report(search, result.field.start(), colors);
    }

    if options.verbose {
        display_search_statistics(result, colors);
    }
}

fn display_header(result: &HeatmapResult<'_>, colors: &ColorScheme) {
    let bounds = result.field.bounds();
    println!(
        "{} on {} board",
        colors.piece_name(&result.piece.name.to_uppercase()),
        colors.heading(&bounds.to_string())
    );
    println!("Starting position: {}", result.field.start());

    let obstacles: Vec<String> = result.config.obstacles.iter().map(Cell::to_string).collect();
    if !obstacles.is_empty() {
        println!("Obstacles: {}", obstacles.join(", "));
    }
}

/// Legend and totals printed under the heatmap.
pub fn format_legend_lines(result: &HeatmapResult<'_>, colors: &ColorScheme) -> Vec<String> {
    let mut lines = vec![
        colors.heading("Legend:").to_string(),
        format!("  {} = starting position", colors.distance("0", 0)),
        "  N = minimum moves to reach square".to_string(),
        format!("  {} = unreachable", colors.distance("-", UNREACHABLE)),
    ];
    if !result.config.obstacles.is_empty() {
        lines.push(format!("  {} = obstacle", colors.distance("X", OBSTACLE)));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total movement options: {}",
        colors.number(&result.offset_count.to_string())
    ));
    lines.push(format!(
        "Reachable squares: {}",
        format_reachable(
            result.field.reachable_count(),
            result.config.open_cell_count()
        )
    ));
    lines
}

fn display_legend(result: &HeatmapResult<'_>, colors: &ColorScheme) {
    for line in format_legend_lines(result, colors) {
        println!("{}", line);
    }
}

pub fn format_path_report(search: &PathSearch, start: Cell) -> Vec<String> {
    match &search.path {
        Some(path) => vec![
            format!("Shortest path: {} moves", move_count(path)),
            format_path(path),
        ],
        None => vec![format!("No path from {} to {}", start, search.target)],
    }
}

fn display_path_report(search: &PathSearch, start: Cell, colors: &ColorScheme) {
    let lines = format_path_report(search, start);
    for (index, line) in lines.iter().enumerate() {
        if search.path.is_none() {
            println!("{}", colors.error(line));
        } else if index == 0 {
            println!("{}", colors.success(line));
        } else {
            println!("{}", line);
        }
    }
}

fn display_search_statistics(result: &HeatmapResult<'_>, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Filled {} squares in {} sec",
        colors.stats("Distance field:"),
        colors.number(&format_number(result.field.reachable_count())),
        colors.number(&format!("{:.4}", result.field_duration))
    );
    if let Some(max) = result.field.max_distance() {
        println!(
            "{} {}",
            colors.stats("Farthest square:"),
            colors.number(&format!("{} moves", max))
        );
    }
    if let Some(search) = &result.path_search {
        println!(
            "{} Explored {} squares in {} sec",
            colors.stats("Path search:"),
            colors.number(&format_number(search.cells_visited)),
            colors.number(&format!("{:.4}", search.search_duration))
        );
    }
}

pub fn display_piece_list(catalog: &PieceCatalog, category: Option<Category>, colors: &ColorScheme) {
    let categories: Vec<Category> = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    let total: usize = categories
        .iter()
        .map(|&category| catalog.by_category(category).len())
        .sum();
    println!("{} ({})", colors.heading("Available pieces"), total);

    for category in categories {
        println!();
        println!("{}:", colors.category(&title_case(category.as_str())));
        for piece in catalog.by_category(category) {
            println!("  {}", piece.name);
        }
    }
}

pub fn format_unknown_category(name: &str) -> Vec<String> {
    let available: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    vec![
        format!("Unknown category: {}", name),
        format!("Available categories: {}", available.join(", ")),
    ]
}

pub fn display_unknown_category(name: &str, colors: &ColorScheme) {
    let lines = format_unknown_category(name);
    println!("{}", colors.error(&lines[0]));
    println!("{}", lines[1]);
}

pub fn display_search_matches(term: &str, matches: &[&Piece], colors: &ColorScheme) {
    if matches.is_empty() {
        println!("{}", colors.error(&format!("No pieces found matching '{}'", term)));
        return;
    }

    println!("Pieces matching '{}':", term);
    for piece in matches {
        println!(
            "  {} {}",
            colors.piece_name(piece.name),
            colors.category(&format!("({})", piece.category.as_str()))
        );
    }
}

pub fn format_piece_info(piece: &Piece, bounds: Bounds) -> Vec<String> {
    let offsets = piece.offsets(bounds);
    let mut lines = vec![
        piece.name.to_uppercase(),
        format!("Category: {}", piece.category.as_str()),
        format!("Movement options on {} board: {}", bounds, offsets.len()),
        format!("Maximum range: {}", piece.max_range(bounds)),
    ];

    if !offsets.is_empty() {
        lines.push("Offsets:".to_string());
        for chunk in offsets.chunks(OFFSETS_PER_LINE) {
            let row: Vec<String> = chunk
                .iter()
                .map(|offset| format!("({:+},{:+})", offset.row, offset.col))
                .collect();
            lines.push(format!("  {}", row.join("  ")));
        }
    }

    lines
}

pub fn display_piece_info(piece: &Piece, bounds: Bounds, colors: &ColorScheme) {
    let lines = format_piece_info(piece, bounds);
    for (index, line) in lines.iter().enumerate() {
        if index == 0 {
            println!("{}", colors.piece_name(line));
        } else {
            println!("{}", line);
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
