use heatmap_core::{
    Cell, DistanceField, HeatmapConfig, HeatmapError, Offset, Piece, PieceCatalog, PieceLookup,
    StartProblem, compute_distance_field, find_shortest_path_with_stats, parse_obstacles,
    parse_position, parse_size,
};
use std::time::Instant;
use tracing::debug;

use crate::args::Args;

pub struct HeatmapRequest<'a> {
    pub piece: &'a Piece,
    pub config: HeatmapConfig,
    pub offsets: Vec<Offset>,
    pub search_args: Args,
}

pub struct PathSearch {
    pub target: Cell,
    pub path: Option<Vec<Cell>>,
    pub cells_visited: usize,
    pub search_duration: f64,
}

pub struct HeatmapResult<'a> {
    pub piece: &'a Piece,
    pub config: HeatmapConfig,
    pub offset_count: usize,
    pub field: DistanceField,
    pub field_duration: f64,
    pub path_search: Option<PathSearch>,
    pub display_options: Args,
}

pub fn resolve_piece<'a>(query: &str, catalog: &'a PieceCatalog) -> Result<&'a Piece, String> {
    match catalog.lookup(query) {
        PieceLookup::Found(piece) => Ok(piece),
        PieceLookup::Ambiguous(names) => {
            let listing: Vec<String> = names.iter().map(|name| format!("  {}", name)).collect();
            Err(format!(
                "Multiple pieces match '{}':\n{}\n\nPlease be more specific.",
                query,
                listing.join("\n")
            ))
        }
        PieceLookup::NotFound => Err(format!(
            "Unknown piece: '{}'\nUse --list to see available pieces or --search to find pieces",
            query
        )),
    }
}

pub fn create_heatmap_request<'a>(
    args: Args,
    catalog: &'a PieceCatalog,
) -> Result<HeatmapRequest<'a>, String> {
    let piece_name = args
        .piece
        .as_deref()
        .ok_or("piece name is required (use --list to see available pieces)")?;
    let piece = resolve_piece(piece_name, catalog)?;

    let config = build_config(&args)?;
    let offsets = piece.offsets(config.bounds);
    debug!(
        piece = piece.name,
        board = %config.bounds,
        offsets = offsets.len(),
        "heatmap request built"
    );

    Ok(HeatmapRequest {
        piece,
        config,
        offsets,
        search_args: args,
    })
}

pub fn build_config(args: &Args) -> Result<HeatmapConfig, String> {
    let bounds = parse_size(&args.size).map_err(describe_error)?;
    let mut config = HeatmapConfig::new(bounds);

    if let Some(position) = &args.position {
        config = config.with_start(parse_position(position).map_err(describe_error)?);
    }

    if let Some(obstacles) = &args.obstacles {
        config = config.with_obstacles(parse_obstacles(obstacles).map_err(describe_error)?);
    }

    if let Some(target) = &args.target {
        let target = parse_position(target).map_err(describe_error)?;
        if !bounds.contains(target) {
            return Err(format!("Target {} is outside the {} board", target, bounds));
        }
        config = config.with_target(target);
    }

    config.validate().map_err(|error| match error {
        HeatmapError::InvalidStart {
            cell,
            reason: StartProblem::OutOfBounds,
        } => format!("Position {} is outside the {} board", cell, bounds),
        HeatmapError::InvalidStart {
            cell,
            reason: StartProblem::OnObstacle,
        } => format!("Cannot place obstacle at starting position {}", cell),
        other => describe_error(other),
    })?;

    Ok(config)
}

pub fn execute_heatmap(request: HeatmapRequest<'_>) -> Result<HeatmapResult<'_>, String> {
    let start = request.config.start_cell();
    let bounds = request.config.bounds;

    let field_timer = Instant::now();
    let field = compute_distance_field(bounds, &request.offsets, start, &request.config.obstacles)
        .map_err(describe_error)?;
    let field_duration = field_timer.elapsed().as_secs_f64();

    let path_search = match request.config.target {
        Some(target) => {
            let (path, cells_visited, search_duration) = find_shortest_path_with_stats(
                bounds,
                &request.offsets,
                start,
                target,
                &request.config.obstacles,
            )
            .map_err(describe_error)?;

            Some(PathSearch {
                target,
                path,
                cells_visited,
                search_duration,
            })
        }
        None => None,
    };

    Ok(HeatmapResult {
        piece: request.piece,
        config: request.config,
        offset_count: request.offsets.len(),
        field,
        field_duration,
        path_search,
        display_options: request.search_args,
    })
}

pub fn describe_error(error: HeatmapError) -> String {
    match error {
        HeatmapError::InvalidGeometry(message) => capitalize(&message),
        other => capitalize(&other.to_string()),
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
