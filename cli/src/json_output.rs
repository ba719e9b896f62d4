use heatmap_core::{Bounds, Category, Cell, move_count};
use serde::Serialize;

use crate::search::HeatmapResult;

#[derive(Serialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonQuery {
    pub piece: String,
    pub category: Category,
    pub board: Bounds,
    pub start: Cell,
    pub obstacles: Vec<Cell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Cell>,
}

#[derive(Serialize)]
pub struct JsonResult {
    pub movement_options: usize,
    pub reachable: usize,
    pub open_squares: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<u32>,
    pub distances: Vec<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<JsonPath>,
}

#[derive(Serialize)]
pub struct JsonPath {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<Cell>>,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub field_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_time_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells_explored: Option<usize>,
}

pub fn create_json_output(result: &HeatmapResult<'_>) -> JsonOutput {
    let field = &result.field;
    let search = result.path_search.as_ref();

    JsonOutput {
        query: JsonQuery {
            piece: result.piece.name.to_string(),
            category: result.piece.category,
            board: field.bounds(),
            start: field.start(),
            obstacles: result.config.obstacles.clone(),
            target: result.config.target,
        },
        result: JsonResult {
            movement_options: result.offset_count,
            reachable: field.reachable_count(),
            open_squares: result.config.open_cell_count(),
            max_distance: field.max_distance(),
            distances: field.to_rows(),
            path: search.map(|search| JsonPath {
                found: search.path.is_some(),
                moves: search.path.as_deref().map(move_count),
                cells: search.path.clone(),
            }),
        },
        stats: JsonStats {
            field_time_ms: result.field_duration * 1000.0,
            search_time_ms: search.map(|search| search.search_duration * 1000.0),
            cells_explored: search.map(|search| search.cells_visited),
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
