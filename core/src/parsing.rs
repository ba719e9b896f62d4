use crate::error::HeatmapError;
use crate::grid::{Bounds, Cell};

/// Parses `"row,col"` or algebraic notation such as `"e4"` (file -> column,
/// rank -> row, both zero-based).
pub fn parse_position(input: &str) -> Result<Cell, HeatmapError> {
    let text = input.trim().to_lowercase();

    if let Some((row, col)) = text.split_once(',') {
        return match (row.trim().parse::<i32>(), col.trim().parse::<i32>()) {
            (Ok(row), Ok(col)) => Ok(Cell::new(row, col)),
            _ => Err(invalid_position(input)),
        };
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(file) if file.is_ascii_lowercase() => {
            let rank = chars.as_str();
            if rank.is_empty() || !rank.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid_position(input));
            }
            let rank: i32 = rank.parse().map_err(|_| invalid_position(input))?;
            Ok(Cell::new(rank - 1, file as i32 - 'a' as i32))
        }
        _ => Err(invalid_position(input)),
    }
}

/// Parses `;`-separated positions, skipping empty entries.
pub fn parse_obstacles(input: &str) -> Result<Vec<Cell>, HeatmapError> {
    input
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_position)
        .collect()
}

/// Parses `"8"` (square board) or `"10x6"` (rows x cols).
pub fn parse_size(input: &str) -> Result<Bounds, HeatmapError> {
    let text = input.trim().to_lowercase();
    let invalid = || HeatmapError::InvalidGeometry(format!("invalid size format: {}", input.trim()));

    match text.split_once('x') {
        Some((rows, cols)) => {
            let rows = rows.trim().parse::<i32>().map_err(|_| invalid())?;
            let cols = cols.trim().parse::<i32>().map_err(|_| invalid())?;
            Bounds::new(rows, cols)
        }
        None => {
            let size = text.parse::<i32>().map_err(|_| invalid())?;
            Bounds::square(size)
        }
    }
}

/// Formats a cell in the `row,col` notation accepted by [`parse_position`].
pub fn format_position(cell: Cell) -> String {
    format!("{},{}", cell.row, cell.col)
}

fn invalid_position(input: &str) -> HeatmapError {
    HeatmapError::InvalidGeometry(format!(
        "invalid position format: {}. Use 'e4' or '4,4' format",
        input.trim()
    ))
}
