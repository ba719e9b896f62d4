use heatmap_core::{Bounds, Cell, HeatmapError, format_position, parse_obstacles, parse_position, parse_size};

#[test]
fn test_parse_numeric_position() {
    assert_eq!(parse_position("4,4"), Ok(Cell::new(4, 4)));
    assert_eq!(parse_position(" 2 , 7 "), Ok(Cell::new(2, 7)));
    assert_eq!(parse_position("0,-1"), Ok(Cell::new(0, -1)));
}

#[test]
fn test_parse_algebraic_position() {
    assert_eq!(parse_position("e4"), Ok(Cell::new(3, 4)));
    assert_eq!(parse_position("a1"), Ok(Cell::new(0, 0)));
    assert_eq!(parse_position("H8"), Ok(Cell::new(7, 7)));
    assert_eq!(parse_position("d4"), Ok(Cell::new(3, 3)));
}

#[test]
fn test_parse_algebraic_position_with_two_digit_rank() {
    assert_eq!(parse_position("j10"), Ok(Cell::new(9, 9)));
}

#[test]
fn test_parse_obstacle_list() {
    assert_eq!(
        parse_obstacles("3,5;7,5"),
        Ok(vec![Cell::new(3, 5), Cell::new(7, 5)])
    );
    assert_eq!(
        parse_obstacles("3,4; 4,3 ;;e5;"),
        Ok(vec![Cell::new(3, 4), Cell::new(4, 3), Cell::new(4, 4)])
    );
    assert_eq!(parse_obstacles(""), Ok(vec![]));
}

#[test]
fn test_parse_square_and_rectangular_sizes() {
    assert_eq!(parse_size("8"), Bounds::square(8));
    assert_eq!(parse_size("10x6"), Bounds::new(10, 6));
    assert_eq!(parse_size(" 12X12 "), Bounds::new(12, 12));
}

#[test]
fn test_format_position_round_trips() {
    let cell = Cell::new(6, 2);
    assert_eq!(parse_position(&format_position(cell)), Ok(cell));
}

#[test]
fn test_errors_are_geometry_errors() {
    assert!(matches!(parse_position("zz"), Err(HeatmapError::InvalidGeometry(_))));
    assert!(matches!(parse_size("big"), Err(HeatmapError::InvalidGeometry(_))));
    assert!(matches!(parse_obstacles("1,1;oops"), Err(HeatmapError::InvalidGeometry(_))));
}
