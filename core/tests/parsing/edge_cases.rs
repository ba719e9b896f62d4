use heatmap_core::{HeatmapError, parse_position, parse_size};

#[test]
fn test_position_rejects_malformed_pairs() {
    assert!(parse_position("1,").is_err());
    assert!(parse_position(",1").is_err());
    assert!(parse_position("1,2,3").is_err());
    assert!(parse_position("a,b").is_err());
    assert!(parse_position("").is_err());
}

#[test]
fn test_position_rejects_bad_algebraic_notation() {
    assert!(parse_position("e").is_err());
    assert!(parse_position("4e").is_err());
    assert!(parse_position("e4x").is_err());
    assert!(parse_position("é4").is_err());
}

#[test]
fn test_size_rejects_non_positive_dimensions() {
    assert!(matches!(parse_size("0"), Err(HeatmapError::InvalidGeometry(_))));
    assert!(matches!(parse_size("8x0"), Err(HeatmapError::InvalidGeometry(_))));
    assert!(matches!(parse_size("-3"), Err(HeatmapError::InvalidGeometry(_))));
}

#[test]
fn test_size_rejects_malformed_text() {
    assert!(parse_size("8x").is_err());
    assert!(parse_size("x8").is_err());
    assert!(parse_size("8x8x8").is_err());
}

#[test]
fn test_error_message_names_the_input() {
    let error = parse_position("nowhere").unwrap_err();
    assert!(error.to_string().contains("nowhere"));
}
