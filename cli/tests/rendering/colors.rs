use piece_heatmap::ColorScheme;

#[test]
fn test_color_scheme_keeps_text() {
    let colors = ColorScheme::new(true);

    assert!(colors.piece_name("KNIGHT").to_string().contains("KNIGHT"));
    assert!(colors.path("  3").to_string().contains("  3"));
    assert!(colors.success("Shortest path").to_string().contains("Shortest path"));
    assert!(colors.error("Error").to_string().contains("Error"));
    assert!(colors.category("shogi").to_string().contains("shogi"));
    assert!(colors.number("123").to_string().contains("123"));
    assert!(colors.stats("Stats").to_string().contains("Stats"));
}

#[test]
fn test_every_distance_band_keeps_text() {
    let colors = ColorScheme::new(true);

    for value in [-2, -1, 0, 1, 2, 3, 17] {
        let text = format!("{:>3}", value);
        assert!(colors.distance(&text, value).to_string().contains(&text));
    }
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    assert_eq!(colors.distance("  0", 0).to_string(), "  0");
    assert_eq!(colors.distance("  X", -2).to_string(), "  X");
    assert_eq!(colors.path("  1").to_string(), "  1");
    assert_eq!(colors.heading("Legend:").to_string(), "Legend:");
}
