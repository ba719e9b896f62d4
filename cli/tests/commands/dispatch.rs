use crate::args;
use heatmap_core::Category;
use piece_heatmap::display::format_unknown_category;
use piece_heatmap::{ColorScheme, Command, HeatmapApp, parse_command};

#[test]
fn test_default_arguments() {
    let parsed = args(&["knight"]);

    assert_eq!(parsed.piece.as_deref(), Some("knight"));
    assert_eq!(parsed.size, "8");
    assert_eq!(parsed.width, 3);
    assert!(parsed.position.is_none());
    assert!(!parsed.json);
}

#[test]
fn test_heatmap_is_the_default_command() {
    assert_eq!(parse_command(&args(&["knight"])), Ok(Command::Heatmap));
    assert_eq!(parse_command(&args(&["knight", "--info"])), Ok(Command::Info));
}

#[test]
fn test_list_without_category() {
    assert_eq!(parse_command(&args(&["--list"])), Ok(Command::List(None)));
}

#[test]
fn test_list_with_category() {
    assert_eq!(
        parse_command(&args(&["--list", "Shogi"])),
        Ok(Command::List(Some(Category::Shogi)))
    );
}

#[test]
fn test_list_with_unknown_category() {
    assert_eq!(
        parse_command(&args(&["--list", "checkers"])),
        Ok(Command::UnknownCategory("checkers".to_string()))
    );
    assert_eq!(
        format_unknown_category("checkers"),
        vec![
            "Unknown category: checkers",
            "Available categories: standard, fairy, xiangqi, shogi"
        ]
    );
}

#[test]
fn test_unknown_category_is_not_an_error() {
    let parsed = args(&["--list", "checkers"]);

    assert_eq!(HeatmapApp::new().run(parsed, &ColorScheme::new(false)), Ok(()));
}

#[test]
fn test_search_command() {
    assert_eq!(
        parse_command(&args(&["--search", "dragon"])),
        Ok(Command::Search("dragon".to_string()))
    );
}

#[test]
fn test_missing_piece_name() {
    let error = parse_command(&args(&["--size", "10"])).unwrap_err();

    assert!(error.contains("piece name is required"));
}
