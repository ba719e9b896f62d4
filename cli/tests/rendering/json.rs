use crate::heatmap;
use piece_heatmap::json_output::create_json_output;
use serde_json::json;

#[test]
fn test_json_output_shape() {
    let result = heatmap(&["wazir", "--size", "3", "-o", "0,1", "-t", "0,2", "--json"]);
    let value = serde_json::to_value(create_json_output(&result)).unwrap();

    assert_eq!(value["query"]["piece"], "Wazir");
    assert_eq!(value["query"]["category"], "fairy");
    assert_eq!(value["query"]["board"], json!({"rows": 3, "cols": 3}));
    assert_eq!(value["query"]["start"], json!({"row": 1, "col": 1}));
    assert_eq!(value["result"]["distances"], json!([[2, -2, 2], [1, 0, 1], [2, 1, 2]]));
    assert_eq!(value["result"]["reachable"], 8);
    assert_eq!(value["result"]["open_squares"], 8);
    assert_eq!(value["result"]["max_distance"], 2);
    assert_eq!(value["result"]["path"]["found"], true);
    assert_eq!(value["result"]["path"]["moves"], 2);
    assert_eq!(value["stats"]["cells_explored"].as_u64().map(|n| n > 0), Some(true));
}

#[test]
fn test_json_output_without_target_omits_path() {
    let result = heatmap(&["king", "--size", "5"]);
    let value = serde_json::to_value(create_json_output(&result)).unwrap();

    assert!(value["query"].get("target").is_none());
    assert!(value["result"].get("path").is_none());
    assert!(value["stats"].get("search_time_ms").is_none());
}

#[test]
fn test_json_output_reports_missing_path() {
    let result = heatmap(&["bishop", "-p", "0,0", "-t", "0,1"]);
    let value = serde_json::to_value(create_json_output(&result)).unwrap();

    assert_eq!(value["result"]["path"], json!({"found": false}));
}
