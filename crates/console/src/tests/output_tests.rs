use crate::output::{build_table, print_json, rule_table, OutputMode};
use ruledeck_common::Rule;

#[test]
fn output_modes_compare() {
    assert_eq!(OutputMode::Json, OutputMode::Json);
    assert_ne!(OutputMode::Json, OutputMode::Human);
}

#[test]
fn print_json_valid() {
    let val = serde_json::json!({"key": "value"});
    assert!(print_json(&val).is_ok());
}

#[test]
fn build_table_renders_headers() {
    let table = build_table(&["A", "B"]);
    let rendered = table.to_string();
    assert!(rendered.contains('A'));
    assert!(rendered.contains('B'));
}

#[test]
fn rule_table_renders_all_three_columns() {
    let rules = vec![Rule {
        id: "r1".into(),
        condition: "temp > 40".into(),
        action: "alert('hi')".into(),
    }];
    let rendered = rule_table(&rules).to_string();
    assert!(rendered.contains("r1"));
    assert!(rendered.contains("temp > 40"));
    assert!(rendered.contains("alert('hi')"));
}
