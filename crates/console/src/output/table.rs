use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};

use ruledeck_common::Rule;

pub fn build_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(cells);
    table
}

pub fn rule_table(rules: &[Rule]) -> Table {
    let mut table = build_table(&["ID", "Condition", "Action"]);
    for rule in rules {
        table.add_row(vec![
            rule.id.as_str(),
            rule.condition.as_str(),
            rule.action.as_str(),
        ]);
    }
    table
}
