mod alertfmt;
pub mod confirm;
mod format;
pub mod spinner;
mod table;

pub use alertfmt::{format_clock, level_paint, usage_bar};
pub use format::{print_error, print_info, print_json, print_success, OutputMode};
pub use table::{build_table, rule_table};
