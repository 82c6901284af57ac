use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

/// Blocking failure notice for mutating operations: previous state was kept,
/// the operator decides what to do next.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn print_info(label: &str, value: &str) {
    println!("  {}: {}", label.bold(), value);
}
