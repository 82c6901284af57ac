use anyhow::{Context, Result};

use crate::config::{self, ConsoleConfig};

pub fn resolve_config(
    server_flag: Option<&str>,
    config_path: Option<&str>,
) -> Result<ConsoleConfig> {
    config::resolve(server_flag, config_path).context("resolving console configuration")
}

/// Inline JSON or a path to a file containing it. Returns the raw text
/// unparsed so the single parse gate stays in the event client.
pub fn read_payload_arg(data: &str) -> Result<String> {
    if std::path::Path::new(data).exists() {
        std::fs::read_to_string(data).with_context(|| format!("reading payload file {data}"))
    } else {
        Ok(data.to_string())
    }
}
