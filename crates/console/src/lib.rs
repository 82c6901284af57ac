pub mod cmd;
pub mod config;
pub mod output;
pub mod poller;
pub mod reconciler;

#[cfg(test)]
mod tests;

use clap::Parser;
use cmd::Commands;
use output::OutputMode;

#[derive(Parser)]
#[command(name = "ruledeck", version, about = "Operator console for a remote rule engine")]
pub struct Opts {
    #[clap(subcommand)]
    pub cmd: Commands,

    #[arg(long, global = true, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Engine base URL (overrides config)")]
    pub server: Option<String>,

    #[arg(long, global = true, help = "Path to console config file")]
    pub config: Option<String>,
}

impl Opts {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}
