mod event;
pub(crate) mod helpers;
mod rules;
mod thresholds;
mod version;
mod watch;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    Rules(rules::RulesCmd),
    #[command(subcommand)]
    Event(event::EventCmd),
    #[command(subcommand)]
    Thresholds(thresholds::ThresholdsCmd),
    Watch(watch::WatchArgs),
    Version,
}

pub async fn run(opts: crate::Opts) -> Result<()> {
    let mode = opts.output_mode();
    match opts.cmd {
        Commands::Rules(cmd) => rules::execute(cmd, mode, opts.server, opts.config).await,
        Commands::Event(cmd) => event::execute(cmd, mode, opts.server, opts.config).await,
        Commands::Thresholds(cmd) => {
            thresholds::execute(cmd, mode, opts.server, opts.config).await
        }
        Commands::Watch(args) => watch::execute(args, mode, opts.server, opts.config).await,
        Commands::Version => {
            version::execute(mode);
            Ok(())
        }
    }
}
