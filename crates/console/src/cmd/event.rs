use anyhow::Result;
use clap::Subcommand;

use ruledeck_client::{ClientError, EventClient};

use super::helpers;
use crate::output::{print_error, print_json, spinner, OutputMode};

#[derive(Subcommand)]
pub enum EventCmd {
    Send(SendArgs),
}

#[derive(clap::Args)]
pub struct SendArgs {
    #[arg(long, help = "JSON file path or inline JSON")]
    data: String,
}

pub async fn execute(
    cmd: EventCmd,
    mode: OutputMode,
    server: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let cfg = helpers::resolve_config(server.as_deref(), config_path.as_deref())?;
    match cmd {
        EventCmd::Send(args) => send(&cfg.server, args, mode).await,
    }
}

async fn send(base: &str, args: SendArgs, mode: OutputMode) -> Result<()> {
    let raw = helpers::read_payload_arg(&args.data)?;
    let client = EventClient::new(base);

    let sp = match mode {
        OutputMode::Human => Some(spinner::create("Triggering event...")),
        OutputMode::Json => None,
    };

    match client.trigger(&raw).await {
        Ok(()) => {
            if let Some(sp) = sp {
                spinner::finish_ok(&sp, "Event triggered");
            }
            if mode == OutputMode::Json {
                print_json(&serde_json::json!({"triggered": true}))?;
            }
            Ok(())
        }
        Err(ClientError::Parse(e)) => {
            if let Some(sp) = sp {
                spinner::finish_clear(&sp);
            }
            print_error("Event payload is not valid JSON; nothing was sent.");
            anyhow::bail!("parse: {e}");
        }
        Err(e) => {
            if let Some(sp) = sp {
                spinner::finish_err(&sp, "Event delivery failed");
            }
            anyhow::bail!("event rejected: {e}");
        }
    }
}
