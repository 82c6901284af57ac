use anyhow::Result;
use clap::Subcommand;

use ruledeck_client::TelemetryClient;

use super::helpers;
use crate::output::{print_error, print_info, print_json, print_success, OutputMode};
use crate::poller::ThresholdPanel;

#[derive(Subcommand)]
pub enum ThresholdsCmd {
    Show,
    Set(SetArgs),
}

#[derive(clap::Args)]
pub struct SetArgs {
    #[arg(long, help = "CPU usage threshold, percent")]
    cpu: Option<f64>,
    #[arg(long, help = "Memory usage threshold, percent")]
    memory: Option<f64>,
}

pub async fn execute(
    cmd: ThresholdsCmd,
    mode: OutputMode,
    server: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let cfg = helpers::resolve_config(server.as_deref(), config_path.as_deref())?;
    let client = TelemetryClient::new(&cfg.server);
    match cmd {
        ThresholdsCmd::Show => show(&client, mode).await,
        ThresholdsCmd::Set(args) => set(&client, args, mode).await,
    }
}

async fn show(client: &TelemetryClient, mode: OutputMode) -> Result<()> {
    let thresholds = client.thresholds().await?;
    match mode {
        OutputMode::Json => print_json(&thresholds)?,
        OutputMode::Human => {
            print_info("CPU threshold", &format!("{:.0}%", thresholds.cpu_threshold));
            print_info(
                "Memory threshold",
                &format!("{:.0}%", thresholds.memory_threshold),
            );
        }
    }
    Ok(())
}

async fn set(client: &TelemetryClient, args: SetArgs, mode: OutputMode) -> Result<()> {
    if args.cpu.is_none() && args.memory.is_none() {
        anyhow::bail!("nothing to set: pass --cpu and/or --memory");
    }

    let confirmed = client.thresholds().await?;
    let mut panel = ThresholdPanel::new(confirmed);
    panel.begin_edit();
    if let Some(cpu) = args.cpu {
        panel.set_cpu(cpu);
    }
    if let Some(memory) = args.memory {
        panel.set_memory(memory);
    }
    let Some(payload) = panel.commit_payload() else {
        anyhow::bail!("no threshold edit open");
    };

    match client.set_thresholds(&payload).await {
        Ok(()) => {
            panel.finish_commit();
            let applied = panel.confirmed();
            match mode {
                OutputMode::Json => print_json(&applied)?,
                OutputMode::Human => print_success(&format!(
                    "Thresholds updated: CPU {:.0}%, memory {:.0}%",
                    applied.cpu_threshold, applied.memory_threshold
                )),
            }
            Ok(())
        }
        Err(e) => {
            panel.fail_commit();
            print_error(&format!(
                "Threshold update failed; server still at CPU {:.0}%, memory {:.0}% (attempted CPU {:.0}%, memory {:.0}%)",
                panel.confirmed().cpu_threshold,
                panel.confirmed().memory_threshold,
                panel.draft().cpu_threshold,
                panel.draft().memory_threshold,
            ));
            anyhow::bail!("set-thresholds rejected: {e}");
        }
    }
}
