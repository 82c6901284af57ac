use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use ruledeck_client::TelemetryClient;
use ruledeck_common::{AlertLevel, AlertThreshold, SystemStats};

use super::helpers;
use crate::output::{format_clock, level_paint, print_json, usage_bar, OutputMode};
use crate::poller::{Poller, ThresholdPanel};

const BAR_WIDTH: usize = 30;

#[derive(Args)]
pub struct WatchArgs {
    #[arg(long, help = "Override poll interval in milliseconds")]
    interval_ms: Option<u64>,
    #[arg(long, help = "Stop after this many renders")]
    count: Option<u64>,
}

pub async fn execute(
    args: WatchArgs,
    mode: OutputMode,
    server: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let cfg = helpers::resolve_config(server.as_deref(), config_path.as_deref())?;

    let telemetry = TelemetryClient::new(&cfg.server);
    let thresholds = match telemetry.thresholds().await {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(error = %e, "threshold fetch failed, falling back to defaults");
            AlertThreshold::default()
        }
    };
    let panel = ThresholdPanel::new(thresholds);

    let interval = Duration::from_millis(args.interval_ms.unwrap_or(cfg.poll.interval_ms));
    let (handle, mut rx) = Poller::spawn(TelemetryClient::new(&cfg.server), interval);

    let mut rendered = 0u64;
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *rx.borrow_and_update();
                if let Some(stats) = snapshot {
                    render(&stats, &panel, mode)?;
                    rendered += 1;
                    if args.count.is_some_and(|limit| rendered >= limit) {
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    handle.stop();
    Ok(())
}

fn render(stats: &SystemStats, panel: &ThresholdPanel, mode: OutputMode) -> Result<()> {
    let thresholds = panel.confirmed();
    let cpu = AlertLevel::for_cpu(stats, &thresholds);
    let memory = AlertLevel::for_memory(stats, &thresholds);

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "stats": stats,
            "thresholds": thresholds,
            "cpuLevel": cpu,
            "memoryLevel": memory,
        })),
        OutputMode::Human => {
            // Clear and re-home between renders.
            print!("\x1b[2J\x1b[H");
            println!("  {}", "System Monitor".bold());
            println!();
            render_metric("CPU", stats.cpu_usage, thresholds.cpu_threshold, cpu);
            render_metric("Memory", stats.memory_usage, thresholds.memory_threshold, memory);
            println!();
            println!("  Last updated: {}", format_clock(stats.timestamp));
            Ok(())
        }
    }
}

fn render_metric(label: &str, usage: f64, threshold: f64, level: AlertLevel) {
    println!(
        "  {:<7} {} {}  threshold {:.0}%",
        label,
        usage_bar(usage, level, BAR_WIDTH),
        level_paint(&format!("{usage:>5.1}%"), level),
        threshold
    );
}
