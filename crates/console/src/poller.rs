//! Recurring stats fetch plus the confirmed/draft threshold pair.
//!
//! The poller publishes each snapshot through a watch channel; a failed tick
//! leaves the last good snapshot in place and polling continues. Alert levels
//! are derived at render time from the snapshot and the confirmed thresholds,
//! never stored here.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use ruledeck_client::TelemetryClient;
use ruledeck_common::{AlertThreshold, SystemStats};

/// Two copies of the thresholds: what the server last acknowledged and what
/// the operator is typing. Outside of edit mode the two are equal.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdPanel {
    confirmed: AlertThreshold,
    draft: AlertThreshold,
    editing: bool,
}

impl ThresholdPanel {
    pub fn new(confirmed: AlertThreshold) -> Self {
        Self {
            confirmed,
            draft: confirmed,
            editing: false,
        }
    }

    /// Alert evaluation and display read this copy only.
    pub fn confirmed(&self) -> AlertThreshold {
        self.confirmed
    }

    pub fn draft(&self) -> AlertThreshold {
        self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Server-confirmed values arriving outside an edit (the initial fetch)
    /// replace both copies; mid-edit they leave the draft alone.
    pub fn replace_confirmed(&mut self, thresholds: AlertThreshold) {
        self.confirmed = thresholds;
        if !self.editing {
            self.draft = thresholds;
        }
    }

    pub fn begin_edit(&mut self) {
        self.draft = self.confirmed;
        self.editing = true;
    }

    pub fn set_cpu(&mut self, value: f64) {
        if self.editing {
            self.draft.cpu_threshold = value;
        }
    }

    pub fn set_memory(&mut self, value: f64) {
        if self.editing {
            self.draft.memory_threshold = value;
        }
    }

    /// What a set-thresholds call should carry; None outside edit mode.
    pub fn commit_payload(&self) -> Option<AlertThreshold> {
        self.editing.then_some(self.draft)
    }

    pub fn finish_commit(&mut self) {
        self.confirmed = self.draft;
        self.editing = false;
    }

    /// Set call failed: edit stays open with the attempted draft intact,
    /// confirmed values untouched.
    pub fn fail_commit(&mut self) {}

    pub fn cancel_edit(&mut self) {
        self.draft = self.confirmed;
        self.editing = false;
    }
}

/// Owns the background tick task. `stop` aborts it; dropping the handle does
/// the same, so the timer cannot outlive its owner on any exit path. An
/// in-flight request is not interrupted, but its result lands in the watch
/// channel and is dropped there once every receiver is gone.
pub struct PollerHandle {
    handle: JoinHandle<()>,
}

impl PollerHandle {
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct Poller;

impl Poller {
    /// Fetches immediately, then repeats at `interval`. Each successful tick
    /// replaces the published snapshot wholesale; failures are logged and
    /// skipped. The loop ends when the last receiver is dropped.
    pub fn spawn(
        client: TelemetryClient,
        interval: Duration,
    ) -> (PollerHandle, watch::Receiver<Option<SystemStats>>) {
        let (tx, rx) = watch::channel(None);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match client.stats().await {
                    Ok(stats) => {
                        if tx.send(Some(stats)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "stats poll failed, keeping last snapshot");
                        if tx.is_closed() {
                            break;
                        }
                    }
                }
            }
        });
        (PollerHandle { handle }, rx)
    }
}
