use ruledeck_common::{AlertThreshold, SystemStats};

use crate::error::{check_status, ClientError};

/// Typed access to the engine's monitoring endpoints. Same failure contract
/// as the rule client: one attempt, no retries.
pub struct TelemetryClient {
    base_url: String,
    http: reqwest::Client,
}

impl TelemetryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn stats(&self) -> Result<SystemStats, ClientError> {
        let resp = self
            .http
            .get(format!("{}/monitoring/stats", self.base_url))
            .send()
            .await?;
        check_status(&resp)?;
        Ok(resp.json().await?)
    }

    pub async fn thresholds(&self) -> Result<AlertThreshold, ClientError> {
        let resp = self
            .http
            .get(format!("{}/monitoring/thresholds", self.base_url))
            .send()
            .await?;
        check_status(&resp)?;
        Ok(resp.json().await?)
    }

    pub async fn set_thresholds(&self, thresholds: &AlertThreshold) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/monitoring/thresholds", self.base_url))
            .json(thresholds)
            .send()
            .await?;
        check_status(&resp)
    }
}
