use crate::error::{check_status, ClientError};

/// Sends operator-composed synthetic events to the engine. The payload is
/// parsed client-side first; malformed input never reaches the wire.
pub struct EventClient {
    base_url: String,
    http: reqwest::Client,
}

impl EventClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn trigger(&self, raw: &str) -> Result<(), ClientError> {
        let payload: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| ClientError::Parse(e.to_string()))?;

        let resp = self
            .http
            .post(format!("{}/event", self.base_url))
            .json(&payload)
            .send()
            .await?;
        check_status(&resp)
    }
}
