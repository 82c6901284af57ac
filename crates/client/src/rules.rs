use ruledeck_common::Rule;

use crate::error::{check_status, ClientError};

/// Typed access to the engine's rule endpoints. Single attempt per call;
/// failures surface to the caller unchanged.
pub struct RuleClient {
    base_url: String,
    http: reqwest::Client,
}

impl RuleClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// An empty vec is a valid result, not an error.
    pub async fn list(&self) -> Result<Vec<Rule>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/rules", self.base_url))
            .send()
            .await?;
        check_status(&resp)?;
        Ok(resp.json().await?)
    }

    pub async fn create(&self, rule: &Rule) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/rules", self.base_url))
            .json(rule)
            .send()
            .await?;
        check_status(&resp)
    }

    pub async fn update(&self, rule: &Rule) -> Result<(), ClientError> {
        let resp = self
            .http
            .put(format!("{}/rules", self.base_url))
            .json(rule)
            .send()
            .await?;
        check_status(&resp)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(format!("{}/rules", self.base_url))
            .query(&[("id", id)])
            .send()
            .await?;
        check_status(&resp)
    }
}
