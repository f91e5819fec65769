//! Jira issue endpoints.

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::client::{JiraClient, parse_response};
use crate::endpoints::Endpoint;
use crate::error::Result;

impl JiraClient {
  /// Get a Jira issue by id or key
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, issue_id_or_key: &str) -> Result<Value> {
    let url = Endpoint::GetIssue.url_with(&self.base_url, &[issue_id_or_key])?;

    let response = self.request(Method::GET, &url).send().await?;

    parse_response(response).await
  }
}
