//! Jira user endpoints.

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::client::{JiraClient, parse_response};
use crate::endpoints::Endpoint;
use crate::error::Result;

impl JiraClient {
  /// Get the currently authenticated user
  #[instrument(skip(self), level = "debug")]
  pub async fn get_current_user(&self) -> Result<Value> {
    let url = Endpoint::GetCurrentUser.url(&self.base_url);

    let response = self.request(Method::GET, &url).send().await?;

    parse_response(response).await
  }
}
