//! Jira field and field-option endpoints.
//!
//! Covers custom field discovery plus the field-option management calls. The
//! payloads of the write operations are passed through as raw JSON, matching
//! the schema-free response contract of the wrapper.

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::client::{JiraClient, parse_response};
use crate::endpoints::Endpoint;
use crate::error::Result;

impl JiraClient {
  /// Get all fields, system and custom
  #[instrument(skip(self), level = "debug")]
  pub async fn get_fields(&self) -> Result<Value> {
    let url = Endpoint::GetFields.url(&self.base_url);

    let response = self.request(Method::GET, &url).send().await?;

    parse_response(response).await
  }

  /// Create a custom field
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create_custom_field(&self, payload: &Value) -> Result<Value> {
    let url = Endpoint::CreateCustomField.url(&self.base_url);

    let response = self.request(Method::POST, &url).json(payload).send().await?;

    parse_response(response).await
  }

  /// Get all options of a select-list custom field
  #[instrument(skip(self), level = "debug")]
  pub async fn get_all_issue_field_options(&self, field_key: &str) -> Result<Value> {
    let url = Endpoint::GetAllIssueFieldOptions.url_with(&self.base_url, &[field_key])?;

    let response = self.request(Method::GET, &url).send().await?;

    parse_response(response).await
  }

  /// Create an option for a select-list custom field
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create_issue_field_option(&self, field_key: &str, payload: &Value) -> Result<Value> {
    let url = Endpoint::CreateIssueFieldOption.url_with(&self.base_url, &[field_key])?;

    let response = self.request(Method::POST, &url).json(payload).send().await?;

    parse_response(response).await
  }

  /// Get a single option of a select-list custom field
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_field_option(&self, field_key: &str, option_id: &str) -> Result<Value> {
    let url = Endpoint::GetIssueFieldOption.url_with(&self.base_url, &[field_key, option_id])?;

    let response = self.request(Method::GET, &url).send().await?;

    parse_response(response).await
  }

  /// Update an option of a select-list custom field
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn update_issue_field_option(&self, field_key: &str, option_id: &str, payload: &Value) -> Result<Value> {
    let url = Endpoint::UpdateIssueFieldOption.url_with(&self.base_url, &[field_key, option_id])?;

    let response = self.request(Method::PUT, &url).json(payload).send().await?;

    parse_response(response).await
  }

  /// Delete an option of a select-list custom field
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_issue_field_option(&self, field_key: &str, option_id: &str) -> Result<Value> {
    let url = Endpoint::DeleteIssueFieldOption.url_with(&self.base_url, &[field_key, option_id])?;

    let response = self.request(Method::DELETE, &url).send().await?;

    parse_response(response).await
  }

  /// Deselect an option from all issues where it is selected
  #[instrument(skip(self), level = "debug")]
  pub async fn replace_issue_field_option(&self, field_key: &str, option_id: &str) -> Result<Value> {
    let url = Endpoint::ReplaceIssueFieldOption.url_with(&self.base_url, &[field_key, option_id])?;

    let response = self.request(Method::POST, &url).send().await?;

    parse_response(response).await
  }

  /// Get the options a user can set on an issue, for edit screens
  #[instrument(skip(self), level = "debug")]
  pub async fn get_selectable_issue_field_options(&self, field_key: &str) -> Result<Value> {
    let url = Endpoint::GetSelectableIssueFieldOptions.url_with(&self.base_url, &[field_key])?;

    let response = self.request(Method::GET, &url).send().await?;

    parse_response(response).await
  }

  /// Get the options visible to a user, for search screens
  #[instrument(skip(self), level = "debug")]
  pub async fn get_visible_issue_field_options(&self, field_key: &str) -> Result<Value> {
    let url = Endpoint::GetVisibleIssueFieldOptions.url_with(&self.base_url, &[field_key])?;

    let response = self.request(Method::GET, &url).send().await?;

    parse_response(response).await
  }
}
