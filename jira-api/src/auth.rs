//! Authentication helpers for the Jira client.
//!
//! These helpers centralize credential lookup and runtime construction so
//! that consumers can build a ready-to-use client from the environment
//! without wiring up credentials themselves.

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use url::Url;

use crate::client::{JiraClient, create_jira_client};

/// Environment variable storing the Jira host.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Environment variable storing the Jira account name.
pub const ENV_JIRA_USER: &str = "JIRA_USER";

/// Environment variable storing the Jira API token.
pub const ENV_JIRA_TOKEN: &str = "JIRA_TOKEN";

/// Get the $JIRA_HOST environment variable value with a proper URL scheme.
///
/// If the host doesn't include a scheme (http:// or https://), assumes
/// https://. Returns an error if the environment variable is not set.
pub fn resolve_jira_base_url() -> Result<String> {
  match std::env::var(ENV_JIRA_HOST) {
    Ok(host) => ensure_url_scheme(&host),
    Err(_) => Err(anyhow::anyhow!(
      "Jira host environment variable '{ENV_JIRA_HOST}' not set"
    )),
  }
}

/// Ensure a host string has a URL scheme and no trailing slash.
///
/// If the input doesn't include a scheme, assumes https://.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let candidate = if trimmed.contains("://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Failed to parse Jira host '{input}'"))?;
  if url.host_str().is_none() {
    return Err(anyhow::anyhow!("Jira host '{input}' has no host component"));
  }

  Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Creates an authenticated Jira client from $JIRA_HOST, $JIRA_USER, and
/// $JIRA_TOKEN.
pub fn create_jira_client_from_env() -> Result<JiraClient> {
  let base_url = resolve_jira_base_url()?;
  let username = std::env::var(ENV_JIRA_USER)
    .with_context(|| format!("Jira user environment variable '{ENV_JIRA_USER}' not set"))?;
  let api_token = std::env::var(ENV_JIRA_TOKEN)
    .with_context(|| format!("Jira token environment variable '{ENV_JIRA_TOKEN}' not set"))?;

  Ok(create_jira_client(&base_url, &username, &api_token))
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client() -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client_from_env()?;
  Ok((rt, client))
}
