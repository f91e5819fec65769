//! Error types for the Jira API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when interacting with the Jira API.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Path parameters were supplied for an endpoint that does not take any.
  #[error("endpoint '{template}' does not accept path parameters")]
  PathParamsNotAccepted {
    /// URL template of the misused endpoint.
    template: &'static str,
  },

  /// Fewer path parameters were supplied than the endpoint's template
  /// requires. Substitution is all-or-nothing.
  #[error("endpoint '{template}' expects {expected} path parameter(s), {supplied} supplied")]
  MissingPathParams {
    /// URL template of the endpoint.
    template: &'static str,
    /// Number of placeholder slots in the template.
    expected: usize,
    /// Number of parameters actually supplied.
    supplied: usize,
  },

  /// The server answered with a client or server error status.
  #[error("HTTP {status}: {body}")]
  Status {
    /// Status code of the response.
    status: StatusCode,
    /// Raw response body text.
    body: String,
  },

  /// Network or HTTP error.
  #[error("Network error: {0}")]
  Network(#[from] reqwest::Error),

  /// A success response carried a body that is not valid JSON.
  #[error("Invalid JSON in response body: {0}")]
  Decode(#[from] serde_json::Error),
}

/// Result type for Jira API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
