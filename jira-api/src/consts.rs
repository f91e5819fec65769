//! Constants for the jira-api client.

/// Root path of the Jira REST API v2 under the configured host
pub(crate) const API_PATH: &str = "/rest/api/2";

/// User-Agent header value for the Jira API client
pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the Jira API
pub(crate) const ACCEPT: &str = "application/json";
