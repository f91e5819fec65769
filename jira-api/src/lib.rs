//! # Jira API Client
//!
//! Provides Jira REST API integration for issue retrieval, custom field
//! discovery, and field-option management, sharing one authenticated HTTP
//! session across all operations.

pub mod auth;
mod client;
mod consts;
mod endpoints;
mod error;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export the error taxonomy
pub use error::{ApiError, Result};
// Re-export models
pub use models::JiraAuth;
