//! # Jira API Endpoints
//!
//! The endpoint catalogue and URL resolution for the Jira REST API, plus the
//! per-resource operation implementations for fields, issues, and users.

pub mod fields;
pub mod issues;
pub mod users;

use crate::consts::API_PATH;
use crate::error::{ApiError, Result};

/// Logical operation identifiers for the supported Jira REST API calls.
///
/// Each identifier maps to a URL template under `/rest/api/2`; templates use
/// `{}` for positional path parameters, consumed left-to-right at resolution
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
  GetCurrentUser,
  GetFields,
  CreateCustomField,
  GetAllIssueFieldOptions,
  CreateIssueFieldOption,
  GetIssueFieldOption,
  UpdateIssueFieldOption,
  DeleteIssueFieldOption,
  ReplaceIssueFieldOption,
  GetSelectableIssueFieldOptions,
  GetVisibleIssueFieldOptions,
  GetIssue,
}

impl Endpoint {
  /// URL template for this operation, relative to the API root.
  pub(crate) const fn template(self) -> &'static str {
    match self {
      Endpoint::GetCurrentUser => "/myself",
      Endpoint::GetFields | Endpoint::CreateCustomField => "/field",
      Endpoint::GetAllIssueFieldOptions | Endpoint::CreateIssueFieldOption => "/field/{}/option",
      Endpoint::GetIssueFieldOption | Endpoint::UpdateIssueFieldOption | Endpoint::DeleteIssueFieldOption => {
        "/field/{}/option/{}"
      }
      Endpoint::ReplaceIssueFieldOption => "/field/{}/option/{}/issue",
      Endpoint::GetSelectableIssueFieldOptions => "/field/{}/option/suggestions/edit",
      Endpoint::GetVisibleIssueFieldOptions => "/field/{}/option/suggestions/search",
      Endpoint::GetIssue => "/issue/{}",
    }
  }

  /// Full URL for a parameter-free endpoint.
  pub(crate) fn url(self, base_url: &str) -> String {
    format!("{base_url}{API_PATH}{}", self.template())
  }

  /// Full URL with positional path parameters substituted left-to-right.
  ///
  /// Fails if the template has no placeholder slots, or if fewer parameters
  /// are supplied than the template has slots. Parameters beyond the slot
  /// count are ignored.
  pub(crate) fn url_with(self, base_url: &str, params: &[&str]) -> Result<String> {
    let template = self.template();
    let slots = template.matches("{}").count();
    if slots == 0 {
      return Err(ApiError::PathParamsNotAccepted { template });
    }
    if params.len() < slots {
      return Err(ApiError::MissingPathParams {
        template,
        expected: slots,
        supplied: params.len(),
      });
    }

    let mut url = String::with_capacity(base_url.len() + API_PATH.len() + template.len());
    url.push_str(base_url);
    url.push_str(API_PATH);

    let mut remaining = template;
    let mut params = params.iter();
    while let Some((head, tail)) = remaining.split_once("{}") {
      url.push_str(head);
      if let Some(param) = params.next() {
        url.push_str(param);
      }
      remaining = tail;
    }
    url.push_str(remaining);

    Ok(url)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const HOST: &str = "https://example.atlassian.net";

  #[test]
  fn test_parameter_free_urls() {
    assert_eq!(Endpoint::GetFields.url(HOST), "https://example.atlassian.net/rest/api/2/field");
    assert_eq!(
      Endpoint::GetCurrentUser.url(HOST),
      "https://example.atlassian.net/rest/api/2/myself"
    );
  }

  #[test]
  fn test_path_params_substitute_left_to_right() {
    let url = Endpoint::GetIssueFieldOption.url_with(HOST, &["boo", "who"]).unwrap();
    assert_eq!(url, "https://example.atlassian.net/rest/api/2/field/boo/option/who");

    let url = Endpoint::GetIssue.url_with(HOST, &["ABC-123"]).unwrap();
    assert_eq!(url, "https://example.atlassian.net/rest/api/2/issue/ABC-123");

    let url = Endpoint::ReplaceIssueFieldOption
      .url_with(HOST, &["customfield_10002", "42"])
      .unwrap();
    assert_eq!(
      url,
      "https://example.atlassian.net/rest/api/2/field/customfield_10002/option/42/issue"
    );
  }

  #[test]
  fn test_trailing_segment_after_last_slot() {
    let url = Endpoint::GetSelectableIssueFieldOptions
      .url_with(HOST, &["customfield_10002"])
      .unwrap();
    assert_eq!(
      url,
      "https://example.atlassian.net/rest/api/2/field/customfield_10002/option/suggestions/edit"
    );

    let url = Endpoint::GetVisibleIssueFieldOptions
      .url_with(HOST, &["customfield_10002"])
      .unwrap();
    assert_eq!(
      url,
      "https://example.atlassian.net/rest/api/2/field/customfield_10002/option/suggestions/search"
    );
  }

  #[test]
  fn test_path_params_rejected_for_parameter_free_endpoints() {
    for endpoint in [Endpoint::GetCurrentUser, Endpoint::GetFields, Endpoint::CreateCustomField] {
      let result = endpoint.url_with(HOST, &["extra"]);
      assert!(matches!(result, Err(ApiError::PathParamsNotAccepted { .. })));
    }
  }

  #[test]
  fn test_too_few_path_params() {
    match Endpoint::GetIssueFieldOption.url_with(HOST, &["only-one"]) {
      Err(ApiError::MissingPathParams {
        expected, supplied, ..
      }) => {
        assert_eq!(expected, 2);
        assert_eq!(supplied, 1);
      }
      other => panic!("expected arity error, got {other:?}"),
    }

    match Endpoint::GetIssue.url_with(HOST, &[]) {
      Err(ApiError::MissingPathParams {
        expected, supplied, ..
      }) => {
        assert_eq!(expected, 1);
        assert_eq!(supplied, 0);
      }
      other => panic!("expected arity error, got {other:?}"),
    }
  }
}
