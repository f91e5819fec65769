/// Represents Jira authentication credentials
#[derive(Clone, Debug)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}
