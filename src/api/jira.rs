//! Jira REST client for fetching issue summaries.

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use super::error::ApiError;

const USER_AGENT: &str = concat!("jbranch/", env!("CARGO_PKG_VERSION"));

/// A single issue fetched from the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Tracker-assigned key, e.g. "APP-123"
    pub key: String,
    /// Ticket title
    pub summary: String,
}

// Response types for API deserialization
#[derive(Debug, Deserialize)]
struct IssueResponse {
    key: String,
    fields: FieldsResponse,
}

#[derive(Debug, Deserialize)]
struct FieldsResponse {
    summary: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(rename = "errorMessages", default)]
    error_messages: Vec<String>,
}

/// Jira API client authenticated via basic auth (username + API token).
#[derive(Debug)]
pub struct JiraClient {
    base_url: Url,
    username: String,
    token: String,
    client: Client,
}

impl JiraClient {
    /// Create a client for the given Jira instance.
    ///
    /// Fails when the base URL does not parse or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, username: &str, token: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ApiError::invalid_base_url(base_url, err.to_string()))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ApiError::network(err.to_string()))?;

        Ok(Self {
            base_url,
            username: username.to_string(),
            token: token.to_string(),
            client,
        })
    }

    /// Fetch a single issue by its tracker ID (e.g. "APP-123").
    pub fn get_issue(&self, id: &str) -> Result<Issue, ApiError> {
        let url = self.issue_url(id);
        debug!(%url, "Fetching issue");

        let response = self
            .client
            .get(url.as_str())
            .basic_auth(&self.username, Some(&self.token))
            .header("Accept", "application/json")
            .send()
            .map_err(|err| ApiError::network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
                StatusCode::FORBIDDEN => ApiError::Forbidden,
                StatusCode::NOT_FOUND => ApiError::issue_not_found(id),
                StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited {
                    retry_after_secs: retry_after_secs(&response),
                },
                _ => {
                    let body = response.text().unwrap_or_default();
                    ApiError::http(status.as_u16(), error_message(&body))
                }
            });
        }

        let issue: IssueResponse = response
            .json()
            .map_err(|err| ApiError::http(status.as_u16(), format!("Parse error: {err}")))?;

        debug!(key = %issue.key, "Fetched issue");

        Ok(Issue {
            key: issue.key,
            summary: issue.fields.summary,
        })
    }

    fn issue_url(&self, id: &str) -> String {
        format!(
            "{}/rest/api/2/issue/{}",
            self.base_url.as_str().trim_end_matches('/'),
            id
        )
    }
}

/// Parse the Retry-After header of a 429 response, when present.
fn retry_after_secs(response: &reqwest::blocking::Response) -> Option<u64> {
    response
        .headers()
        .get("Retry-After")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

/// Extract Jira's errorMessages from an error body, falling back to the
/// raw body text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .filter(|parsed| !parsed.error_messages.is_empty())
        .map_or_else(|| body.to_string(), |parsed| parsed.error_messages.join("; "))
}
