//! Error types for the Jira client.

use std::fmt;

/// Errors that can occur when talking to the issue tracker.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Configured base URL does not parse
    InvalidBaseUrl { url: String, message: String },
    /// 401 Unauthorized - username or API token rejected
    Unauthorized,
    /// 403 Forbidden - credentials lack permission for the issue
    Forbidden,
    /// 404 Not Found - no issue with the requested ID
    IssueNotFound { issue: String },
    /// 429 Rate Limited
    RateLimited { retry_after_secs: Option<u64> },
    /// Network or timeout error
    Network { message: String },
    /// Other HTTP errors
    Http { status: u16, message: String },
}

impl ApiError {
    /// Check if this is an authentication error (401 or 403)
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Forbidden)
    }

    /// Create an invalid base URL error
    pub fn invalid_base_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::InvalidBaseUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error for an issue ID
    pub fn issue_not_found(issue: impl Into<String>) -> Self {
        ApiError::IssueNotFound {
            issue: issue.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    /// Create an HTTP error
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidBaseUrl { url, message } => {
                write!(f, "jira: invalid base URL {url:?} - {message}")
            }
            ApiError::Unauthorized => {
                write!(f, "jira: Unauthorized (401) - check username and API token")
            }
            ApiError::Forbidden => {
                write!(f, "jira: Forbidden (403) - insufficient permissions")
            }
            ApiError::IssueNotFound { issue } => {
                write!(f, "jira: issue {issue} not found")
            }
            ApiError::RateLimited { retry_after_secs } => {
                if let Some(secs) = retry_after_secs {
                    write!(f, "jira: rate limited - retry after {secs}s")
                } else {
                    write!(f, "jira: rate limited")
                }
            }
            ApiError::Network { message } => {
                write!(f, "jira: network error - {message}")
            }
            ApiError::Http { status, message } => {
                write!(f, "jira: HTTP {status} - {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
