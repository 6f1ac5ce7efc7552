//! Integration tests against a real Jira instance.
//!
//! Disabled by default; they need credentials and a reachable tracker.
//!
//! ## Environment Variables
//!
//! - `JBRANCH_JIRA_TEST_ENABLED=true`: Required to run any of these
//! - `JBRANCH_TEST_BASE_URL`: Jira instance base URL
//! - `JBRANCH_TEST_USERNAME`: Jira user name
//! - `JBRANCH_TEST_TOKEN`: Jira API token
//! - `JBRANCH_TEST_ISSUE`: An issue ID that exists on the instance
//!
//! ## Running Tests
//!
//! ```bash
//! JBRANCH_JIRA_TEST_ENABLED=true \
//!     JBRANCH_TEST_BASE_URL=https://example.atlassian.net \
//!     JBRANCH_TEST_USERNAME=dev@example.com \
//!     JBRANCH_TEST_TOKEN=... \
//!     JBRANCH_TEST_ISSUE=APP-1 \
//!     cargo test --test jira_integration
//! ```

use std::env;

use jbranch::api::{ApiError, JiraClient};

fn jira_tests_enabled() -> bool {
    env::var("JBRANCH_JIRA_TEST_ENABLED")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

macro_rules! skip_if_not_configured {
    () => {
        if !jira_tests_enabled() {
            eprintln!("Skipping: set JBRANCH_JIRA_TEST_ENABLED=true to run");
            return;
        }
    };
}

fn client_from_env() -> JiraClient {
    JiraClient::new(
        &env::var("JBRANCH_TEST_BASE_URL").expect("JBRANCH_TEST_BASE_URL not set"),
        &env::var("JBRANCH_TEST_USERNAME").expect("JBRANCH_TEST_USERNAME not set"),
        &env::var("JBRANCH_TEST_TOKEN").expect("JBRANCH_TEST_TOKEN not set"),
    )
    .expect("failed to build client from test environment")
}

#[test]
fn test_fetch_known_issue() {
    skip_if_not_configured!();

    let issue_id = env::var("JBRANCH_TEST_ISSUE").expect("JBRANCH_TEST_ISSUE not set");
    let issue = client_from_env().get_issue(&issue_id).unwrap();

    assert_eq!(issue.key, issue_id);
    assert!(!issue.summary.is_empty());
}

#[test]
fn test_unknown_issue_maps_to_not_found() {
    skip_if_not_configured!();

    let err = client_from_env().get_issue("NOPE-999999").unwrap_err();
    assert!(matches!(err, ApiError::IssueNotFound { .. }));
}

#[test]
fn test_bad_token_maps_to_auth_error() {
    skip_if_not_configured!();

    let base_url = env::var("JBRANCH_TEST_BASE_URL").expect("JBRANCH_TEST_BASE_URL not set");
    let issue_id = env::var("JBRANCH_TEST_ISSUE").expect("JBRANCH_TEST_ISSUE not set");

    let client = JiraClient::new(&base_url, "nobody@example.com", "wrong-token").unwrap();
    let err = client.get_issue(&issue_id).unwrap_err();
    assert!(err.is_auth_error());
}
