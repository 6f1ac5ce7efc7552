//! Client for the Jira issue tracker.

pub mod error;
pub mod jira;

pub use error::ApiError;
pub use jira::{Issue, JiraClient};
