//! # atlas
//!
//! Atlassian Cloud REST clients sharing one transport core. The transport,
//! authentication and response envelope live in [`atlas_core`] and are
//! re-exported at the crate root; product services are grouped by module.
//!
//! ```no_run
//! use atlas::{RequestContext, jira};
//!
//! # async fn run() -> atlas::Result<()> {
//! let client = jira::create_jira_client("https://your-domain.atlassian.net", "me@example.com", "token")?;
//! let (issue, response) = client.get_issue(&RequestContext::new(), "KP-1", &["summary"], &[]).await?;
//! assert_eq!(issue.key, "KP-1");
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

pub use atlas_core::*;

/// Jira platform, Jira Software and Jira Service Management clients
pub mod jira {
  pub use atlas_jira::*;
}

/// Confluence clients
pub mod confluence {
  pub use atlas_confluence::*;
}
