//! # Jira API Clients
//!
//! Resource services for the Jira platform REST API (v2 and v3), the Jira
//! Software agile API and the Jira Service Management API. Every method goes
//! through the shared [`atlas_core::ApiClient`] transport and returns the
//! decoded value together with its [`atlas_core::ResponseEnvelope`].

mod client;
mod endpoints;
pub mod models;

// Re-export the clients
pub use client::{AgileClient, ApiVersion, JiraClient, ServiceDeskClient, create_jira_client};
// Re-export models
pub use models::{
  IssueOptions, JiraIssue, JiraIssueFields, JiraIssueStatus, JiraTransition, JiraTransitions, JiraUser, LabelPage,
  Organization, OrganizationPage, RequestAttachment, RequestAttachmentCreation, RequestAttachmentPage,
  ServerInformation, Sprint, SprintIssuePage, SprintPayload, TransitionId, TransitionRequest,
};
