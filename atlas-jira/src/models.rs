use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a Jira user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  pub account_id: Option<String>,
  pub account_type: Option<String>,
  pub email_address: Option<String>,
  pub display_name: Option<String>,
  #[serde(default)]
  pub active: bool,
  pub time_zone: Option<String>,
  pub locale: Option<String>,
  /// Present when `groups` is expanded
  pub groups: Option<JiraGroups>,
  /// Present when `applicationRoles` is expanded
  pub application_roles: Option<Value>,
}

/// Expanded group membership of a user
#[derive(Debug, Clone, Deserialize)]
pub struct JiraGroups {
  pub size: u32,
  #[serde(default)]
  pub items: Vec<JiraGroup>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraGroup {
  pub name: String,
  pub group_id: Option<String>,
}

/// Represents the Jira instance information
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInformation {
  pub base_url: String,
  pub version: String,
  #[serde(default)]
  pub version_numbers: Vec<u32>,
  pub deployment_type: Option<String>,
  pub build_number: Option<u64>,
  pub build_date: Option<String>,
  pub server_time: Option<String>,
  pub scm_info: Option<String>,
  pub server_title: Option<String>,
}

/// Represents a Jira issue
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
  pub id: String,
  pub key: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssueFields {
  pub summary: Option<String>,
  /// A string in v2, an Atlassian Document Format tree in v3
  pub description: Option<Value>,
  pub status: Option<JiraIssueStatus>,
  pub assignee: Option<JiraUser>,
  #[serde(default)]
  pub labels: Vec<String>,
  /// Custom and non-modelled fields, keyed by field id
  #[serde(flatten)]
  pub other: BTreeMap<String, Value>,
}

/// Represents a Jira issue status
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueStatus {
  pub id: Option<String>,
  pub name: String,
  pub status_category: Option<JiraStatusCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraStatusCategory {
  pub id: u32,
  pub key: String,
  pub name: String,
}

/// Represents a Jira transition
#[derive(Debug, Clone, Deserialize)]
pub struct JiraTransition {
  pub id: String,
  pub name: String,
  pub to: Option<JiraIssueStatus>,
}

/// Represents a list of Jira transitions
#[derive(Debug, Clone, Deserialize)]
pub struct JiraTransitions {
  pub transitions: Vec<JiraTransition>,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}

/// Payload of the assignee endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssigneeRequest<'a> {
  pub account_id: &'a str,
}

/// A page of label names
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPage {
  pub start_at: u32,
  pub max_results: u32,
  pub total: u32,
  pub is_last: bool,
  pub values: Vec<String>,
}

/// Represents a Jira Software sprint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
  pub id: u64,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub state: String,
  pub name: String,
  pub start_date: Option<String>,
  pub end_date: Option<String>,
  pub complete_date: Option<String>,
  pub origin_board_id: Option<u64>,
  pub goal: Option<String>,
}

/// Create/update payload for a sprint; unset fields are omitted
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintPayload {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub origin_board_id: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub goal: Option<String>,
}

/// Filters for issue listings of agile resources
#[derive(Debug, Clone)]
pub struct IssueOptions {
  pub jql: String,
  pub expand: Vec<String>,
  pub fields: Vec<String>,
  pub validate_query: bool,
}

impl Default for IssueOptions {
  fn default() -> Self {
    Self {
      jql: String::new(),
      expand: Vec::new(),
      fields: Vec::new(),
      validate_query: true,
    }
  }
}

/// A page of issues belonging to a sprint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintIssuePage {
  pub expand: Option<String>,
  pub start_at: u32,
  pub max_results: u32,
  pub total: u32,
  pub issues: Vec<JiraIssue>,
}

/// Represents a Jira Service Management organization
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Organization {
  pub id: String,
  pub name: String,
  #[serde(rename = "_links")]
  pub links: Option<Value>,
}

/// A page of organizations
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPage {
  pub size: u32,
  pub start: u32,
  pub limit: u32,
  pub is_last_page: bool,
  pub values: Vec<Organization>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OrganizationCreateRequest<'a> {
  pub name: &'a str,
}

/// An attachment of a customer request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestAttachment {
  pub filename: String,
  pub author: Option<JiraUser>,
  pub created: Option<Value>,
  pub size: u64,
  pub mime_type: Option<String>,
}

/// A page of customer request attachments
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestAttachmentPage {
  pub size: u32,
  pub start: u32,
  pub limit: u32,
  pub is_last_page: bool,
  pub values: Vec<RequestAttachment>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RequestAttachmentCreateRequest<'a> {
  pub temporary_attachment_ids: &'a [String],
  pub public: bool,
}

/// Result of attaching temporary files to a customer request
#[derive(Debug, Clone, Deserialize)]
pub struct RequestAttachmentCreation {
  pub comment: Option<Value>,
  pub attachments: Option<RequestAttachmentPage>,
}
