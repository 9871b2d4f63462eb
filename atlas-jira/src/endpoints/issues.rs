use atlas_core::{Method, QueryParams, RequestContext, ResponseEnvelope, Result, require, to_payload};
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::{AssigneeRequest, JiraIssue};

impl JiraClient {
  /// Get an issue by key or id.
  ///
  /// Empty `fields` returns every navigable field.
  #[instrument(skip(self, ctx))]
  pub async fn get_issue(
    &self,
    ctx: &RequestContext,
    issue_key_or_id: &str,
    fields: &[&str],
    expand: &[&str],
  ) -> Result<(JiraIssue, ResponseEnvelope)> {
    require(issue_key_or_id, "issue key or id")?;

    let mut params = QueryParams::new();
    params.add_joined("fields", fields).add_joined("expand", expand);

    let endpoint = params.append_to(&self.resource(&format!("issue/{issue_key_or_id}")));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }

  /// Delete an issue, optionally with its subtasks
  #[instrument(skip(self, ctx))]
  pub async fn delete_issue(
    &self,
    ctx: &RequestContext,
    issue_key_or_id: &str,
    delete_subtasks: bool,
  ) -> Result<ResponseEnvelope> {
    require(issue_key_or_id, "issue key or id")?;

    let mut params = QueryParams::new();
    params.add("deleteSubtasks", delete_subtasks);

    let endpoint = params.append_to(&self.resource(&format!("issue/{issue_key_or_id}")));
    let request = self.api.new_request(ctx, Method::DELETE, &endpoint, None)?;
    self.api.call(request).await
  }

  /// Assign an issue to the user with `account_id`
  #[instrument(skip(self, ctx))]
  pub async fn assign_issue(
    &self,
    ctx: &RequestContext,
    issue_key_or_id: &str,
    account_id: &str,
  ) -> Result<ResponseEnvelope> {
    require(issue_key_or_id, "issue key or id")?;
    require(account_id, "account id")?;

    let payload = to_payload(&AssigneeRequest { account_id })?;
    let endpoint = self.resource(&format!("issue/{issue_key_or_id}/assignee"));
    let request = self.api.new_request(ctx, Method::PUT, &endpoint, Some(payload))?;
    self.api.call(request).await
  }
}
