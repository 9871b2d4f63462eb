//! Sprint resources of the Jira Software API.

use atlas_core::{Error, Method, QueryParams, RequestContext, ResponseEnvelope, Result, to_payload};
use tracing::instrument;

use crate::client::AgileClient;
use crate::models::{IssueOptions, Sprint, SprintIssuePage, SprintPayload};

const STATE_ACTIVE: &str = "active";
const STATE_CLOSED: &str = "closed";

fn sprint_path(sprint_id: u64) -> Result<String> {
  if sprint_id == 0 {
    return Err(Error::MissingField { field: "sprint id" });
  }
  Ok(AgileClient::resource(&format!("sprint/{sprint_id}")))
}

impl AgileClient {
  #[instrument(skip(self, ctx))]
  pub async fn get_sprint(&self, ctx: &RequestContext, sprint_id: u64) -> Result<(Sprint, ResponseEnvelope)> {
    let endpoint = sprint_path(sprint_id)?;
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }

  /// Create a future sprint on the payload's origin board
  #[instrument(skip(self, ctx))]
  pub async fn create_sprint(
    &self,
    ctx: &RequestContext,
    payload: &SprintPayload,
  ) -> Result<(Sprint, ResponseEnvelope)> {
    let body = to_payload(payload)?;
    let request = self
      .api
      .new_request(ctx, Method::POST, &Self::resource("sprint"), Some(body))?;
    self.api.call_json(request).await
  }

  /// Replace a sprint; fields absent from `payload` are cleared
  #[instrument(skip(self, ctx))]
  pub async fn update_sprint(
    &self,
    ctx: &RequestContext,
    sprint_id: u64,
    payload: &SprintPayload,
  ) -> Result<(Sprint, ResponseEnvelope)> {
    let endpoint = sprint_path(sprint_id)?;
    let body = to_payload(payload)?;
    let request = self.api.new_request(ctx, Method::PUT, &endpoint, Some(body))?;
    self.api.call_json(request).await
  }

  /// Update only the fields present in `payload`
  #[instrument(skip(self, ctx))]
  pub async fn partial_update_sprint(
    &self,
    ctx: &RequestContext,
    sprint_id: u64,
    payload: &SprintPayload,
  ) -> Result<(Sprint, ResponseEnvelope)> {
    let endpoint = sprint_path(sprint_id)?;
    let body = to_payload(payload)?;
    let request = self.api.new_request(ctx, Method::POST, &endpoint, Some(body))?;
    self.api.call_json(request).await
  }

  #[instrument(skip(self, ctx))]
  pub async fn delete_sprint(&self, ctx: &RequestContext, sprint_id: u64) -> Result<ResponseEnvelope> {
    let endpoint = sprint_path(sprint_id)?;
    let request = self.api.new_request(ctx, Method::DELETE, &endpoint, None)?;
    self.api.call(request).await
  }

  /// Get a page of the issues in a sprint
  #[instrument(skip(self, ctx))]
  pub async fn sprint_issues(
    &self,
    ctx: &RequestContext,
    sprint_id: u64,
    options: &IssueOptions,
    start_at: u32,
    max_results: u32,
  ) -> Result<(SprintIssuePage, ResponseEnvelope)> {
    let base = sprint_path(sprint_id)?;

    let mut params = QueryParams::new();
    params
      .add("startAt", start_at)
      .add("maxResults", max_results)
      .add_non_empty("jql", &options.jql)
      .add_joined("expand", options.expand.as_slice())
      .add_joined("fields", options.fields.as_slice());

    // Jira validates by default; only the opt-out is sent
    if !options.validate_query {
      params.add("validateQuery", false);
    }

    let endpoint = params.append_to(&format!("{base}/issue"));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }

  /// Move a future sprint to the active state
  #[instrument(skip(self, ctx))]
  pub async fn start_sprint(&self, ctx: &RequestContext, sprint_id: u64) -> Result<ResponseEnvelope> {
    self.change_state(ctx, sprint_id, STATE_ACTIVE).await
  }

  /// Close an active sprint
  #[instrument(skip(self, ctx))]
  pub async fn close_sprint(&self, ctx: &RequestContext, sprint_id: u64) -> Result<ResponseEnvelope> {
    self.change_state(ctx, sprint_id, STATE_CLOSED).await
  }

  async fn change_state(&self, ctx: &RequestContext, sprint_id: u64, state: &str) -> Result<ResponseEnvelope> {
    let endpoint = sprint_path(sprint_id)?;
    let body = to_payload(&SprintPayload {
      state: Some(state.to_string()),
      ..SprintPayload::default()
    })?;

    let request = self.api.new_request(ctx, Method::POST, &endpoint, Some(body))?;
    self.api.call(request).await
  }
}
