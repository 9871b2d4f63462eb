use atlas_core::{Method, QueryParams, RequestContext, ResponseEnvelope, Result, require, to_payload};
use tracing::instrument;

use crate::client::ServiceDeskClient;
use crate::models::{Organization, OrganizationCreateRequest, OrganizationPage};

impl ServiceDeskClient {
  /// Get a page of organizations, optionally only those `account_id`
  /// belongs to
  #[instrument(skip(self, ctx))]
  pub async fn organizations(
    &self,
    ctx: &RequestContext,
    account_id: &str,
    start: u32,
    limit: u32,
  ) -> Result<(OrganizationPage, ResponseEnvelope)> {
    let mut params = QueryParams::new();
    params
      .add("start", start)
      .add("limit", limit)
      .add_non_empty("accountId", account_id);

    let endpoint = params.append_to(&Self::resource("organization"));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }

  #[instrument(skip(self, ctx))]
  pub async fn organization(
    &self,
    ctx: &RequestContext,
    organization_id: &str,
  ) -> Result<(Organization, ResponseEnvelope)> {
    require(organization_id, "organization id")?;

    let endpoint = Self::resource(&format!("organization/{organization_id}"));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }

  #[instrument(skip(self, ctx))]
  pub async fn create_organization(
    &self,
    ctx: &RequestContext,
    name: &str,
  ) -> Result<(Organization, ResponseEnvelope)> {
    require(name, "organization name")?;

    let body = to_payload(&OrganizationCreateRequest { name })?;
    let request = self
      .api
      .new_request(ctx, Method::POST, &Self::resource("organization"), Some(body))?;
    self.api.call_json(request).await
  }

  #[instrument(skip(self, ctx))]
  pub async fn delete_organization(&self, ctx: &RequestContext, organization_id: &str) -> Result<ResponseEnvelope> {
    require(organization_id, "organization id")?;

    let endpoint = Self::resource(&format!("organization/{organization_id}"));
    let request = self.api.new_request(ctx, Method::DELETE, &endpoint, None)?;
    self.api.call(request).await
  }
}
