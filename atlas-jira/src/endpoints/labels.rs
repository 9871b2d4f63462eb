use atlas_core::{Method, QueryParams, RequestContext, ResponseEnvelope, Result};
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::LabelPage;

impl JiraClient {
  /// Get a page of the labels used on the site
  #[instrument(skip(self, ctx))]
  pub async fn labels(
    &self,
    ctx: &RequestContext,
    start_at: u32,
    max_results: u32,
  ) -> Result<(LabelPage, ResponseEnvelope)> {
    let mut params = QueryParams::new();
    params.add("maxResults", max_results).add("startAt", start_at);

    let endpoint = params.append_to(&self.resource("label"));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }
}
