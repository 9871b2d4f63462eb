use atlas_core::{Method, RequestContext, ResponseEnvelope, Result};
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::ServerInformation;

impl JiraClient {
  /// Get information about the Jira instance
  #[instrument(skip(self, ctx))]
  pub async fn server_info(&self, ctx: &RequestContext) -> Result<(ServerInformation, ResponseEnvelope)> {
    let request = self
      .api
      .new_request(ctx, Method::GET, &self.resource("serverInfo"), None)?;
    self.api.call_json(request).await
  }
}
