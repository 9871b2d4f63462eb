use atlas_core::{Error, Method, QueryParams, RequestContext, ResponseEnvelope, Result, require, to_payload};
use tracing::instrument;

use crate::client::ServiceDeskClient;
use crate::models::{RequestAttachmentCreateRequest, RequestAttachmentCreation, RequestAttachmentPage};

impl ServiceDeskClient {
  /// Get a page of the attachments on a customer request
  #[instrument(skip(self, ctx))]
  pub async fn request_attachments(
    &self,
    ctx: &RequestContext,
    issue_key_or_id: &str,
    start: u32,
    limit: u32,
  ) -> Result<(RequestAttachmentPage, ResponseEnvelope)> {
    require(issue_key_or_id, "issue key or id")?;

    let mut params = QueryParams::new();
    params.add("start", start).add("limit", limit);

    let endpoint = params.append_to(&Self::resource(&format!("request/{issue_key_or_id}/attachment")));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }

  /// Attach previously uploaded temporary files to a customer request
  #[instrument(skip(self, ctx))]
  pub async fn create_request_attachments(
    &self,
    ctx: &RequestContext,
    issue_key_or_id: &str,
    temporary_attachment_ids: &[String],
    public: bool,
  ) -> Result<(RequestAttachmentCreation, ResponseEnvelope)> {
    require(issue_key_or_id, "issue key or id")?;
    if temporary_attachment_ids.is_empty() {
      return Err(Error::MissingField {
        field: "temporary attachment ids",
      });
    }

    let body = to_payload(&RequestAttachmentCreateRequest {
      temporary_attachment_ids,
      public,
    })?;

    let endpoint = Self::resource(&format!("request/{issue_key_or_id}/attachment"));
    let request = self.api.new_request(ctx, Method::POST, &endpoint, Some(body))?;
    self.api.call_json(request).await
  }
}
