//! Attachments of Confluence content.
//!
//! Uploads are sent as `multipart/form-data` with the file under the `file`
//! part and `minorEdit=true`, so watchers are not notified.

use atlas_core::multipart::{Form, Part};
use atlas_core::{Error, Method, QueryParams, RequestContext, ResponseEnvelope, Result, require};
use tracing::instrument;

use crate::client::ConfluenceClient;
use crate::models::{AttachmentOptions, ContentPage};

const OCTET_STREAM: &str = "application/octet-stream";

impl ConfluenceClient {
  /// Get a page of the attachments of a piece of content
  #[instrument(skip(self, ctx))]
  pub async fn attachments(
    &self,
    ctx: &RequestContext,
    content_id: &str,
    start_at: u32,
    max_results: u32,
    options: Option<&AttachmentOptions>,
  ) -> Result<(ContentPage, ResponseEnvelope)> {
    require(content_id, "content id")?;

    let mut params = QueryParams::new();
    params.add("start", start_at).add("limit", max_results);

    if let Some(options) = options {
      params
        .add_joined("expand", options.expand.as_slice())
        .add_non_empty("filename", &options.file_name)
        .add_non_empty("mediaType", &options.media_type);
    }

    let endpoint = params.append_to(&Self::resource(&format!("content/{content_id}/child/attachment")));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }

  /// Add a new attachment to a piece of content.
  ///
  /// Fails if an attachment with the same file name already exists; use
  /// [`ConfluenceClient::create_or_update_attachment`] to add a new version.
  #[instrument(skip(self, ctx, file), fields(file_len = file.len()))]
  pub async fn create_attachment(
    &self,
    ctx: &RequestContext,
    content_id: &str,
    status: &str,
    file_name: &str,
    file: Vec<u8>,
  ) -> Result<(ContentPage, ResponseEnvelope)> {
    self
      .upload(ctx, Method::POST, content_id, status, file_name, file)
      .await
  }

  /// Add an attachment, or a new version of it when the file name exists
  #[instrument(skip(self, ctx, file), fields(file_len = file.len()))]
  pub async fn create_or_update_attachment(
    &self,
    ctx: &RequestContext,
    content_id: &str,
    status: &str,
    file_name: &str,
    file: Vec<u8>,
  ) -> Result<(ContentPage, ResponseEnvelope)> {
    self
      .upload(ctx, Method::PUT, content_id, status, file_name, file)
      .await
  }

  async fn upload(
    &self,
    ctx: &RequestContext,
    method: Method,
    content_id: &str,
    status: &str,
    file_name: &str,
    file: Vec<u8>,
  ) -> Result<(ContentPage, ResponseEnvelope)> {
    require(content_id, "content id")?;
    require(file_name, "file name")?;

    let mut params = QueryParams::new();
    params.add_non_empty("status", status);
    let endpoint = params.append_to(&Self::resource(&format!("content/{content_id}/child/attachment")));

    let part = Part::bytes(file)
      .file_name(file_name.to_string())
      .mime_str(OCTET_STREAM)
      .map_err(Error::Request)?;
    let form = Form::new().part("file", part).text("minorEdit", "true");

    let request = self.api.new_multipart_request(ctx, method, &endpoint, form)?;
    self.api.call_json(request).await
  }
}

#[cfg(test)]
mod tests {
  use atlas_core::{Authentication, Error, RequestContext};
  use serde_json::json;
  use wiremock::matchers::{basic_auth, header, method, path, query_param};
  use wiremock::{Mock, MockServer, Request, ResponseTemplate};

  use crate::client::ConfluenceClient;
  use crate::models::AttachmentOptions;

  fn confluence_client(server: &MockServer) -> ConfluenceClient {
    let site = format!("{}/wiki", server.uri());
    ConfluenceClient::new(&site, Authentication::new().with_basic_auth("test_user", "test_token")).unwrap()
  }

  fn attachment_page() -> serde_json::Value {
    json!({
        "results": [{
            "id": "att720905",
            "type": "attachment",
            "status": "current",
            "title": "notes.txt",
            "metadata": {"mediaType": "text/plain"}
        }],
        "start": 0,
        "limit": 25,
        "size": 1
    })
  }

  fn body_text(request: &Request) -> String {
    String::from_utf8_lossy(&request.body).into_owned()
  }

  #[tokio::test]
  async fn test_attachments_with_options() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = confluence_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/wiki/rest/api/content/76127/child/attachment"))
      .and(query_param("start", "0"))
      .and(query_param("limit", "25"))
      .and(query_param("expand", "version,container"))
      .and(query_param("mediaType", "text/plain"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(attachment_page()))
      .mount(&mock_server)
      .await;

    let options = AttachmentOptions {
      expand: vec!["version".to_string(), "container".to_string()],
      media_type: "text/plain".to_string(),
      ..AttachmentOptions::default()
    };

    let (page, _) = client
      .attachments(&RequestContext::new(), "76127", 0, 25, Some(&options))
      .await?;
    assert_eq!(page.results[0].title, "notes.txt");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_attachment_multipart() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = confluence_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/wiki/rest/api/content/76127/child/attachment"))
      .and(query_param("status", "current"))
      .and(header("X-Atlassian-Token", "no-check"))
      .and(header("Accept", "application/json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(attachment_page()))
      .expect(1)
      .mount(&mock_server)
      .await;

    let (page, response) = client
      .create_attachment(
        &RequestContext::new(),
        "76127",
        "current",
        "notes.txt",
        b"meeting notes".to_vec(),
      )
      .await?;
    assert_eq!(page.size, 1);
    assert_eq!(response.code(), 200);

    let received = mock_server.received_requests().await.unwrap_or_default();
    let content_type = received[0]
      .headers
      .get("content-type")
      .and_then(|value| value.to_str().ok())
      .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = body_text(&received[0]);
    assert!(body.contains(r#"name="file"; filename="notes.txt""#));
    assert!(body.to_ascii_lowercase().contains("content-type: application/octet-stream"));
    assert!(body.contains("meeting notes"));
    assert!(body.contains(r#"name="minorEdit""#));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_or_update_attachment_uses_put() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = confluence_client(&mock_server);

    Mock::given(method("PUT"))
      .and(path("/wiki/rest/api/content/76127/child/attachment"))
      .respond_with(ResponseTemplate::new(200).set_body_json(attachment_page()))
      .expect(1)
      .mount(&mock_server)
      .await;

    client
      .create_or_update_attachment(&RequestContext::new(), "76127", "", "notes.txt", b"v2".to_vec())
      .await?;

    let received = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(received[0].url.query(), None);

    Ok(())
  }

  #[tokio::test]
  async fn test_upload_requires_content_and_file_name() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = confluence_client(&mock_server);
    let ctx = RequestContext::new();

    let error = client
      .create_attachment(&ctx, "", "current", "notes.txt", Vec::new())
      .await
      .unwrap_err();
    assert!(matches!(error, Error::MissingField { field: "content id" }));

    let error = client
      .create_or_update_attachment(&ctx, "76127", "current", "", Vec::new())
      .await
      .unwrap_err();
    assert!(matches!(error, Error::MissingField { field: "file name" }));

    let received = mock_server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_upload_rejected_keeps_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = confluence_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/wiki/rest/api/content/76127/child/attachment"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
          "statusCode": 400,
          "message": "Cannot add a new attachment with same file name as an existing attachment: notes.txt"
      })))
      .mount(&mock_server)
      .await;

    let error = client
      .create_attachment(&RequestContext::new(), "76127", "", "notes.txt", b"x".to_vec())
      .await
      .unwrap_err();

    let response = error.response().unwrap();
    assert_eq!(response.code(), 400);
    assert!(response.text().contains("same file name"));

    Ok(())
  }
}
