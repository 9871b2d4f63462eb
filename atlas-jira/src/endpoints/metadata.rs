use atlas_core::{Method, QueryParams, RequestContext, ResponseEnvelope, Result, require};
use serde_json::Value;
use tracing::instrument;

use crate::client::JiraClient;

impl JiraClient {
  /// Get the fields that can be edited on an issue.
  ///
  /// The shape depends on the project's screens and custom fields, so the
  /// result is left as a JSON tree.
  #[instrument(skip(self, ctx))]
  pub async fn edit_metadata(
    &self,
    ctx: &RequestContext,
    issue_key_or_id: &str,
    override_screen_security: bool,
    override_editable_flag: bool,
  ) -> Result<(Value, ResponseEnvelope)> {
    require(issue_key_or_id, "issue key or id")?;

    let mut params = QueryParams::new();
    params
      .add("overrideEditableFlag", override_editable_flag)
      .add("overrideScreenSecurity", override_screen_security);

    let endpoint = params.append_to(&self.resource(&format!("issue/{issue_key_or_id}/editmeta")));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }
}

#[cfg(test)]
mod tests {
  use atlas_core::{Error, RequestContext};
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;

  #[tokio::test]
  async fn test_edit_metadata() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-1/editmeta"))
      .and(query_param("overrideEditableFlag", "false"))
      .and(query_param("overrideScreenSecurity", "true"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "fields": {
              "summary": {"required": true, "name": "Summary", "operations": ["set"]},
              "customfield_10010": {"required": false, "name": "Team"}
          }
      })))
      .mount(&mock_server)
      .await;

    let (metadata, response) = client
      .edit_metadata(&RequestContext::new(), "TEST-1", true, false)
      .await?;

    assert_eq!(metadata["fields"]["summary"]["required"], true);
    assert_eq!(metadata["fields"]["customfield_10010"]["name"], "Team");
    assert!(
      response
        .endpoint
        .ends_with("editmeta?overrideEditableFlag=false&overrideScreenSecurity=true")
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_edit_metadata_malformed_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-1/editmeta"))
      .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
      .mount(&mock_server)
      .await;

    let error = client
      .edit_metadata(&RequestContext::new(), "TEST-1", false, false)
      .await
      .unwrap_err();

    match error {
      Error::Decode { response, .. } => assert_eq!(response.text(), "<html>maintenance</html>"),
      other => panic!("expected a decode error, got {other:?}"),
    }

    Ok(())
  }
}
