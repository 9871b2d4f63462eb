use atlas_core::{Method, RequestContext, ResponseEnvelope, Result, require, to_payload};
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::{JiraTransition, JiraTransitions, TransitionId, TransitionRequest};

impl JiraClient {
  /// Get available transitions for an issue
  #[instrument(skip(self, ctx))]
  pub async fn get_transitions(
    &self,
    ctx: &RequestContext,
    issue_key: &str,
  ) -> Result<(Vec<JiraTransition>, ResponseEnvelope)> {
    require(issue_key, "issue key or id")?;

    let endpoint = self.resource(&format!("issue/{issue_key}/transitions"));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    let (transitions, response) = self.api.call_json::<JiraTransitions>(request).await?;
    Ok((transitions.transitions, response))
  }

  /// Transition an issue to a new status
  #[instrument(skip(self, ctx))]
  pub async fn transition_issue(
    &self,
    ctx: &RequestContext,
    issue_key: &str,
    transition_id: &str,
  ) -> Result<ResponseEnvelope> {
    require(issue_key, "issue key or id")?;
    require(transition_id, "transition id")?;

    let payload = to_payload(&TransitionRequest {
      transition: TransitionId {
        id: transition_id.to_string(),
      },
    })?;

    let endpoint = self.resource(&format!("issue/{issue_key}/transitions"));
    let request = self.api.new_request(ctx, Method::POST, &endpoint, Some(payload))?;
    self.api.call(request).await
  }
}

#[cfg(test)]
mod tests {
  use atlas_core::RequestContext;
  use wiremock::matchers::{basic_auth, body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::{ApiVersion, JiraClient, create_jira_client};

  #[tokio::test]
  async fn test_get_transitions() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-123/transitions"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "transitions": [
              {
                  "id": "11",
                  "name": "To Do",
                  "to": {"id": "10000", "name": "To Do"}
              },
              {
                  "id": "21",
                  "name": "In Progress",
                  "to": {"id": "10001", "name": "In Progress"}
              }
          ]
      })))
      .mount(&mock_server)
      .await;

    let (transitions, _) = client.get_transitions(&RequestContext::new(), "TEST-123").await?;
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[1].id, "21");
    assert_eq!(transitions[1].to.as_ref().unwrap().name, "In Progress");

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let auth = atlas_core::Authentication::new().with_basic_auth("test_user", "test_token");
    let client = JiraClient::new(&mock_server.uri(), auth, ApiVersion::V2)?;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/TEST-123/transitions"))
      .and(body_json(serde_json::json!({"transition": {"id": "21"}})))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = client
      .transition_issue(&RequestContext::new(), "TEST-123", "21")
      .await?;
    assert_eq!(response.code(), 204);

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_issue_rejected() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/TEST-123/transitions"))
      .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
          "errorMessages": ["Transition id '99' is not valid for this issue."]
      })))
      .mount(&mock_server)
      .await;

    let error = client
      .transition_issue(&RequestContext::new(), "TEST-123", "99")
      .await
      .unwrap_err();

    assert_eq!(error.status().map(|status| status.as_u16()), Some(400));
    assert!(error.response().unwrap().text().contains("not valid"));

    Ok(())
  }
}
