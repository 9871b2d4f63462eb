use atlas_core::{Method, QueryParams, RequestContext, ResponseEnvelope, Result};
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::JiraUser;

impl JiraClient {
  /// Get the user the credentials belong to.
  ///
  /// `expand` accepts `groups` and `applicationRoles`.
  #[instrument(skip(self, ctx))]
  pub async fn myself(&self, ctx: &RequestContext, expand: &[&str]) -> Result<(JiraUser, ResponseEnvelope)> {
    let mut params = QueryParams::new();
    params.add_joined("expand", expand);

    let endpoint = params.append_to(&self.resource("myself"));
    let request = self.api.new_request(ctx, Method::GET, &endpoint, None)?;
    self.api.call_json(request).await
  }
}

#[cfg(test)]
mod tests {
  use atlas_core::RequestContext;
  use wiremock::matchers::{basic_auth, header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;

  #[tokio::test]
  async fn test_myself_with_expand() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/myself"))
      .and(query_param("expand", "groups,applicationRoles"))
      .and(basic_auth("test_user", "test_token"))
      .and(header("Accept", "application/json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "accountId": "5b10a2844c20165700ede21g",
          "displayName": "Mia Krystof",
          "active": true,
          "groups": {"size": 1, "items": [{"name": "jira-software-users", "groupId": "g-1"}]}
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let (user, response) = client
      .myself(&RequestContext::new(), &["groups", "applicationRoles"])
      .await?;

    assert_eq!(user.display_name.as_deref(), Some("Mia Krystof"));
    assert!(user.active);
    assert_eq!(user.groups.unwrap().items[0].name, "jira-software-users");
    assert_eq!(response.code(), 200);
    assert!(response.endpoint.ends_with("/rest/api/3/myself?expand=groups%2CapplicationRoles"));

    Ok(())
  }
}
