//! Wiremock shortcuts for JSON endpoints.

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Mount a mock answering `verb path` with `status` and a JSON body.
///
/// A `Value::Null` body produces an empty response, which is what Atlassian
/// returns for `204 No Content`.
pub async fn mock_json(server: &MockServer, verb: &str, route: &str, status: u16, body: Value) {
  let template = match body {
    Value::Null => ResponseTemplate::new(status),
    body => ResponseTemplate::new(status).set_body_json(body),
  };

  Mock::given(method(verb))
    .and(path(route))
    .respond_with(template)
    .mount(server)
    .await;
}

/// Parse the body of a request captured by the mock server
pub fn request_body_json(request: &Request) -> Value {
  serde_json::from_slice(&request.body).expect("Request body is not valid JSON")
}
