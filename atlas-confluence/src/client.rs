use atlas_core::{ApiClient, Authentication, Result};

/// Represents a Confluence API client
#[derive(Debug, Clone)]
pub struct ConfluenceClient {
  pub(crate) api: ApiClient,
}

impl ConfluenceClient {
  /// Create a new Confluence client for `site`, e.g.
  /// `https://your-domain.atlassian.net/wiki`
  pub fn new(site: &str, auth: Authentication) -> Result<Self> {
    Ok(Self::from_api(ApiClient::new(site, auth)?))
  }

  pub const fn from_api(api: ApiClient) -> Self {
    Self { api }
  }

  pub const fn api(&self) -> &ApiClient {
    &self.api
  }

  pub const fn api_mut(&mut self) -> &mut ApiClient {
    &mut self.api
  }

  /// `rest/api/{resource}`
  pub(crate) fn resource(resource: &str) -> String {
    format!("rest/api/{resource}")
  }
}
