use std::fmt;

use atlas_core::{ApiClient, Authentication, RequestContext, Result};
use tracing::instrument;

/// Jira platform REST API version used in resource paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
  /// Plain-text rich fields
  V2,
  /// Atlassian Document Format rich fields
  #[default]
  V3,
}

impl fmt::Display for ApiVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::V2 => f.write_str("2"),
      Self::V3 => f.write_str("3"),
    }
  }
}

/// Represents a Jira platform API client
#[derive(Debug, Clone)]
pub struct JiraClient {
  pub(crate) api: ApiClient,
  pub(crate) version: ApiVersion,
}

impl JiraClient {
  /// Create a new Jira client for `site`
  pub fn new(site: &str, auth: Authentication, version: ApiVersion) -> Result<Self> {
    Ok(Self::from_api(ApiClient::new(site, auth)?, version))
  }

  /// Wrap an existing transport, e.g. one built from
  /// [`atlas_core::config::SiteConfig`]
  pub const fn from_api(api: ApiClient, version: ApiVersion) -> Self {
    Self { api, version }
  }

  pub const fn api(&self) -> &ApiClient {
    &self.api
  }

  /// Mutable transport access, for configuring authentication before use
  pub const fn api_mut(&mut self) -> &mut ApiClient {
    &mut self.api
  }

  pub const fn version(&self) -> ApiVersion {
    self.version
  }

  /// `rest/api/{version}/{resource}`
  pub(crate) fn resource(&self, resource: &str) -> String {
    format!("rest/api/{}/{resource}", self.version)
  }

  /// Test the Jira connection by fetching the current user.
  ///
  /// Rejected credentials yield `Ok(false)`; any other failure is returned.
  #[instrument(skip(self, ctx))]
  pub async fn test_connection(&self, ctx: &RequestContext) -> Result<bool> {
    match self.myself(ctx, &[]).await {
      Ok(_) => Ok(true),
      Err(error) if error.is_unauthorized() => Ok(false),
      Err(error) => Err(error),
    }
  }
}

/// Create a v3 Jira client from basic-auth credentials
pub fn create_jira_client(site: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let auth = Authentication::new().with_basic_auth(username, api_token);
  JiraClient::new(site, auth, ApiVersion::V3)
}

/// Jira Software (agile) API client
#[derive(Debug, Clone)]
pub struct AgileClient {
  pub(crate) api: ApiClient,
}

impl AgileClient {
  /// Version segment of every agile resource path
  pub const VERSION: &'static str = "1.0";

  /// `rest/agile/1.0/{resource}`
  pub(crate) fn resource(resource: &str) -> String {
    format!("rest/agile/{}/{resource}", Self::VERSION)
  }

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
}

/// Jira Service Management API client.
///
/// Endpoints still marked experimental by Atlassian require
/// [`Authentication::set_experimental_flag`].
#[derive(Debug, Clone)]
pub struct ServiceDeskClient {
  pub(crate) api: ApiClient,
}

impl ServiceDeskClient {
  /// `rest/servicedeskapi/{resource}`
  pub(crate) fn resource(resource: &str) -> String {
    format!("rest/servicedeskapi/{resource}")
  }

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
}
