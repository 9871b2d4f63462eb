//! Authentication strategy shared by every request a client issues.
//!
//! The strategy is a plain value owned by [`ApiClient`](crate::ApiClient).
//! Mutation goes through `&mut`, so credentials are configured before the
//! client is shared and cannot change underneath an in-flight request.

use std::fmt;

/// Credentials and identity headers attached to outgoing requests
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Authentication {
  basic: Option<(String, String)>,
  user_agent: Option<String>,
  experimental: bool,
}

impl Authentication {
  /// Create an empty strategy: no credentials, no user agent
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder form of [`Authentication::set_basic_auth`]
  pub fn with_basic_auth(mut self, identity: impl Into<String>, secret: impl Into<String>) -> Self {
    self.set_basic_auth(identity, secret);
    self
  }

  /// Builder form of [`Authentication::set_user_agent`]
  pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
    self.set_user_agent(agent);
    self
  }

  /// Builder form of [`Authentication::set_experimental_flag`]
  pub fn with_experimental_flag(mut self) -> Self {
    self.set_experimental_flag();
    self
  }

  /// Store the identity (usually an e-mail) and secret (API token) used for
  /// basic authentication. Empty values are accepted as-is.
  pub fn set_basic_auth(&mut self, identity: impl Into<String>, secret: impl Into<String>) {
    self.basic = Some((identity.into(), secret.into()));
  }

  pub fn has_basic_auth(&self) -> bool {
    self.basic.is_some()
  }

  /// The configured `(identity, secret)` pair, if any
  pub fn basic_auth(&self) -> Option<(&str, &str)> {
    self
      .basic
      .as_ref()
      .map(|(identity, secret)| (identity.as_str(), secret.as_str()))
  }

  pub fn set_user_agent(&mut self, agent: impl Into<String>) {
    self.user_agent = Some(agent.into());
  }

  pub fn has_user_agent(&self) -> bool {
    self.user_agent.is_some()
  }

  pub fn user_agent(&self) -> Option<&str> {
    self.user_agent.as_deref()
  }

  /// Opt into experimental endpoints (sends `X-ExperimentalApi: opt-in`)
  pub fn set_experimental_flag(&mut self) {
    self.experimental = true;
  }

  pub const fn has_experimental_flag(&self) -> bool {
    self.experimental
  }
}

impl fmt::Debug for Authentication {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Authentication")
      .field("identity", &self.basic.as_ref().map(|(identity, _)| identity))
      .field("secret", &self.basic.as_ref().map(|_| "<redacted>"))
      .field("user_agent", &self.user_agent)
      .field("experimental", &self.experimental)
      .finish()
  }
}
