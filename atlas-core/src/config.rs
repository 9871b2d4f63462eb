//! # Site Configuration
//!
//! Resolves the Atlassian site and credentials from the environment and the
//! user's `.netrc`, and turns them into a ready-to-use [`ApiClient`].
//!
//! | variable | meaning |
//! |---|---|
//! | `ATLASSIAN_HOST` | site host or URL (`JIRA_HOST` is accepted as a fallback) |
//! | `ATLASSIAN_USER_AGENT` | overrides the default `User-Agent` |

use std::path::Path;

use anyhow::{Context, Result};
use directories::BaseDirs;
use tracing::{debug, instrument};
use url::{Position, Url};

use crate::auth::Authentication;
use crate::client::ApiClient;
use crate::consts::USER_AGENT;
use crate::creds::{Credentials, netrc_credentials};

/// Environment variable storing the Atlassian site
pub const ENV_ATLASSIAN_HOST: &str = "ATLASSIAN_HOST";

/// Legacy environment variable consulted when [`ENV_ATLASSIAN_HOST`] is unset
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Environment variable overriding the User-Agent header
pub const ENV_USER_AGENT: &str = "ATLASSIAN_USER_AGENT";

/// Everything needed to construct an [`ApiClient`] for one site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
  /// Site URL with an explicit scheme
  pub site: String,
  pub credentials: Option<Credentials>,
  pub user_agent: String,
}

impl SiteConfig {
  /// Resolve the site from the environment and credentials from
  /// `~/.netrc`
  pub fn from_env() -> Result<Self> {
    let base_dirs = BaseDirs::new().context("Could not determine the home directory")?;
    Self::from_env_with_home(base_dirs.home_dir())
  }

  /// Like [`SiteConfig::from_env`] with an explicit home directory
  #[instrument(level = "debug")]
  pub fn from_env_with_home(home: &Path) -> Result<Self> {
    let site = resolve_site()?;
    let credentials = netrc_credentials(home, &site)?;
    let user_agent = std::env::var(ENV_USER_AGENT).unwrap_or_else(|_| USER_AGENT.to_string());

    debug!(site = %site, has_credentials = credentials.is_some(), "Resolved site configuration");
    Ok(Self {
      site,
      credentials,
      user_agent,
    })
  }

  /// The authentication strategy described by this configuration
  pub fn authentication(&self) -> Authentication {
    let mut auth = Authentication::new().with_user_agent(&self.user_agent);
    if let Some(credentials) = &self.credentials {
      auth.set_basic_auth(&credentials.username, &credentials.password);
    }
    auth
  }

  /// Build an [`ApiClient`] with a default transport
  pub fn into_client(self) -> Result<ApiClient> {
    let auth = self.authentication();
    ApiClient::new(&self.site, auth).with_context(|| format!("Invalid Atlassian site '{}'", self.site))
  }
}

/// Build an [`ApiClient`] from the environment and `~/.netrc`
pub fn client_from_env() -> Result<ApiClient> {
  SiteConfig::from_env()?.into_client()
}

/// Get the configured Atlassian site with a proper URL scheme.
///
/// Reads [`ENV_ATLASSIAN_HOST`], then [`ENV_JIRA_HOST`]. A host without a
/// scheme is assumed to be https.
pub fn resolve_site() -> Result<String> {
  let host = std::env::var(ENV_ATLASSIAN_HOST)
    .or_else(|_| std::env::var(ENV_JIRA_HOST))
    .map_err(|_| anyhow::anyhow!("Atlassian host environment variable '{ENV_ATLASSIAN_HOST}' not set"))?;

  ensure_url_scheme(&host)
}

/// Ensure a site has a proper scheme (http:// or https://).
///
/// Input without a scheme gets https://. Malformed schemes such as
/// `http:/example.com` are repaired to https.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let malformed_scheme = ["http:", "https:"]
    .iter()
    .any(|scheme| lowered.starts_with(scheme) && !lowered[scheme.len()..].starts_with("//"));

  if malformed_scheme {
    let remainder = trimmed.split_once(':').map(|(_, rest)| rest).unwrap_or("");
    return with_https(remainder.trim_start_matches('/')).map(|url| normalize_url(&url));
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if url.scheme().len() > 1 && url.host().is_some() => url,
    _ => with_https(trimmed)?,
  };

  Ok(normalize_url(&url))
}

fn with_https(input: &str) -> Result<Url> {
  Url::parse(&format!("https://{input}"))
    .map_err(|_| anyhow::anyhow!("Failed to parse URL: '{input}'. Ensure it has a valid scheme."))
}

/// Render a URL without the bare `/` path the parser adds to host-only URLs
fn normalize_url(url: &Url) -> String {
  let mut result = url[..Position::BeforePath].to_string();
  if url.path() != "/" {
    result.push_str(url.path());
  }
  result.push_str(&url[Position::AfterPath..]);
  result
}

#[cfg(test)]
mod tests {
  use atlas_test_utils::{EnvVarGuard, NetrcGuard};

  use super::*;

  #[test]
  fn test_ensure_url_scheme_variants() {
    let cases = [
      ("https://company.atlassian.net", "https://company.atlassian.net"),
      ("http://jira.example.com", "http://jira.example.com"),
      ("company.atlassian.net", "https://company.atlassian.net"),
      ("  company.atlassian.net  ", "https://company.atlassian.net"),
      ("localhost:8080", "https://localhost:8080"),
      ("192.168.1.100:8080", "https://192.168.1.100:8080"),
      ("example.com/wiki", "https://example.com/wiki"),
      ("example.com?param=value", "https://example.com?param=value"),
      ("HTTPS://example.com", "https://example.com"),
      ("http:/example.com", "https://example.com"),
      ("https:/example.com", "https://example.com"),
    ];

    for (input, expected) in cases {
      assert_eq!(ensure_url_scheme(input).unwrap(), expected, "input: {input}");
    }
  }

  #[test]
  fn test_ensure_url_scheme_empty() {
    for input in ["", "   "] {
      let error = ensure_url_scheme(input).unwrap_err();
      assert!(error.to_string().contains("Host cannot be empty"));
    }
  }

  #[test]
  fn test_site_config_from_env() {
    let env = EnvVarGuard::new(&[ENV_ATLASSIAN_HOST, ENV_JIRA_HOST, ENV_USER_AGENT]);
    env.set(ENV_ATLASSIAN_HOST, "company.atlassian.net");
    env.remove(ENV_JIRA_HOST);
    env.remove(ENV_USER_AGENT);

    let netrc = NetrcGuard::new("machine company.atlassian.net login me@example.com password token\n");
    let config = SiteConfig::from_env_with_home(netrc.home_dir()).unwrap();

    assert_eq!(config.site, "https://company.atlassian.net");
    assert_eq!(config.user_agent, USER_AGENT);
    assert_eq!(
      config.credentials,
      Some(Credentials {
        username: "me@example.com".to_string(),
        password: "token".to_string(),
      })
    );

    let client = config.into_client().unwrap();
    assert_eq!(client.site().as_str(), "https://company.atlassian.net/");
    assert_eq!(client.authentication().basic_auth(), Some(("me@example.com", "token")));
    assert_eq!(client.authentication().user_agent(), Some(USER_AGENT));
  }

  #[test]
  fn test_site_config_legacy_variable_and_agent_override() {
    let env = EnvVarGuard::new(&[ENV_ATLASSIAN_HOST, ENV_JIRA_HOST, ENV_USER_AGENT]);
    env.remove(ENV_ATLASSIAN_HOST);
    env.set(ENV_JIRA_HOST, "https://legacy.atlassian.net");
    env.set(ENV_USER_AGENT, "my-bot/2.0");

    let netrc = NetrcGuard::new("");
    let config = SiteConfig::from_env_with_home(netrc.home_dir()).unwrap();

    assert_eq!(config.site, "https://legacy.atlassian.net");
    assert_eq!(config.credentials, None);
    assert_eq!(config.user_agent, "my-bot/2.0");
    assert!(!config.authentication().has_basic_auth());
  }

  #[test]
  fn test_site_config_missing_host() {
    let env = EnvVarGuard::new(&[ENV_ATLASSIAN_HOST, ENV_JIRA_HOST]);
    env.remove(ENV_ATLASSIAN_HOST);
    env.remove(ENV_JIRA_HOST);

    let netrc = NetrcGuard::new("");
    let error = SiteConfig::from_env_with_home(netrc.home_dir()).unwrap_err();
    assert!(error.to_string().contains(ENV_ATLASSIAN_HOST));
  }
}
