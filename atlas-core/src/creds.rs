//! # Credentials
//!
//! Discovery of Atlassian API credentials from `.netrc` files. A site entry
//! (`machine x.atlassian.net`) wins over the shared `machine atlassian.net`
//! fallback, which wins over a `default` entry.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Machine entry shared by every Atlassian Cloud site
pub const FALLBACK_MACHINE: &str = "atlassian.net";

/// Login and API token for one machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// ```
/// use std::path::Path;
/// use atlas_core::creds::netrc_path;
///
/// assert_eq!(netrc_path(Path::new("/home/user")), Path::new("/home/user/.netrc"));
/// ```
pub fn netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Finds the credentials for `target_machine` in `.netrc` content.
///
/// Both the single-line (`machine host login user password pass`) and the
/// multi-line layouts are accepted. Entries missing a login or password are
/// ignored.
pub fn parse_netrc(content: &str, target_machine: &str) -> Option<Credentials> {
  netrc_entries(content)
    .into_iter()
    .filter(|entry| entry.machine == Some(target_machine))
    .find_map(NetrcEntry::credentials)
}

/// Finds the credentials of the `default` entry, which applies to any
/// machine without an entry of its own.
///
/// ```
/// use atlas_core::creds::parse_netrc_default;
///
/// let content = "machine a.atlassian.net login a password x\ndefault login anon password y";
/// assert_eq!(parse_netrc_default(content).unwrap().username, "anon");
/// ```
pub fn parse_netrc_default(content: &str) -> Option<Credentials> {
  netrc_entries(content)
    .into_iter()
    .filter(|entry| entry.is_default)
    .find_map(NetrcEntry::credentials)
}

fn netrc_entries(content: &str) -> Vec<NetrcEntry<'_>> {
  let mut entries: Vec<NetrcEntry<'_>> = Vec::new();
  let mut tokens = content.split_whitespace();

  while let Some(token) = tokens.next() {
    match token {
      "machine" => entries.push(NetrcEntry {
        machine: tokens.next(),
        ..NetrcEntry::default()
      }),
      "default" => entries.push(NetrcEntry {
        is_default: true,
        ..NetrcEntry::default()
      }),
      "login" => {
        if let Some(entry) = entries.last_mut() {
          entry.login = tokens.next();
        }
      }
      "password" => {
        if let Some(entry) = entries.last_mut() {
          entry.password = tokens.next();
        }
      }
      _ => {}
    }
  }

  entries
}

#[derive(Default)]
struct NetrcEntry<'a> {
  machine: Option<&'a str>,
  is_default: bool,
  login: Option<&'a str>,
  password: Option<&'a str>,
}

impl NetrcEntry<'_> {
  fn credentials(self) -> Option<Credentials> {
    Some(Credentials {
      username: self.login?.to_string(),
      password: self.password?.to_string(),
    })
  }
}

/// Strips the scheme, any path and trailing slashes from a host so it can be
/// matched against `.netrc` machine names.
///
/// ```
/// use atlas_core::creds::normalize_host;
///
/// assert_eq!(normalize_host("https://example.atlassian.net/"), "example.atlassian.net");
/// assert_eq!(normalize_host("http://jira.local:8080/jira"), "jira.local:8080");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  let trimmed = raw_host.trim();
  let without_scheme = trimmed
    .split_once("://")
    .map(|(_, rest)| rest)
    .unwrap_or(trimmed);

  without_scheme
    .split('/')
    .next()
    .unwrap_or(without_scheme)
    .to_string()
}

/// Look up credentials for `host` in `<home>/.netrc`, falling back to the
/// shared [`FALLBACK_MACHINE`] entry and then to the `default` entry.
pub fn netrc_credentials(home: &Path, host: &str) -> Result<Option<Credentials>> {
  let path = netrc_path(home);
  if !path.exists() {
    debug!(path = %path.display(), "No .netrc file found");
    return Ok(None);
  }

  let content =
    std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

  let machine = normalize_host(host);
  let credentials = parse_netrc(&content, &machine)
    .or_else(|| parse_netrc(&content, FALLBACK_MACHINE))
    .or_else(|| parse_netrc_default(&content));
  debug!(machine = %machine, found = credentials.is_some(), "Looked up .netrc credentials");

  Ok(credentials)
}
