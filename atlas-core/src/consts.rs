//! Constants for the atlas transport core.

/// Default User-Agent header value used when a client is configured from the
/// environment
pub const USER_AGENT: &str = concat!("atlas/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Media type sent in `Accept` on every request and in `Content-Type` on JSON
/// bodies
pub const APPLICATION_JSON: &str = "application/json";

/// Header that disables the XSRF check Atlassian applies to multipart uploads
pub const ATLASSIAN_TOKEN_HEADER: &str = "X-Atlassian-Token";

/// Value for [`ATLASSIAN_TOKEN_HEADER`]
pub const ATLASSIAN_TOKEN_NO_CHECK: &str = "no-check";

/// Header that opts into Jira Service Management experimental endpoints
pub const EXPERIMENTAL_API_HEADER: &str = "X-ExperimentalApi";

/// Value for [`EXPERIMENTAL_API_HEADER`]
pub const EXPERIMENTAL_API_OPT_IN: &str = "opt-in";
