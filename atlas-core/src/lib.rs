//! # Atlas Core
//!
//! Shared transport layer for the atlas Atlassian REST clients. Every product
//! client (Jira, Jira Software, Jira Service Management, Confluence) builds its
//! requests and normalizes its responses through the types in this crate:
//!
//! - [`Authentication`] holds basic-auth credentials, the user agent and the
//!   experimental API flag.
//! - [`ApiClient`] resolves relative REST paths against the site, attaches
//!   headers and executes requests through a caller-supplied
//!   [`reqwest::Client`].
//! - [`ResponseEnvelope`] records every completed exchange, raw body included,
//!   whether or not the status was successful.
//! - [`Error`] classifies construction, transport, protocol, decode and
//!   payload encoding failures.

pub mod auth;
pub mod client;
pub mod config;
pub mod consts;
pub mod creds;
pub mod error;
pub mod payload;
pub mod query;
pub mod request;
pub mod response;

pub use auth::Authentication;
pub use client::ApiClient;
pub use error::{Error, Result, require};
pub use payload::to_payload;
pub use query::QueryParams;
pub use request::{ApiRequest, RequestContext};
// Re-export the transport types callers need to name
pub use reqwest::{Method, StatusCode, multipart};
pub use response::ResponseEnvelope;
