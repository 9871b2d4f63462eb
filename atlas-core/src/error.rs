//! # Transport Errors
//!
//! Failure taxonomy for the transport core. Variants that occur after a
//! response was received carry the [`ResponseEnvelope`] so callers can still
//! report the endpoint, status and raw body.

use reqwest::StatusCode;
use thiserror::Error;

use crate::response::ResponseEnvelope;

/// Result alias used across the atlas crates
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while building, sending or decoding a request
#[derive(Debug, Error)]
pub enum Error {
  /// A required identifier or field was empty; no request was built
  #[error("the {field} is required, please provide a valid value")]
  MissingField { field: &'static str },

  #[error("invalid site url '{site}': {source}")]
  InvalidSite {
    site: String,
    #[source]
    source: url::ParseError,
  },

  #[error("invalid relative path '{path}': {source}")]
  InvalidPath {
    path: String,
    #[source]
    source: url::ParseError,
  },

  /// The transport rejected the request while assembling it (e.g. a header
  /// value containing control characters)
  #[error("failed to build request: {0}")]
  Request(#[source] reqwest::Error),

  /// Connection, DNS, TLS, timeout or body read failure; no envelope exists
  #[error("transport failure: {0}")]
  Transport(#[source] reqwest::Error),

  #[error("request cancelled before the exchange completed")]
  Cancelled,

  /// The server answered outside the 2xx range
  #[error("unexpected status {} from {} {}", .0.status, .0.method, .0.endpoint)]
  UnexpectedStatus(Box<ResponseEnvelope>),

  /// A successful response could not be decoded into the requested type
  #[error("failed to decode response from {}: {source}", .response.endpoint)]
  Decode {
    #[source]
    source: serde_json::Error,
    response: Box<ResponseEnvelope>,
  },

  #[error("the payload cannot be nil, please provide a valid value")]
  NilPayload,

  #[error("failed to encode payload: {0}")]
  Encode(#[source] serde_json::Error),
}

impl Error {
  /// The response envelope attached to this error, if the server answered
  pub fn response(&self) -> Option<&ResponseEnvelope> {
    match self {
      Self::UnexpectedStatus(response) | Self::Decode { response, .. } => Some(&**response),
      _ => None,
    }
  }

  /// Status code of the attached response, if any
  pub fn status(&self) -> Option<StatusCode> {
    self.response().map(|response| response.status)
  }

  pub fn is_not_found(&self) -> bool {
    self.status() == Some(StatusCode::NOT_FOUND)
  }

  /// True for 401 and 403 responses
  pub fn is_unauthorized(&self) -> bool {
    matches!(
      self.status(),
      Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
    )
  }

  pub const fn is_cancelled(&self) -> bool {
    matches!(self, Self::Cancelled)
  }
}

/// Reject an empty or blank identifier before any request is built
pub fn require(value: &str, field: &'static str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::MissingField { field });
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use reqwest::Method;
  use reqwest::header::HeaderMap;

  use super::*;

  fn envelope(status: StatusCode) -> ResponseEnvelope {
    ResponseEnvelope {
      status,
      endpoint: "https://x.atlassian.net/rest/api/3/issue/ABC-1".to_string(),
      method: Method::GET,
      headers: HeaderMap::new(),
      bytes: br#"{"errorMessages":["bad"]}"#.to_vec(),
    }
  }

  #[test]
  fn test_unexpected_status_exposes_response() {
    let error = Error::UnexpectedStatus(Box::new(envelope(StatusCode::NOT_FOUND)));

    let response = error.response().unwrap();
    assert_eq!(response.code(), 404);
    assert_eq!(response.bytes, br#"{"errorMessages":["bad"]}"#);
    assert!(error.is_not_found());
    assert!(!error.is_unauthorized());
  }

  #[test]
  fn test_unexpected_status_message() {
    let error = Error::UnexpectedStatus(Box::new(envelope(StatusCode::BAD_REQUEST)));
    let message = error.to_string();

    assert!(message.contains("400"));
    assert!(message.contains("GET"));
    assert!(message.contains("https://x.atlassian.net/rest/api/3/issue/ABC-1"));
  }

  #[test]
  fn test_unauthorized_covers_forbidden() {
    assert!(Error::UnexpectedStatus(Box::new(envelope(StatusCode::UNAUTHORIZED))).is_unauthorized());
    assert!(Error::UnexpectedStatus(Box::new(envelope(StatusCode::FORBIDDEN))).is_unauthorized());
  }

  #[test]
  fn test_errors_without_response() {
    assert!(Error::Cancelled.response().is_none());
    assert!(Error::Cancelled.is_cancelled());
    assert!(Error::NilPayload.response().is_none());
    assert!(Error::MissingField { field: "sprint id" }.status().is_none());
  }

  #[test]
  fn test_require_rejects_blank_values() {
    for blank in ["", "  ", "\t\n"] {
      assert!(matches!(
        require(blank, "issue key or id"),
        Err(Error::MissingField {
          field: "issue key or id"
        })
      ));
    }
    assert!(require("ABC-1", "issue key or id").is_ok());
  }

  #[test]
  fn test_missing_field_message() {
    let error = Error::MissingField {
      field: "issue key or id",
    };
    assert_eq!(
      error.to_string(),
      "the issue key or id is required, please provide a valid value"
    );
  }
}
