//! # Response Envelope
//!
//! Normalized record of a completed HTTP exchange. The raw body is captured
//! before the status is classified, so the envelope is just as useful on the
//! failure path as on the success path.

use std::borrow::Cow;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

/// Status, endpoint, method, headers and raw body of a completed exchange
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
  pub status: StatusCode,
  /// Absolute URL the request was sent to
  pub endpoint: String,
  pub method: Method,
  pub headers: HeaderMap,
  /// Body bytes exactly as received
  pub bytes: Vec<u8>,
}

impl ResponseEnvelope {
  /// Numeric status code
  pub fn code(&self) -> u16 {
    self.status.as_u16()
  }

  /// True for status codes in `[200, 300)`
  pub fn is_success(&self) -> bool {
    self.status.is_success()
  }

  /// Body as text, replacing invalid UTF-8 sequences
  pub fn text(&self) -> Cow<'_, str> {
    String::from_utf8_lossy(&self.bytes)
  }

  /// Decode the raw body into `T`
  pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
    serde_json::from_slice(&self.bytes)
  }

  /// Decode the raw body into a dynamic JSON value, for responses whose shape
  /// is not modelled (query it with [`serde_json::Value::pointer`])
  pub fn value(&self) -> serde_json::Result<serde_json::Value> {
    self.json()
  }
}
