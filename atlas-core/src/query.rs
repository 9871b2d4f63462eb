//! Query string encoding for resource paths.
//!
//! Keys are emitted in alphabetical order and values in insertion order, so
//! the same parameters always produce the same query string.

use std::collections::BTreeMap;
use std::fmt::Display;

use url::form_urlencoded;

/// Form-encoded query parameters with deterministic ordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
  params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a value for `key`, keeping earlier values
  pub fn add(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
    self.params.entry(key.into()).or_default().push(value.to_string());
    self
  }

  /// Append `values` joined with commas, skipping empty slices
  pub fn add_joined<S: AsRef<str>>(&mut self, key: impl Into<String>, values: &[S]) -> &mut Self {
    if !values.is_empty() {
      let joined = values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
      self.add(key, joined);
    }
    self
  }

  /// Append `value` only when it is non-empty
  pub fn add_non_empty(&mut self, key: impl Into<String>, value: &str) -> &mut Self {
    if !value.is_empty() {
      self.add(key, value);
    }
    self
  }

  /// Replace every value for `key`
  pub fn set(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
    self.params.insert(key.into(), vec![value.to_string()]);
    self
  }

  pub fn is_empty(&self) -> bool {
    self.params.is_empty()
  }

  /// `application/x-www-form-urlencoded` rendering, keys sorted
  pub fn encode(&self) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in &self.params {
      for value in values {
        serializer.append_pair(key, value);
      }
    }
    serializer.finish()
  }

  /// `path?query`, or `path` unchanged when there are no parameters
  pub fn append_to(&self, path: &str) -> String {
    if self.is_empty() {
      path.to_string()
    } else {
      format!("{path}?{}", self.encode())
    }
  }
}
