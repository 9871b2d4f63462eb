//! Request descriptors and the per-call context that travels with them.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Method, Request};
use tokio_util::sync::CancellationToken;
use url::Url;

/// Per-call cancellation and deadline.
///
/// Cancelling the token aborts an in-flight call with
/// [`Error::Cancelled`](crate::Error::Cancelled); an elapsed timeout surfaces
/// as [`Error::Transport`](crate::Error::Transport).
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
  cancellation: CancellationToken,
  timeout: Option<Duration>,
}

impl RequestContext {
  pub fn new() -> Self {
    Self::default()
  }

  /// Tie calls made with this context to an existing token
  pub const fn with_cancellation(cancellation: CancellationToken) -> Self {
    Self {
      cancellation,
      timeout: None,
    }
  }

  /// Bound the whole exchange, from connect to the last body byte
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// A context cancelled together with this one, but cancellable on its own
  pub fn child(&self) -> Self {
    Self {
      cancellation: self.cancellation.child_token(),
      timeout: self.timeout,
    }
  }

  pub const fn cancellation(&self) -> &CancellationToken {
    &self.cancellation
  }

  pub const fn timeout(&self) -> Option<Duration> {
    self.timeout
  }

  pub fn cancel(&self) {
    self.cancellation.cancel();
  }

  pub fn is_cancelled(&self) -> bool {
    self.cancellation.is_cancelled()
  }
}

/// A fully built request: resolved URL, headers, body and the context it was
/// built with. Consumed by [`ApiClient::call`](crate::ApiClient::call).
#[derive(Debug)]
pub struct ApiRequest {
  pub(crate) inner: Request,
  pub(crate) cancellation: CancellationToken,
}

impl ApiRequest {
  pub fn method(&self) -> &Method {
    self.inner.method()
  }

  /// The absolute URL after resolving the relative path against the site
  pub fn url(&self) -> &Url {
    self.inner.url()
  }

  pub fn headers(&self) -> &HeaderMap {
    self.inner.headers()
  }

  pub fn content_type(&self) -> Option<&str> {
    self.headers().get(CONTENT_TYPE).and_then(|value| value.to_str().ok())
  }

  /// Buffered body bytes; `None` for requests without a body
  pub fn body(&self) -> Option<&[u8]> {
    self.inner.body().and_then(|body| body.as_bytes())
  }

  pub fn timeout(&self) -> Option<Duration> {
    self.inner.timeout().copied()
  }
}
