//! # Atlas HTTP Client
//!
//! Composition root of the transport core. [`ApiClient`] owns the site URL,
//! the injected [`reqwest::Client`] and the [`Authentication`] strategy. It
//! builds requests against the site and normalizes every response into a
//! [`ResponseEnvelope`].

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::multipart::Form;
use reqwest::{Body, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::auth::Authentication;
use crate::consts::{
  APPLICATION_JSON, ATLASSIAN_TOKEN_HEADER, ATLASSIAN_TOKEN_NO_CHECK, EXPERIMENTAL_API_HEADER, EXPERIMENTAL_API_OPT_IN,
};
use crate::error::{Error, Result};
use crate::request::{ApiRequest, RequestContext};
use crate::response::ResponseEnvelope;

/// Shared request builder and executor for one Atlassian site
#[derive(Debug, Clone)]
pub struct ApiClient {
  http: Client,
  site: Url,
  auth: Authentication,
}

impl ApiClient {
  /// Create a client for `site` using a default [`reqwest::Client`]
  pub fn new(site: &str, auth: Authentication) -> Result<Self> {
    Self::with_transport(Client::new(), site, auth)
  }

  /// Create a client for `site` that sends requests through `http`.
  ///
  /// The site is normalized to end with `/` so relative paths resolve below
  /// it rather than replacing its last segment.
  pub fn with_transport(http: Client, site: &str, auth: Authentication) -> Result<Self> {
    let normalized = if site.ends_with('/') {
      site.to_string()
    } else {
      format!("{site}/")
    };

    let site = Url::parse(&normalized).map_err(|source| Error::InvalidSite {
      site: normalized.clone(),
      source,
    })?;

    Ok(Self { http, site, auth })
  }

  /// The base site, always ending in `/`
  pub const fn site(&self) -> &Url {
    &self.site
  }

  pub const fn authentication(&self) -> &Authentication {
    &self.auth
  }

  /// Configure credentials before the client is shared
  pub const fn authentication_mut(&mut self) -> &mut Authentication {
    &mut self.auth
  }

  /// Resolve a relative REST path against the site
  pub fn resolve(&self, path: &str) -> Result<Url> {
    self.site.join(path).map_err(|source| Error::InvalidPath {
      path: path.to_string(),
      source,
    })
  }

  /// Build a JSON request.
  ///
  /// `Accept: application/json` is always set; `Content-Type:
  /// application/json` only when `body` is present.
  pub fn new_request(
    &self,
    ctx: &RequestContext,
    method: Method,
    path: &str,
    body: Option<Vec<u8>>,
  ) -> Result<ApiRequest> {
    let mut builder = self.builder(ctx, method, path)?;

    if let Some(body) = body {
      builder = builder.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
    }

    Self::finish(builder, ctx)
  }

  /// Build a request with an explicit content type, flagged with
  /// `X-Atlassian-Token: no-check` as required for form uploads
  pub fn new_form_request(
    &self,
    ctx: &RequestContext,
    method: Method,
    path: &str,
    content_type: &str,
    body: impl Into<Body>,
  ) -> Result<ApiRequest> {
    let builder = self
      .builder(ctx, method, path)?
      .header(CONTENT_TYPE, content_type)
      .header(ATLASSIAN_TOKEN_HEADER, ATLASSIAN_TOKEN_NO_CHECK)
      .body(body);

    Self::finish(builder, ctx)
  }

  /// Build a `multipart/form-data` upload; the boundary-carrying content type
  /// is derived from `form`
  pub fn new_multipart_request(
    &self,
    ctx: &RequestContext,
    method: Method,
    path: &str,
    form: Form,
  ) -> Result<ApiRequest> {
    let builder = self
      .builder(ctx, method, path)?
      .header(ATLASSIAN_TOKEN_HEADER, ATLASSIAN_TOKEN_NO_CHECK)
      .multipart(form);

    Self::finish(builder, ctx)
  }

  /// Execute `request` without decoding the body.
  ///
  /// Non-2xx responses fail with [`Error::UnexpectedStatus`], which still
  /// carries the envelope and its raw body.
  pub async fn call(&self, request: ApiRequest) -> Result<ResponseEnvelope> {
    self.execute(request).await
  }

  /// Execute `request` and decode a successful body into `T`.
  ///
  /// Decoding is only attempted for 2xx responses. The envelope is returned
  /// alongside the value and is attached to every error raised after the
  /// server answered.
  pub async fn call_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<(T, ResponseEnvelope)> {
    let response = self.execute(request).await?;

    match serde_json::from_slice::<T>(&response.bytes) {
      Ok(value) => Ok((value, response)),
      Err(source) => {
        debug!(endpoint = %response.endpoint, error = %source, "Failed to decode response body");
        Err(Error::Decode {
          source,
          response: Box::new(response),
        })
      }
    }
  }

  fn builder(&self, ctx: &RequestContext, method: Method, path: &str) -> Result<RequestBuilder> {
    let endpoint = self.resolve(path)?;

    let mut builder = self.http.request(method, endpoint).header(ACCEPT, APPLICATION_JSON);

    if let Some((identity, secret)) = self.auth.basic_auth() {
      builder = builder.basic_auth(identity, Some(secret));
    }

    if let Some(agent) = self.auth.user_agent() {
      builder = builder.header(USER_AGENT, agent);
    }

    if self.auth.has_experimental_flag() {
      builder = builder.header(EXPERIMENTAL_API_HEADER, EXPERIMENTAL_API_OPT_IN);
    }

    if let Some(timeout) = ctx.timeout() {
      builder = builder.timeout(timeout);
    }

    Ok(builder)
  }

  fn finish(builder: RequestBuilder, ctx: &RequestContext) -> Result<ApiRequest> {
    let inner = builder.build().map_err(Error::Request)?;

    Ok(ApiRequest {
      inner,
      cancellation: ctx.cancellation().clone(),
    })
  }

  #[instrument(
    level = "debug",
    skip_all,
    fields(method = %request.method(), endpoint = %request.url())
  )]
  async fn execute(&self, request: ApiRequest) -> Result<ResponseEnvelope> {
    let ApiRequest { inner, cancellation } = request;
    let method = inner.method().clone();

    debug!("Sending request");
    let response = tokio::select! {
      biased;
      () = cancellation.cancelled() => return Err(Error::Cancelled),
      result = self.http.execute(inner) => result.map_err(Error::Transport)?,
    };

    let status = response.status();
    let endpoint = response.url().to_string();
    let headers = response.headers().clone();

    // The body is buffered before the status is classified so failures keep it.
    let bytes = tokio::select! {
      biased;
      () = cancellation.cancelled() => return Err(Error::Cancelled),
      result = response.bytes() => result.map_err(Error::Transport)?.to_vec(),
    };
    trace!(status = status.as_u16(), body_len = bytes.len(), "Read response body");

    let envelope = ResponseEnvelope {
      status,
      endpoint,
      method,
      headers,
      bytes,
    };

    if !envelope.is_success() {
      warn!(status = envelope.code(), body = %envelope.text(), "Unexpected response status");
      return Err(Error::UnexpectedStatus(Box::new(envelope)));
    }

    debug!(status = envelope.code(), "Request succeeded");
    Ok(envelope)
  }
}
