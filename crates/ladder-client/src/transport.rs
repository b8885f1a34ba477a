//! HTTP transport layer for Ladder API requests
//!
//! The executor never touches the network itself: it hands a fully built
//! [`HttpRequest`] to a [`Transport`] and gets an [`HttpResponse`] back. The
//! default implementation is [`ReqwestTransport`]; tests and alternate runtimes
//! plug in their own.

use async_trait::async_trait;
use ladder_core::{HttpMethod, Result};

/// A request ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
  /// HTTP method
  pub method: HttpMethod,
  /// Absolute URL including the query string
  pub url: String,
  /// Header name/value pairs in the order they were added
  pub headers: Vec<(String, String)>,
  /// Serialized body, only ever set for non-GET requests
  pub body: Option<String>,
}

impl HttpRequest {
  /// Look up a header value, ignoring the case of the name
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(k, _)| k.eq_ignore_ascii_case(name))
      .map(|(_, v)| v.as_str())
  }
}

/// A response as returned by the transport, body fully read
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
  /// Numeric status code
  pub status: u16,
  /// Reason phrase for the status
  pub status_text: String,
  /// Value of the `Content-Type` header, if any
  pub content_type: Option<String>,
  /// Raw body bytes
  pub body: Vec<u8>,
}

impl HttpResponse {
  /// True for status codes in 200..=299
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }

  /// True when the declared content type mentions `application/json`
  pub fn is_json(&self) -> bool {
    self
      .content_type
      .as_deref()
      .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
  }

  /// Body decoded as UTF-8, invalid sequences replaced
  pub fn text(&self) -> String {
    String::from_utf8_lossy(&self.body).into_owned()
  }
}

/// Canonical reason phrase for a status code, empty when there is none
pub fn reason_phrase(status: u16) -> &'static str {
  http::StatusCode::from_u16(status).ok().and_then(|s| s.canonical_reason()).unwrap_or_default()
}

/// Performs one HTTP round trip.
///
/// Implementations own timeouts, cancellation, pooling and any retry policy.
/// A failure to obtain a response at all should be reported as
/// [`ladder_core::Error::Transport`]; non-2xx responses are *not* errors here.
#[async_trait]
pub trait Transport: Send + Sync {
  /// Send the request and return the response with its body read
  async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[cfg(feature = "reqwest-transport")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest-transport")]
mod reqwest_transport {
  use super::{reason_phrase, HttpRequest, HttpResponse, Transport};
  use async_trait::async_trait;
  use ladder_core::{Error, HttpMethod, Result};
  use reqwest::header::CONTENT_TYPE;
  use reqwest::{Client, Method};
  use std::time::Duration;
  use tracing::debug;

  /// Transport backed by a shared `reqwest::Client`
  #[derive(Debug, Clone)]
  pub struct ReqwestTransport {
    client: Client,
  }

  impl ReqwestTransport {
    /// Create a transport with its own connection pool
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTransport`] if the HTTP client cannot be created.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
      let client = Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| Error::NoTransport(format!("Failed to create HTTP client: {}", e)))?;

      Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one with custom proxies or TLS roots
    pub fn from_client(client: Client) -> Self {
      Self { client }
    }
  }

  fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
      HttpMethod::Get => Method::GET,
      HttpMethod::Post => Method::POST,
      HttpMethod::Put => Method::PUT,
      HttpMethod::Patch => Method::PATCH,
      HttpMethod::Delete => Method::DELETE,
    }
  }

  #[async_trait]
  impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
      let mut builder = self.client.request(to_reqwest_method(request.method), &request.url);
      for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
      }
      if let Some(body) = request.body {
        builder = builder.body(body);
      }

      let response =
        builder.send().await.map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

      let status = response.status();
      let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

      let body = response
        .bytes()
        .await
        .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;

      debug!("Response status {} with {} body bytes", status, body.len());

      Ok(HttpResponse {
        status: status.as_u16(),
        status_text: reason_phrase(status.as_u16()).to_string(),
        content_type,
        body: body.to_vec(),
      })
    }
  }
}
