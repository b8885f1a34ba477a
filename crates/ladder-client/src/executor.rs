//! Request execution: headers, dispatch and response normalization

use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::url_builder::build_url;
use ladder_core::{
  ApiBase, Config, Error, Payload, RequestDescriptor, Result, ACCEPT_HEADER_VALUE,
  JSON_CONTENT_TYPE,
};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Turns a [`RequestDescriptor`] into a decoded [`Payload`].
///
/// Holds only read-only state, so one executor is shared by every endpoint
/// group and any number of concurrent calls.
pub struct RequestExecutor {
  token: String,
  primary_url: String,
  secondary_url: String,
  transport: Arc<dyn Transport>,
}

impl RequestExecutor {
  /// Create an executor from an already validated config
  pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Self {
    Self {
      token: config.token.clone(),
      primary_url: config.primary_url.clone(),
      secondary_url: config.secondary_url.clone(),
      transport,
    }
  }

  /// Host that `base` resolves to
  pub fn base_url(&self, base: ApiBase) -> &str {
    match base {
      ApiBase::Primary => &self.primary_url,
      ApiBase::Secondary => &self.secondary_url,
    }
  }

  fn headers(&self, has_body: bool) -> Vec<(String, String)> {
    let mut headers = vec![
      ("Authorization".to_string(), format!("Bearer {}", self.token)),
      ("Accept".to_string(), ACCEPT_HEADER_VALUE.to_string()),
    ];
    if has_body {
      headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
    }
    headers
  }

  /// Send the request and decode the response.
  ///
  /// # Errors
  ///
  /// * [`Error::InvalidUrl`] if host and path do not form a URL
  /// * whatever the transport returns when no response was received
  /// * [`Error::Http`] for a status outside 2xx, carrying the decoded body
  #[instrument(
    skip(self, descriptor),
    fields(method = %descriptor.method, base = %descriptor.base, path = %descriptor.path)
  )]
  pub async fn execute(&self, descriptor: RequestDescriptor) -> Result<Payload> {
    let RequestDescriptor { base, path, query, method, body } = descriptor;

    let url = build_url(self.base_url(base), &path, query.as_ref())?;

    let body = match body {
      Some(body) if method.allows_body() => Some(serde_json::to_string(&body)?),
      _ => None,
    };

    let request =
      HttpRequest { method, url: url.clone(), headers: self.headers(body.is_some()), body };

    debug!("Making {} request to: {}", method, url);
    let response = self.transport.send(request).await?;

    let payload = decode_body(&response);

    if !response.is_success() {
      debug!("Request failed with status: {} {}", response.status, response.status_text);
      return Err(Error::Http {
        status: response.status,
        status_text: response.status_text,
        url,
        body: payload,
      });
    }

    Ok(payload)
  }
}

/// Decode a response body according to its declared content type.
///
/// JSON that fails to parse, including an empty body, becomes JSON `null`.
pub fn decode_body(response: &HttpResponse) -> Payload {
  if !response.is_json() {
    return Payload::Text(response.text());
  }

  match serde_json::from_slice::<Value>(&response.body) {
    Ok(value) => Payload::Json(value),
    Err(e) => {
      warn!("Discarding undecodable JSON body ({} bytes): {}", response.body.len(), e);
      Payload::Json(Value::Null)
    }
  }
}

impl fmt::Debug for RequestExecutor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RequestExecutor")
      .field("primary_url", &self.primary_url)
      .field("secondary_url", &self.secondary_url)
      .field("transport", &"Transport")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{json_response, raw_response, text_response, MockTransport};
  use ladder_core::{HttpMethod, Query};
  use serde_json::json;

  fn executor(transport: Arc<MockTransport>) -> RequestExecutor {
    let config = Config::default_with_token("test-token").validated().unwrap();
    RequestExecutor::new(&config, transport)
  }

  #[tokio::test]
  async fn test_get_sets_standard_headers() {
    let transport = Arc::new(MockTransport::new());
    transport.push_json(200, &json!({"id": "u1"}));

    let result =
      executor(transport.clone()).execute(RequestDescriptor::get(ApiBase::Primary, "/users/me")).await;

    assert_eq!(result.unwrap(), Payload::Json(json!({"id": "u1"})));

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "https://rocky-api.prod.ltdev.io/users/me");
    assert_eq!(request.header("Authorization"), Some("Bearer test-token"));
    assert_eq!(request.header("Accept"), Some("application/json, text/plain;q=0.9,*/*;q=0.8"));
    assert_eq!(request.header("Content-Type"), None);
    assert_eq!(request.body, None);
  }

  #[tokio::test]
  async fn test_get_never_sends_body() {
    let transport = Arc::new(MockTransport::new());
    let descriptor =
      RequestDescriptor::get(ApiBase::Primary, "/v1/listTeams").with_body(json!({"stray": true}));

    executor(transport.clone()).execute(descriptor).await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.header("content-type"), None);
    assert_eq!(request.body, None);
  }

  #[tokio::test]
  async fn test_post_serializes_body() {
    let transport = Arc::new(MockTransport::new());
    transport.push_json(201, &json!({"ok": true}));
    let body = json!({"name": "Leg day", "sets": [3, 4], "notes": null});

    let result = executor(transport.clone())
      .execute(RequestDescriptor::post(ApiBase::Primary, "/v1/things").with_body(body.clone()))
      .await
      .unwrap();

    assert_eq!(result.as_json().unwrap()["ok"], true);
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.body.as_deref(), Some(serde_json::to_string(&body).unwrap().as_str()));
  }

  #[tokio::test]
  async fn test_post_without_body_has_no_content_type() {
    let transport = Arc::new(MockTransport::new());

    executor(transport.clone())
      .execute(RequestDescriptor::post(ApiBase::Primary, "/v1/ping"))
      .await
      .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.header("Content-Type"), None);
    assert_eq!(request.body, None);
  }

  #[tokio::test]
  async fn test_secondary_base_and_query() {
    let transport = Arc::new(MockTransport::new());
    let descriptor = RequestDescriptor::get(ApiBase::Secondary, "/api/workouts/w1")
      .with_query(Query::params().set("preview", true).set("skip", None::<&str>));

    executor(transport.clone()).execute(descriptor).await.unwrap();

    assert_eq!(
      transport.last_request().unwrap().url,
      "https://www.joinladder.com/api/workouts/w1?preview=true"
    );
  }

  #[tokio::test]
  async fn test_text_body_returned_verbatim() {
    let transport = Arc::new(MockTransport::new());
    transport.push_text(200, "{\"looks\": \"like json\"}");

    let result = executor(transport)
      .execute(RequestDescriptor::get(ApiBase::Primary, "/health"))
      .await
      .unwrap();

    assert_eq!(result, Payload::Text("{\"looks\": \"like json\"}".to_string()));
  }

  #[tokio::test]
  async fn test_malformed_json_yields_null() {
    let transport = Arc::new(MockTransport::new());
    transport.push(Ok(raw_response(200, Some("application/json"), b"{not json".to_vec())));
    transport.push(Ok(raw_response(204, Some("application/json"), Vec::new())));

    let executor = executor(transport);
    let malformed =
      executor.execute(RequestDescriptor::get(ApiBase::Primary, "/v1/a")).await.unwrap();
    let empty = executor.execute(RequestDescriptor::get(ApiBase::Primary, "/v1/b")).await.unwrap();

    assert!(malformed.is_null());
    assert!(empty.is_null());
  }

  #[tokio::test]
  async fn test_error_status_carries_json_body() {
    let transport = Arc::new(MockTransport::new());
    transport.push_json(404, &json!({"error": "nope"}));

    let err = executor(transport)
      .execute(RequestDescriptor::get(ApiBase::Primary, "/v1/missing"))
      .await
      .unwrap_err();

    match err {
      Error::Http { status, status_text, url, body } => {
        assert_eq!(status, 404);
        assert_eq!(status_text, "Not Found");
        assert_eq!(url, "https://rocky-api.prod.ltdev.io/v1/missing");
        assert_eq!(body.as_json().unwrap()["error"], "nope");
      }
      other => panic!("Expected Http error, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_error_status_carries_text_and_null_bodies() {
    let transport = Arc::new(MockTransport::new());
    transport.push_text(401, "token expired");
    transport.push(Ok(raw_response(500, Some("application/json"), b"<html>".to_vec())));

    let executor = executor(transport);

    let unauthorized =
      executor.execute(RequestDescriptor::get(ApiBase::Primary, "/users/me")).await.unwrap_err();
    assert_eq!(unauthorized.status(), Some(401));
    assert_eq!(unauthorized.body().and_then(Payload::as_text), Some("token expired"));
    assert!(unauthorized.to_string().contains("401 Unauthorized"));

    let server =
      executor.execute(RequestDescriptor::get(ApiBase::Primary, "/users/me")).await.unwrap_err();
    assert_eq!(server.status(), Some(500));
    assert!(server.body().unwrap().is_null());
  }

  #[tokio::test]
  async fn test_transport_failure_propagates() {
    let transport = Arc::new(MockTransport::new());
    transport.push(Err(Error::Transport("connection refused".to_string())));

    let err = executor(transport)
      .execute(RequestDescriptor::get(ApiBase::Primary, "/users/me"))
      .await
      .unwrap_err();

    assert!(matches!(err, Error::Transport(ref msg) if msg == "connection refused"));
  }

  #[tokio::test]
  async fn test_invalid_url_never_reaches_transport() {
    let transport = Arc::new(MockTransport::new());
    let mut config = Config::default_with_token("t");
    config.primary_url = "::not a url::".to_string();
    let executor = RequestExecutor::new(&config, transport.clone());

    let err =
      executor.execute(RequestDescriptor::get(ApiBase::Primary, "/users/me")).await.unwrap_err();

    assert!(matches!(err, Error::InvalidUrl(_)));
    assert_eq!(transport.call_count(), 0);
  }

  #[test]
  fn test_decode_body_without_content_type_is_text() {
    let payload = decode_body(&raw_response(200, None, b"[1,2]".to_vec()));
    assert_eq!(payload, Payload::Text("[1,2]".to_string()));
    assert_eq!(decode_body(&json_response(200, &json!([1, 2]))), Payload::Json(json!([1, 2])));
    assert_eq!(decode_body(&text_response(200, "")), Payload::Text(String::new()));
  }
}
