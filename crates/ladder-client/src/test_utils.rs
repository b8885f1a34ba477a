//! In-memory transport for tests

use crate::transport::{reason_phrase, HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use ladder_core::Result;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that records every request and replays queued responses.
///
/// When the queue is empty it answers `200` with a JSON `null` body.
#[derive(Default)]
pub struct MockTransport {
  responses: Mutex<VecDeque<Result<HttpResponse>>>,
  requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
  /// Create an empty mock
  pub fn new() -> Self {
    Self::default()
  }

  /// Queue a response (or transport failure) for the next call
  pub fn push(&self, response: Result<HttpResponse>) -> &Self {
    self.responses.lock().expect("mock transport lock poisoned").push_back(response);
    self
  }

  /// Queue a JSON response
  pub fn push_json(&self, status: u16, body: &Value) -> &Self {
    self.push(Ok(json_response(status, body)))
  }

  /// Queue a `text/plain` response
  pub fn push_text(&self, status: u16, body: &str) -> &Self {
    self.push(Ok(text_response(status, body)))
  }

  /// All requests seen so far
  pub fn requests(&self) -> Vec<HttpRequest> {
    self.requests.lock().expect("mock transport lock poisoned").clone()
  }

  /// Number of times the transport was invoked
  pub fn call_count(&self) -> usize {
    self.requests.lock().expect("mock transport lock poisoned").len()
  }

  /// The most recent request
  pub fn last_request(&self) -> Option<HttpRequest> {
    self.requests.lock().expect("mock transport lock poisoned").last().cloned()
  }
}

#[async_trait]
impl Transport for MockTransport {
  async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
    self.requests.lock().expect("mock transport lock poisoned").push(request);
    self
      .responses
      .lock()
      .expect("mock transport lock poisoned")
      .pop_front()
      .unwrap_or_else(|| Ok(json_response(200, &Value::Null)))
  }
}

/// Build a response with `application/json` content type
pub fn json_response(status: u16, body: &Value) -> HttpResponse {
  raw_response(status, Some("application/json"), body.to_string().into_bytes())
}

/// Build a response with `text/plain` content type
pub fn text_response(status: u16, body: &str) -> HttpResponse {
  raw_response(status, Some("text/plain; charset=utf-8"), body.as_bytes().to_vec())
}

/// Build a response with an arbitrary content type and body
pub fn raw_response(status: u16, content_type: Option<&str>, body: Vec<u8>) -> HttpResponse {
  HttpResponse {
    status,
    status_text: reason_phrase(status).to_string(),
    content_type: content_type.map(str::to_string),
    body,
  }
}
