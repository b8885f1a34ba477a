/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The client entry point and its builder

use crate::endpoints::{
  journal::JournalEndpoints, teams::TeamEndpoints, users::UserEndpoints,
  workouts::WorkoutEndpoints,
};
use crate::executor::RequestExecutor;
use crate::transport::Transport;
use ladder_core::{ApiBase, Config, Error, Payload, Query, RequestDescriptor, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Main Ladder API client
///
/// Provides access to the Ladder endpoints through organized endpoint groups.
/// The client is immutable after construction; cloning it is cheap and clones
/// share the same transport.
///
/// # Examples
///
/// ```rust,no_run
/// use ladder_client::LadderClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = LadderClient::builder().token("eyJhbGciOi...").build()?;
///
///     let me = client.users().current().await?;
///     println!("Signed in as {:?}", me.as_json().and_then(|v| v.get("id")));
///
///     let teams = client.teams().list().await?;
///     println!("Teams: {:?}", teams);
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct LadderClient {
  executor: Arc<RequestExecutor>,
}

impl LadderClient {
  /// Create a new client using the built-in transport
  ///
  /// # Errors
  ///
  /// Returns [`Error::MissingArgument`] if the token is empty and
  /// [`Error::NoTransport`] if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let config = config.validated()?;
    let transport = default_transport(&config)?;
    Ok(Self::from_parts(&config, transport))
  }

  /// Create a new client that sends every request through `transport`
  pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
    let config = config.validated()?;
    Ok(Self::from_parts(&config, transport))
  }

  /// Create a client from `LADDER_*` environment variables
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Start building a client
  pub fn builder() -> LadderClientBuilder {
    LadderClientBuilder::default()
  }

  fn from_parts(config: &Config, transport: Arc<dyn Transport>) -> Self {
    Self { executor: Arc::new(RequestExecutor::new(config, transport)) }
  }

  /// Get access to user endpoints (current user, profile calendar)
  pub fn users(&self) -> UserEndpoints {
    UserEndpoints::new(self.executor.clone())
  }

  /// Get access to team endpoints
  pub fn teams(&self) -> TeamEndpoints {
    TeamEndpoints::new(self.executor.clone())
  }

  /// Get access to workout journal endpoints
  pub fn journal(&self) -> JournalEndpoints {
    JournalEndpoints::new(self.executor.clone())
  }

  /// Get access to workout, session and movement endpoints
  pub fn workouts(&self) -> WorkoutEndpoints {
    WorkoutEndpoints::new(self.executor.clone())
  }

  /// Issue an arbitrary request, for endpoints without a dedicated wrapper
  pub async fn request(&self, descriptor: RequestDescriptor) -> Result<Payload> {
    self.executor.execute(descriptor).await
  }

  /// GET `path` on `base` with optional query parameters
  pub async fn get(&self, base: ApiBase, path: &str, query: Option<Query>) -> Result<Payload> {
    let mut descriptor = RequestDescriptor::get(base, path);
    descriptor.query = query;
    self.request(descriptor).await
  }

  /// POST a JSON body to `path` on `base`
  pub async fn post(&self, base: ApiBase, path: &str, body: Value) -> Result<Payload> {
    self.request(RequestDescriptor::post(base, path).with_body(body)).await
  }

  /// Host a base selector resolves to
  pub fn base_url(&self, base: ApiBase) -> &str {
    self.executor.base_url(base)
  }
}

#[cfg(feature = "reqwest-transport")]
fn default_transport(config: &Config) -> Result<Arc<dyn Transport>> {
  let transport = crate::transport::ReqwestTransport::new(config.timeout(), &config.user_agent)?;
  Ok(Arc::new(transport))
}

#[cfg(not(feature = "reqwest-transport"))]
fn default_transport(_config: &Config) -> Result<Arc<dyn Transport>> {
  Err(Error::NoTransport(
    "built without the reqwest-transport feature; supply a transport".to_string(),
  ))
}

/// Builder for [`LadderClient`]
#[derive(Default)]
pub struct LadderClientBuilder {
  token: Option<String>,
  primary_url: Option<String>,
  secondary_url: Option<String>,
  timeout: Option<Duration>,
  user_agent: Option<String>,
  transport: Option<Arc<dyn Transport>>,
}

impl LadderClientBuilder {
  /// Bearer token, required
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.token = Some(token.into());
    self
  }

  /// Override the primary host
  pub fn primary_url(mut self, url: impl Into<String>) -> Self {
    self.primary_url = Some(url.into());
    self
  }

  /// Override the secondary host
  pub fn secondary_url(mut self, url: impl Into<String>) -> Self {
    self.secondary_url = Some(url.into());
    self
  }

  /// Request timeout for the built-in transport
  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// User agent for the built-in transport
  pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = Some(user_agent.into());
    self
  }

  /// Send requests through a custom transport instead of the built-in one
  pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
    self.transport = Some(transport);
    self
  }

  /// Build the client
  ///
  /// # Errors
  ///
  /// [`Error::MissingArgument`] without a non-empty token, [`Error::NoTransport`]
  /// when no transport was supplied and the built-in one is unavailable.
  pub fn build(self) -> Result<LadderClient> {
    let token = self.token.ok_or_else(|| Error::MissingArgument("token is required".to_string()))?;

    let mut config = Config::default_with_token(token);
    if let Some(url) = self.primary_url {
      config.primary_url = url;
    }
    if let Some(url) = self.secondary_url {
      config.secondary_url = url;
    }
    if let Some(timeout) = self.timeout {
      config.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    }
    if let Some(user_agent) = self.user_agent {
      config.user_agent = user_agent;
    }

    match self.transport {
      Some(transport) => LadderClient::with_transport(config, transport),
      None => LadderClient::new(config),
    }
  }
}
