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

use crate::types::Payload;
use thiserror::Error;

/// The main error type for ladder-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// A required argument was absent or empty
  #[error("Missing required argument: {0}")]
  MissingArgument(String),

  /// An argument was present but not acceptable
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// Base and path could not be combined into a URL
  #[error("Invalid URL: {0}")]
  InvalidUrl(#[from] url::ParseError),

  /// The server answered with a status outside 2xx
  #[error("HTTP {status} {status_text} for {url}")]
  Http {
    /// Numeric status code
    status: u16,
    /// Reason phrase reported with the status
    status_text: String,
    /// Fully resolved request URL
    url: String,
    /// Whatever body could be decoded from the response
    body: Payload,
  },

  /// The transport failed before a response was received
  #[error("Transport error: {0}")]
  Transport(String),

  /// No transport was supplied and none could be created
  #[error("No HTTP transport available: {0}")]
  NoTransport(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),
}

impl Error {
  /// Status code of an [`Error::Http`], `None` for every other kind
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Http { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Decoded response body of an [`Error::Http`]
  pub fn body(&self) -> Option<&Payload> {
    match self {
      Error::Http { body, .. } => Some(body),
      _ => None,
    }
  }

  /// True when the error was raised before any request was sent
  pub fn is_caller_error(&self) -> bool {
    matches!(
      self,
      Error::MissingArgument(_) | Error::InvalidArgument(_) | Error::InvalidUrl(_)
    )
  }

  pub(crate) fn missing(name: &str) -> Self {
    Error::MissingArgument(format!("{name} is required"))
  }
}

/// Result type alias for ladder-* crates
pub type Result<T> = std::result::Result<T, Error>;

/// Fail with [`Error::MissingArgument`] when `value` is empty or whitespace.
pub fn require(name: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::missing(name));
  }
  Ok(())
}
