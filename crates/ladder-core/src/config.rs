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

//! Configuration management for the Ladder client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::fmt;
use std::time::Duration;

/// Main configuration struct for the Ladder client
///
/// Serializing a config never writes the token out.
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Bearer token sent with every request
  #[serde(skip_serializing)]
  pub token: String,

  /// Base URL for the primary API host
  #[serde(default = "default_primary_url")]
  pub primary_url: String,

  /// Base URL for the secondary API host
  #[serde(default = "default_secondary_url")]
  pub secondary_url: String,

  /// Request timeout in milliseconds for the built-in transport
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,

  /// User agent for the built-in transport
  #[serde(default = "default_user_agent")]
  pub user_agent: String,
}

fn default_primary_url() -> String {
  crate::PRIMARY_BASE_URL.to_string()
}

fn default_secondary_url() -> String {
  crate::SECONDARY_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
  crate::DEFAULT_TIMEOUT_MS
}

fn default_user_agent() -> String {
  crate::DEFAULT_USER_AGENT.to_string()
}

/// Read an environment variable, `None` when it is not set
fn optional_var(name: &str) -> Result<Option<String>> {
  match env::var(name) {
    Ok(value) => Ok(Some(value)),
    Err(VarError::NotPresent) => Ok(None),
    Err(e) => Err(e.into()),
  }
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// Reads a `.env` file first when one is present. `LADDER_TOKEN` is required;
  /// `LADDER_PRIMARY_URL`, `LADDER_SECONDARY_URL` and `LADDER_TIMEOUT_SECS` are optional.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let token = optional_var("LADDER_TOKEN")?
      .ok_or_else(|| Error::MissingArgument("LADDER_TOKEN not set".to_string()))?;

    let timeout_ms = match optional_var("LADDER_TIMEOUT_SECS")? {
      Some(raw) => raw
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|secs| secs.checked_mul(1000))
        .ok_or_else(|| Error::Config(format!("Invalid LADDER_TIMEOUT_SECS: {raw}")))?,
      None => default_timeout_ms(),
    };

    let primary_url = optional_var("LADDER_PRIMARY_URL")?.unwrap_or_else(default_primary_url);
    let secondary_url =
      optional_var("LADDER_SECONDARY_URL")?.unwrap_or_else(default_secondary_url);

    Config { token, primary_url, secondary_url, timeout_ms, user_agent: default_user_agent() }
      .validated()
  }

  /// Create a config with default hosts for the given token
  pub fn default_with_token(token: impl Into<String>) -> Self {
    Config {
      token: token.into(),
      primary_url: default_primary_url(),
      secondary_url: default_secondary_url(),
      timeout_ms: default_timeout_ms(),
      user_agent: default_user_agent(),
    }
  }

  /// Request timeout for the built-in transport
  pub fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }

  /// Check the token and timeout, and strip trailing slashes from both hosts.
  pub fn validated(mut self) -> Result<Self> {
    if self.token.trim().is_empty() {
      return Err(Error::MissingArgument("token is required".to_string()));
    }
    if self.timeout_ms == 0 {
      return Err(Error::Config("timeout must be at least 1ms".to_string()));
    }
    self.primary_url = normalize_base_url(&self.primary_url);
    self.secondary_url = normalize_base_url(&self.secondary_url);
    Ok(self)
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("token", &"<redacted>")
      .field("primary_url", &self.primary_url)
      .field("secondary_url", &self.secondary_url)
      .field("timeout_ms", &self.timeout_ms)
      .field("user_agent", &self.user_agent)
      .finish()
  }
}

/// Remove any trailing `/` from a base URL.
pub fn normalize_base_url(url: &str) -> String {
  url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Mutex;

  // Tests touching process environment must not interleave
  static ENV_LOCK: Mutex<()> = Mutex::new(());

  const VARS: [&str; 4] =
    ["LADDER_TOKEN", "LADDER_PRIMARY_URL", "LADDER_SECONDARY_URL", "LADDER_TIMEOUT_SECS"];

  fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for name in VARS {
      env::remove_var(name);
    }
    for (name, value) in vars {
      env::set_var(name, value);
    }
    let result = f();
    for name in VARS {
      env::remove_var(name);
    }
    result
  }

  #[test]
  fn test_default_with_token() {
    let config = Config::default_with_token("jwt");
    assert_eq!(config.token, "jwt");
    assert_eq!(config.primary_url, "https://rocky-api.prod.ltdev.io");
    assert_eq!(config.secondary_url, "https://www.joinladder.com");
    assert_eq!(config.timeout(), Duration::from_secs(30));
  }

  #[test]
  fn test_validated_normalizes_hosts() {
    let mut config = Config::default_with_token("jwt");
    config.primary_url = "http://localhost:8080//".to_string();
    config.secondary_url = "http://localhost:9090/".to_string();

    let config = config.validated().unwrap();
    assert_eq!(config.primary_url, "http://localhost:8080");
    assert_eq!(config.secondary_url, "http://localhost:9090");
  }

  #[test]
  fn test_validated_rejects_empty_token() {
    let result = Config::default_with_token("").validated();
    assert!(matches!(result, Err(Error::MissingArgument(_))));
  }

  #[test]
  fn test_validated_timeout() {
    let mut config = Config::default_with_token("jwt");
    config.timeout_ms = 0;
    assert!(matches!(config.clone().validated(), Err(Error::Config(_))));

    config.timeout_ms = 900;
    assert_eq!(config.validated().unwrap().timeout(), Duration::from_millis(900));
  }

  #[test]
  fn test_debug_redacts_token() {
    let rendered = format!("{:?}", Config::default_with_token("super-secret"));
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
  }

  #[test]
  fn test_deserialize_fills_defaults() {
    let config: Config = serde_json::from_str(r#"{"token": "jwt"}"#).unwrap();
    assert_eq!(config.primary_url, crate::PRIMARY_BASE_URL);
    assert_eq!(config.user_agent, crate::DEFAULT_USER_AGENT);
    assert_eq!(config.timeout_ms, crate::DEFAULT_TIMEOUT_MS);
  }

  #[test]
  fn test_serialize_skips_token() {
    let value = serde_json::to_value(Config::default_with_token("super-secret")).unwrap();
    assert!(value.get("token").is_none());
    assert_eq!(value["primary_url"], crate::PRIMARY_BASE_URL);
    assert!(!value.to_string().contains("super-secret"));
  }

  #[test]
  fn test_from_env() {
    let config = with_env(
      &[
        ("LADDER_TOKEN", "env-jwt"),
        ("LADDER_PRIMARY_URL", "http://localhost:3000/"),
        ("LADDER_SECONDARY_URL", "http://localhost:4000//"),
        ("LADDER_TIMEOUT_SECS", "5"),
      ],
      Config::from_env,
    )
    .unwrap();

    assert_eq!(config.token, "env-jwt");
    assert_eq!(config.primary_url, "http://localhost:3000");
    assert_eq!(config.secondary_url, "http://localhost:4000");
    assert_eq!(config.timeout(), Duration::from_secs(5));
  }

  #[test]
  fn test_from_env_defaults() {
    let config = with_env(&[("LADDER_TOKEN", "env-jwt")], Config::from_env).unwrap();
    assert_eq!(config.primary_url, crate::PRIMARY_BASE_URL);
    assert_eq!(config.secondary_url, crate::SECONDARY_BASE_URL);
    assert_eq!(config.timeout_ms, crate::DEFAULT_TIMEOUT_MS);
  }

  #[test]
  fn test_from_env_missing_token() {
    let result = with_env(&[], Config::from_env);
    assert!(matches!(result, Err(Error::MissingArgument(_))));

    let result = with_env(&[("LADDER_TOKEN", "  ")], Config::from_env);
    assert!(matches!(result, Err(Error::MissingArgument(_))));
  }

  #[test]
  fn test_from_env_bad_timeout() {
    for raw in ["soon", "-1", "1.5", "0"] {
      let result =
        with_env(&[("LADDER_TOKEN", "jwt"), ("LADDER_TIMEOUT_SECS", raw)], Config::from_env);
      assert!(matches!(result, Err(Error::Config(_))), "{raw}: {result:?}");
    }
  }

  #[cfg(unix)]
  #[test]
  fn test_from_env_non_unicode() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let result = with_env(&[], || {
      env::set_var("LADDER_TOKEN", OsStr::from_bytes(&[0x66, 0xff, 0x6f]));
      Config::from_env()
    });
    assert!(matches!(result, Err(Error::EnvVar(VarError::NotUnicode(_)))));
  }
}
