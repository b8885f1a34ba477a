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

use crate::error::Error;
use crate::types::Query;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Which configured host a request is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiBase {
  /// The main API host
  #[default]
  Primary,
  /// The public web host serving workout definitions
  Secondary,
}

impl fmt::Display for ApiBase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiBase::Primary => write!(f, "primary"),
      ApiBase::Secondary => write!(f, "secondary"),
    }
  }
}

impl FromStr for ApiBase {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "primary" => Ok(ApiBase::Primary),
      "secondary" => Ok(ApiBase::Secondary),
      other => Err(Error::InvalidArgument(format!("unknown API base: {other}"))),
    }
  }
}

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
  #[default]
  Get,
  Post,
  Put,
  Patch,
  Delete,
}

impl HttpMethod {
  /// Upper-case method name as sent on the wire
  pub fn as_str(&self) -> &'static str {
    match self {
      HttpMethod::Get => "GET",
      HttpMethod::Post => "POST",
      HttpMethod::Put => "PUT",
      HttpMethod::Patch => "PATCH",
      HttpMethod::Delete => "DELETE",
    }
  }

  /// GET requests never carry a body
  pub fn allows_body(&self) -> bool {
    !matches!(self, HttpMethod::Get)
  }
}

impl fmt::Display for HttpMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Everything needed to issue one request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestDescriptor {
  pub base: ApiBase,
  pub path: String,
  pub query: Option<Query>,
  pub method: HttpMethod,
  pub body: Option<Value>,
}

impl RequestDescriptor {
  /// A GET request against `base`
  pub fn get(base: ApiBase, path: impl Into<String>) -> Self {
    Self { base, path: path.into(), ..Self::default() }
  }

  /// A POST request against `base`
  pub fn post(base: ApiBase, path: impl Into<String>) -> Self {
    Self { base, path: path.into(), method: HttpMethod::Post, ..Self::default() }
  }

  pub fn with_method(mut self, method: HttpMethod) -> Self {
    self.method = method;
    self
  }

  pub fn with_query(mut self, query: Query) -> Self {
    self.query = Some(query);
    self
  }

  pub fn with_body(mut self, body: Value) -> Self {
    self.body = Some(body);
    self
  }
}
