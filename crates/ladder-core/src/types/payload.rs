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

//! Decoded response bodies

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A decoded response body.
///
/// JSON responses become [`Payload::Json`]; a JSON body that fails to decode is
/// represented as `Payload::Json(Value::Null)`. Every other content type is kept
/// verbatim as [`Payload::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
  /// Body declared as JSON
  Json(Value),
  /// Body of any other content type
  Text(String),
}

impl Payload {
  /// The JSON value, if this is a JSON payload
  pub fn as_json(&self) -> Option<&Value> {
    match self {
      Payload::Json(value) => Some(value),
      Payload::Text(_) => None,
    }
  }

  /// The raw text, if this is a text payload
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Payload::Text(text) => Some(text),
      Payload::Json(_) => None,
    }
  }

  /// True for a JSON null, which is also what an undecodable JSON body yields
  pub fn is_null(&self) -> bool {
    matches!(self, Payload::Json(Value::Null))
  }

  /// Convert into a JSON value; text becomes a JSON string
  pub fn into_json(self) -> Value {
    match self {
      Payload::Json(value) => value,
      Payload::Text(text) => Value::String(text),
    }
  }

  /// Deserialize the payload into a caller-defined type
  pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
    match self {
      Payload::Json(value) => Ok(serde_json::from_value(value)?),
      Payload::Text(text) => Ok(serde_json::from_str(&text)?),
    }
  }
}

impl Default for Payload {
  fn default() -> Self {
    Payload::Json(Value::Null)
  }
}

impl From<Value> for Payload {
  fn from(value: Value) -> Self {
    Payload::Json(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use serde_json::json;

  #[derive(Debug, Deserialize, PartialEq)]
  struct Team {
    id: String,
    name: String,
  }

  #[test]
  fn test_accessors() {
    let json = Payload::Json(json!({"ok": true}));
    assert_eq!(json.as_json().unwrap()["ok"], true);
    assert!(json.as_text().is_none());

    let text = Payload::Text("pong".to_string());
    assert_eq!(text.as_text(), Some("pong"));
    assert!(text.as_json().is_none());
    assert_eq!(text.into_json(), json!("pong"));
  }

  #[test]
  fn test_default_is_null() {
    assert!(Payload::default().is_null());
  }

  #[test]
  fn test_deserialize_typed_view() {
    let payload = Payload::Json(json!({"id": "t1", "name": "Morning Crew", "extra": 1}));
    let team: Team = payload.deserialize().unwrap();
    assert_eq!(team, Team { id: "t1".to_string(), name: "Morning Crew".to_string() });

    assert!(Payload::Json(json!([1, 2])).deserialize::<Team>().is_err());
  }
}
