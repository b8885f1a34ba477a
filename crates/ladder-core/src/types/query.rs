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

//! Query parameter values and multi-identifier arguments

/// A single query parameter value before stringification.
///
/// [`QueryValue::Absent`] entries are dropped when the URL is built; they never
/// appear as empty parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
  Absent,
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(String),
}

impl QueryValue {
  /// String form used on the wire, `None` for absent values
  pub fn to_query_string(&self) -> Option<String> {
    match self {
      QueryValue::Absent => None,
      QueryValue::Bool(b) => Some(b.to_string()),
      QueryValue::Int(i) => Some(i.to_string()),
      QueryValue::Float(f) if f.is_infinite() => {
        Some(if *f > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
      }
      // f64's Display already prints 2.0 as "2"
      QueryValue::Float(f) => Some(f.to_string()),
      QueryValue::Str(s) => Some(s.clone()),
    }
  }
}

impl From<&str> for QueryValue {
  fn from(value: &str) -> Self {
    QueryValue::Str(value.to_string())
  }
}

impl From<String> for QueryValue {
  fn from(value: String) -> Self {
    QueryValue::Str(value)
  }
}

impl From<&String> for QueryValue {
  fn from(value: &String) -> Self {
    QueryValue::Str(value.clone())
  }
}

impl From<bool> for QueryValue {
  fn from(value: bool) -> Self {
    QueryValue::Bool(value)
  }
}

impl From<i32> for QueryValue {
  fn from(value: i32) -> Self {
    QueryValue::Int(value.into())
  }
}

impl From<i64> for QueryValue {
  fn from(value: i64) -> Self {
    QueryValue::Int(value)
  }
}

impl From<u32> for QueryValue {
  fn from(value: u32) -> Self {
    QueryValue::Int(value.into())
  }
}

impl From<f64> for QueryValue {
  fn from(value: f64) -> Self {
    QueryValue::Float(value)
  }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
  fn from(value: Option<T>) -> Self {
    value.map_or(QueryValue::Absent, Into::into)
  }
}

/// Query parameters attached to a request.
///
/// Either a pre-built ordered list of string pairs, or a key to value mapping
/// whose values are stringified and whose absent values are skipped. In both
/// forms a key that appears more than once keeps only its last value.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
  Pairs(Vec<(String, String)>),
  Params(Vec<(String, QueryValue)>),
}

impl Query {
  /// Start an empty key/value mapping
  pub fn params() -> Self {
    Query::Params(Vec::new())
  }

  /// Build from already-stringified pairs, preserving their order
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Query::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }

  /// Add an entry. In the pair form an absent value removes the key right away.
  pub fn set(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
    let key = key.into();
    let value = value.into();
    match &mut self {
      Query::Params(entries) => entries.push((key, value)),
      Query::Pairs(pairs) => match value.to_query_string() {
        Some(value) => pairs.push((key, value)),
        None => pairs.retain(|(k, _)| *k != key),
      },
    }
    self
  }

  /// Stringified entries in first-insertion order.
  ///
  /// Each mapping key resolves to its last value first; keys whose last value
  /// is absent are then removed.
  pub fn entries(&self) -> Vec<(String, String)> {
    match self {
      Query::Pairs(pairs) => pairs.clone(),
      Query::Params(entries) => {
        let mut resolved: Vec<(&str, Option<String>)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
          let value = value.to_query_string();
          match resolved.iter_mut().find(|(k, _)| *k == key.as_str()) {
            Some(slot) => slot.1 = value,
            None => resolved.push((key.as_str(), value)),
          }
        }
        resolved.into_iter().filter_map(|(k, v)| v.map(|v| (k.to_string(), v))).collect()
      }
    }
  }

  /// True when no entry would reach the URL
  pub fn is_empty(&self) -> bool {
    self.entries().is_empty()
  }
}

/// One identifier or several, sent as a single comma-joined parameter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdList(Vec<String>);

impl IdList {
  /// True when there is no usable identifier
  pub fn is_blank(&self) -> bool {
    self.0.iter().all(|id| id.trim().is_empty())
  }

  /// Identifiers joined with `,`
  pub fn joined(&self) -> String {
    self.0.join(",")
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl From<&str> for IdList {
  fn from(id: &str) -> Self {
    IdList(vec![id.to_string()])
  }
}

impl From<String> for IdList {
  fn from(id: String) -> Self {
    IdList(vec![id])
  }
}

impl From<Vec<String>> for IdList {
  fn from(ids: Vec<String>) -> Self {
    IdList(ids)
  }
}

impl From<Vec<&str>> for IdList {
  fn from(ids: Vec<&str>) -> Self {
    ids.as_slice().into()
  }
}

impl From<&[&str]> for IdList {
  fn from(ids: &[&str]) -> Self {
    IdList(ids.iter().map(|id| id.to_string()).collect())
  }
}

impl From<&[String]> for IdList {
  fn from(ids: &[String]) -> Self {
    IdList(ids.to_vec())
  }
}

impl<const N: usize> From<[&str; N]> for IdList {
  fn from(ids: [&str; N]) -> Self {
    ids.as_slice().into()
  }
}
