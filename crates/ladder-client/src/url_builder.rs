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

//! URL construction: base host + path + query parameters

use ladder_core::{Query, Result};
use url::Url;

/// Resolve `path` against `base` and merge `query` into the resulting URL.
///
/// Relative paths are joined onto the base; an absolute URL in `path` replaces the
/// base entirely. Every supplied key replaces all existing occurrences of that key,
/// keeping the position of the first one. Parameters already encoded in `path`
/// are left untouched when no supplied key overwrites them.
pub fn build_url(base: &str, path: &str, query: Option<&Query>) -> Result<String> {
  let mut url = Url::parse(base)?.join(path)?;

  let entries = query.map(Query::entries).unwrap_or_default();
  if entries.is_empty() {
    return Ok(url.to_string());
  }

  let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
  for (key, value) in entries {
    set_pair(&mut pairs, key, value);
  }

  url
    .query_pairs_mut()
    .clear()
    .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

  Ok(url.to_string())
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: String, value: String) {
  match pairs.iter().position(|(k, _)| *k == key) {
    Some(first) => {
      pairs[first].1 = value;
      let mut index = 0;
      pairs.retain(|(k, _)| {
        let keep = index <= first || *k != key;
        index += 1;
        keep
      });
    }
    None => pairs.push((key, value)),
  }
}
