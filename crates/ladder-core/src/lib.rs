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

//! # ladder-core
//!
//! Shared building blocks for the Ladder API client crates: configuration loading,
//! the error type, and the request/response value types that flow between the
//! client, its URL builder and the pluggable transport.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{ApiBase, HttpMethod, IdList, Payload, Query, QueryValue, RequestDescriptor};

/// Default primary API host
pub const PRIMARY_BASE_URL: &str = "https://rocky-api.prod.ltdev.io";

/// Default secondary API host (public workout pages)
pub const SECONDARY_BASE_URL: &str = "https://www.joinladder.com";

/// Accept header sent on every request: JSON preferred, text as fallback
pub const ACCEPT_HEADER_VALUE: &str = "application/json, text/plain;q=0.9,*/*;q=0.8";

/// Content type used for serialized request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Request timeout for the built-in transport, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// User agent sent by the built-in transport
pub const DEFAULT_USER_AGENT: &str = concat!("ladder-client/", env!("CARGO_PKG_VERSION"));
