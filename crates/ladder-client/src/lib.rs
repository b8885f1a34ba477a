//! # ladder-client
//!
//! A thin client for the Ladder fitness API.
//!
//! ## Features
//!
//! - **Bearer auth**: every request carries `Authorization: Bearer <token>`
//! - **Two hosts**: the primary API host and the secondary web host, both overridable
//! - **Pluggable transport**: implement [`Transport`] to swap out reqwest
//! - **Lenient decoding**: JSON bodies become [`serde_json::Value`], anything else text
//! - **Classified errors**: non-2xx responses surface status, URL and decoded body
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ladder_client::LadderClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LadderClient::from_env()?;
//!
//!     let summary = client.journal().summary("user-id").await?;
//!     println!("{:?}", summary.as_json());
//!
//!     match client.workouts().get("workout-id").await {
//!         Ok(workout) => println!("{:?}", workout),
//!         Err(e) if e.status() == Some(404) => println!("no such workout"),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, ladder_core::Error>`. Missing arguments are
//! reported before any request is sent.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod executor;
pub mod transport;
pub mod url_builder;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export the main client and common types
pub use client::{LadderClient, LadderClientBuilder};
pub use executor::{decode_body, RequestExecutor};
pub use ladder_core::{
  ApiBase, Config, Error, HttpMethod, IdList, Payload, Query, QueryValue, RequestDescriptor,
  Result,
};
#[cfg(feature = "reqwest-transport")]
pub use transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Transport};
pub use url_builder::build_url;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  journal::JournalEndpoints, teams::TeamEndpoints, users::UserEndpoints,
  workouts::WorkoutEndpoints,
};
