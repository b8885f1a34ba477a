//! Common types used across ladder-* crates

pub mod payload;
pub mod query;
pub mod request;

pub use payload::Payload;
pub use query::{IdList, Query, QueryValue};
pub use request::{ApiBase, HttpMethod, RequestDescriptor};
