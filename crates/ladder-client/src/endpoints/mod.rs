//! Endpoint groups
//!
//! Each group validates its arguments, then hands one [`RequestDescriptor`]
//! to the shared [`RequestExecutor`]. Validation failures are returned before
//! the transport is touched.
//!
//! [`RequestDescriptor`]: ladder_core::RequestDescriptor

pub mod journal;
pub mod teams;
pub mod users;
pub mod workouts;

use crate::executor::RequestExecutor;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the shared request executor
  fn executor(&self) -> &Arc<RequestExecutor>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn executor(&self) -> &Arc<RequestExecutor> {
        &self.executor
      }
    }

    impl $struct_name {
      /// Create a new endpoint group over a shared executor
      pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
      }
    }
  };
}

pub(crate) use impl_endpoint_base;
