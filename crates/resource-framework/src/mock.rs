//! # Test Doubles
//!
//! Stand-ins for the external collaborators, so tests get stable ids and can observe URI
//! resolution.
//!
//! ```rust
//! use std::sync::Arc;
//! use resource_framework::mock::SequentialIdentifiers;
//! use resource_framework::{BasicResourceBuilder, BuildResource, Resource};
//!
//! let ids = Arc::new(SequentialIdentifiers::new("r"));
//! let first = BasicResourceBuilder::with_identifiers(ids.clone()).build().unwrap();
//! let second = BasicResourceBuilder::with_identifiers(ids).build().unwrap();
//! assert_eq!(first.id(), "r0001");
//! assert_eq!(second.id(), "r0002");
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::FrameworkError;
use crate::identifier::IdentifierSource;
use crate::uri::UriResolver;

/// Hands out `{prefix}0001`, `{prefix}0002`, ... ignoring the requested length.
#[derive(Debug)]
pub struct SequentialIdentifiers {
    prefix: String,
    next: AtomicUsize,
}

impl SequentialIdentifiers {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicUsize::new(1),
        }
    }
}

impl IdentifierSource for SequentialIdentifiers {
    fn new_id(&self, _length: usize) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}{:04}", self.prefix, n)
    }
}

/// Wraps another resolver and records every resolution request.
pub struct CountingResolver<U> {
    inner: U,
    calls: Mutex<Vec<String>>,
}

impl<U: UriResolver> CountingResolver<U> {
    pub fn new(inner: U) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, as `type:id` or `endpoint:name`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
    }
}

impl<U: UriResolver> UriResolver for CountingResolver<U> {
    fn resolve(&self, resource_type: &str, id: &str) -> Result<String, FrameworkError> {
        self.record(format!("{resource_type}:{id}"));
        self.inner.resolve(resource_type, id)
    }

    fn resolve_endpoint(&self, endpoint: &str) -> Result<String, FrameworkError> {
        self.record(format!("endpoint:{endpoint}"));
        self.inner.resolve_endpoint(endpoint)
    }
}
