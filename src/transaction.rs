//! A fully resolved, ready-to-send call: verb, URL and optional descriptor.

use crate::request::{Descriptor, Method};

/// One HTTP call, built per request and consumed once by the executor.
pub struct Transaction<'a> {
    method: Method,
    base_url: String,
    path: String,
    descriptor: Option<&'a dyn Descriptor>,
}

impl<'a> Transaction<'a> {
    pub fn new(
        method: Method,
        base_url: impl Into<String>,
        path: impl Into<String>,
        descriptor: Option<&'a dyn Descriptor>,
    ) -> Self {
        Self {
            method,
            base_url: base_url.into(),
            path: path.into(),
            descriptor,
        }
    }

    /// Build the transaction for `descriptor` against `base_url`.
    pub fn for_descriptor(base_url: &str, descriptor: &'a dyn Descriptor) -> Self {
        Self::new(
            descriptor.method(),
            base_url,
            descriptor.path(),
            Some(descriptor),
        )
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn descriptor(&self) -> Option<&'a dyn Descriptor> {
        self.descriptor
    }

    pub fn full_url(&self) -> String {
        join_url(&self.base_url, &self.path)
    }
}

impl std::fmt::Debug for Transaction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transaction")
            .field("method", &self.method)
            .field("url", &self.full_url())
            .field("has_descriptor", &self.descriptor.is_some())
            .finish()
    }
}

/// Join `base` and `path` with exactly one `/` between them.
///
/// Total over all inputs: an empty path yields the base without a trailing
/// slash, and a base of only slashes collapses to an empty prefix.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let joined = format!("{base}/{path}");
    joined.trim_end_matches('/').to_string()
}
