//! Request descriptors: what an API call targets and what it sends.
//!
//! [`Descriptor`] is the object-safe capability set every operation provides
//! (verb, path, optional body). [`Request`] adds the typed response record the
//! operation answers with.

use crate::error::SdkError;
use crate::response::FromResponse;
use std::borrow::Cow;

/// HTTP verb of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the request body is taken from the descriptor.
    pub fn carries_body(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "http")]
impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Target and payload of one API call.
pub trait Descriptor: Send + Sync {
    fn method(&self) -> Method;

    /// Path relative to the configured base URL.
    fn path(&self) -> String;

    /// Serialized JSON body. Only consulted for verbs that carry one.
    fn body(&self) -> Result<Option<String>, SdkError> {
        Ok(None)
    }
}

/// A descriptor paired with the record type its response parses into.
pub trait Request: Descriptor {
    type Response: FromResponse;
}

/// Percent-encode a single path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
