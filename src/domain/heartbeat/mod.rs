//! Heartbeat domain: API and venue liveness checks.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod request;

pub use request::{ApiHeartbeat, VenueHeartbeat};

/// Response to [`ApiHeartbeat`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiStatus {
    pub ok: Option<bool>,
    pub error: Option<String>,
}

/// Response to [`VenueHeartbeat`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueStatus {
    pub ok: Option<bool>,
    pub venue: Option<String>,
}
