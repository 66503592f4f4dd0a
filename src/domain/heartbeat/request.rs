//! Heartbeat request descriptors.

use super::{ApiStatus, VenueStatus};
use crate::config::Config;
use crate::request::{segment, Descriptor, Method, Request};

/// Checks that the API itself is up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiHeartbeat;

impl Descriptor for ApiHeartbeat {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        "heartbeat".to_string()
    }
}

impl Request for ApiHeartbeat {
    type Response = ApiStatus;
}

/// Checks that a venue is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueHeartbeat {
    pub venue: String,
}

impl VenueHeartbeat {
    pub fn new(venue: impl Into<String>) -> Self {
        Self {
            venue: venue.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.venue())
    }
}

impl Descriptor for VenueHeartbeat {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("venues/{}/heartbeat", segment(&self.venue))
    }
}

impl Request for VenueHeartbeat {
    type Response = VenueStatus;
}
