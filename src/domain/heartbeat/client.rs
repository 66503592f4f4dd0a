//! Heartbeat sub-client.

use super::{ApiHeartbeat, ApiStatus, VenueHeartbeat, VenueStatus};
use crate::client::StockfighterClient;
use crate::error::SdkError;

/// Sub-client for API and venue heartbeats.
pub struct Heartbeat<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Heartbeat<'a> {
    pub async fn api(&self) -> Result<ApiStatus, SdkError> {
        self.client.call(&ApiHeartbeat).await
    }

    /// Heartbeat of the configured venue.
    pub async fn venue(&self) -> Result<VenueStatus, SdkError> {
        self.client
            .call(&VenueHeartbeat::from_config(self.client.config()))
            .await
    }

    pub async fn venue_named(&self, venue: &str) -> Result<VenueStatus, SdkError> {
        self.client.call(&VenueHeartbeat::new(venue)).await
    }
}
