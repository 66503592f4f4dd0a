//! Stocks sub-client.

use super::{StockList, StocksOnVenue};
use crate::client::StockfighterClient;
use crate::error::SdkError;

/// Sub-client for stock listings.
pub struct Stocks<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Stocks<'a> {
    /// Stocks on the configured venue.
    pub async fn list(&self) -> Result<StockList, SdkError> {
        self.client
            .call(&StocksOnVenue::from_config(self.client.config()))
            .await
    }

    pub async fn list_on(&self, venue: &str) -> Result<StockList, SdkError> {
        self.client.call(&StocksOnVenue::new(venue)).await
    }
}
