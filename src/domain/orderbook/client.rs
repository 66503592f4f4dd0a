//! Orderbooks sub-client.

use super::{FetchOrderBook, OrderBook};
use crate::client::StockfighterClient;
use crate::error::SdkError;

/// Sub-client for orderbook operations.
pub struct Orderbooks<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Orderbooks<'a> {
    /// Book of the configured stock on the configured venue.
    pub async fn get(&self) -> Result<OrderBook, SdkError> {
        self.client
            .call(&FetchOrderBook::from_config(self.client.config()))
            .await
    }

    pub async fn get_for(&self, venue: &str, symbol: &str) -> Result<OrderBook, SdkError> {
        self.client.call(&FetchOrderBook::new(venue, symbol)).await
    }
}
