//! Orderbook descriptor.

use super::OrderBook;
use crate::config::Config;
use crate::request::{segment, Descriptor, Method, Request};

/// Fetches the order book of one stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOrderBook {
    pub venue: String,
    pub symbol: String,
}

impl FetchOrderBook {
    pub fn new(venue: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            venue: venue.into(),
            symbol: symbol.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.venue(), config.symbol())
    }
}

impl Descriptor for FetchOrderBook {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!(
            "venues/{}/stocks/{}",
            segment(&self.venue),
            segment(&self.symbol)
        )
    }
}

impl Request for FetchOrderBook {
    type Response = OrderBook;
}
