//! Orderbook domain: bid and ask levels for one stock.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod request;

pub use request::FetchOrderBook;

use chrono::{DateTime, Utc};

/// Response to [`FetchOrderBook`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBook {
    pub ok: Option<bool>,
    pub symbol: Option<String>,
    pub venue: Option<String>,
    pub bids: Option<Vec<BookLevel>>,
    pub asks: Option<Vec<BookLevel>>,
    pub ts: Option<String>,
}

impl OrderBook {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        crate::shared::parse_timestamp(self.ts.as_deref())
    }

    /// Highest priced bid.
    pub fn best_bid(&self) -> Option<f64> {
        prices(&self.bids).reduce(f64::max)
    }

    /// Lowest priced ask.
    pub fn best_ask(&self) -> Option<f64> {
        prices(&self.asks).reduce(f64::min)
    }

    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

fn prices(levels: &Option<Vec<BookLevel>>) -> impl Iterator<Item = f64> + '_ {
    levels.iter().flatten().filter_map(|l| l.price)
}

/// One resting price level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookLevel {
    pub price: Option<f64>,
    pub qty: Option<i64>,
    pub is_buy: Option<bool>,
}
