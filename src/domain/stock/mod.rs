//! Stock domain: listings on a venue.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod request;

pub use request::StocksOnVenue;

/// Response to [`StocksOnVenue`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockList {
    pub ok: Option<bool>,
    /// `None` when the response carried no `symbols` array.
    pub stocks: Option<Vec<Stock>>,
}

impl StockList {
    pub fn symbols(&self) -> Vec<&str> {
        self.stocks
            .iter()
            .flatten()
            .filter_map(|s| s.symbol.as_deref())
            .collect()
    }
}

/// A stock traded on a venue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stock {
    pub name: Option<String>,
    pub symbol: Option<String>,
}
