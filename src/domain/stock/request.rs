//! Stock listing descriptor.

use super::StockList;
use crate::config::Config;
use crate::request::{segment, Descriptor, Method, Request};

/// Lists the stocks traded on a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StocksOnVenue {
    pub venue: String,
}

impl StocksOnVenue {
    pub fn new(venue: impl Into<String>) -> Self {
        Self {
            venue: venue.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.venue())
    }
}

impl Descriptor for StocksOnVenue {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("venues/{}/stocks", segment(&self.venue))
    }
}

impl Request for StocksOnVenue {
    type Response = StockList;
}
