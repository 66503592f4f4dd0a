//! Conversions: ResponseMap → StockList / Stock.

use super::{Stock, StockList};
use crate::response::{FromResponse, ResponseMap};
use crate::shared::keys;

impl FromResponse for StockList {
    fn from_response(map: &ResponseMap) -> Self {
        StockList {
            ok: map.bool(keys::OK),
            stocks: map.list(keys::SYMBOLS),
        }
    }
}

impl FromResponse for Stock {
    fn from_response(map: &ResponseMap) -> Self {
        Stock {
            name: map.string(keys::NAME),
            symbol: map.string(keys::SYMBOL),
        }
    }
}
