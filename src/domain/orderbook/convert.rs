//! Conversions: ResponseMap → OrderBook / BookLevel.

use super::{BookLevel, OrderBook};
use crate::response::{FromResponse, ResponseMap};
use crate::shared::keys;

impl FromResponse for OrderBook {
    fn from_response(map: &ResponseMap) -> Self {
        OrderBook {
            ok: map.bool(keys::OK),
            symbol: map.string(keys::SYMBOL),
            venue: map.string(keys::VENUE),
            bids: map.list(keys::BIDS),
            asks: map.list(keys::ASKS),
            ts: map.string(keys::TIMESTAMP),
        }
    }
}

impl FromResponse for BookLevel {
    fn from_response(map: &ResponseMap) -> Self {
        BookLevel {
            price: map.f64(keys::PRICE),
            qty: map.i64(keys::QTY),
            is_buy: map.bool(keys::IS_BUY),
        }
    }
}
