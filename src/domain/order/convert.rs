//! Conversions: ResponseMap → Order / Fill.

use super::{Fill, Order};
use crate::response::{FromResponse, ResponseMap};
use crate::shared::keys;

impl FromResponse for Order {
    fn from_response(map: &ResponseMap) -> Self {
        Order {
            ok: map.bool(keys::OK),
            symbol: map.string(keys::SYMBOL),
            venue: map.string(keys::VENUE),
            direction: map.string(keys::DIRECTION),
            original_qty: map.i64(keys::ORIGINAL_QTY),
            qty: map.i64(keys::QTY),
            price: map.f64(keys::PRICE),
            order_type: map
                .string(keys::ORDER_TYPE)
                .or_else(|| map.string(keys::TYPE)),
            id: map.i64(keys::ID),
            account: map.string(keys::ACCOUNT),
            ts: map.string(keys::TIMESTAMP),
            fills: map.list(keys::FILLS),
            total_filled: map.i64(keys::TOTAL_FILLED),
            open: map.bool(keys::OPEN),
        }
    }
}

impl FromResponse for Fill {
    fn from_response(map: &ResponseMap) -> Self {
        Fill {
            price: map.f64(keys::PRICE),
            qty: map.i64(keys::QTY),
            ts: map.string(keys::TIMESTAMP),
        }
    }
}
