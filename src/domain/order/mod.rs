//! Order domain: placing orders and tracking their state.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod request;
pub mod wire;

pub use request::{CancelOrder, PlaceOrder, QueryOrder};

use crate::shared::{parse_timestamp, Direction, OrderType};
use chrono::{DateTime, Utc};

/// Order state as reported by the venue.
///
/// Placing, querying and cancelling an order all answer with this shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    pub ok: Option<bool>,
    pub symbol: Option<String>,
    pub venue: Option<String>,
    pub direction: Option<String>,
    pub original_qty: Option<i64>,
    /// Quantity still outstanding.
    pub qty: Option<i64>,
    pub price: Option<f64>,
    pub order_type: Option<String>,
    pub id: Option<i64>,
    pub account: Option<String>,
    pub ts: Option<String>,
    pub fills: Option<Vec<Fill>>,
    pub total_filled: Option<i64>,
    pub open: Option<bool>,
}

impl Order {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.ts.as_deref())
    }

    /// False unless the venue said the order is still open.
    pub fn is_open(&self) -> bool {
        self.open == Some(true)
    }

    pub fn remaining_qty(&self) -> Option<i64> {
        self.qty
    }

    /// `direction` parsed into a [`Direction`].
    pub fn side(&self) -> Option<Direction> {
        self.direction.as_deref()?.parse().ok()
    }

    /// `order_type` parsed into an [`OrderType`].
    pub fn kind(&self) -> Option<OrderType> {
        self.order_type.as_deref()?.parse().ok()
    }
}

/// One execution against an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fill {
    pub price: Option<f64>,
    pub qty: Option<i64>,
    pub ts: Option<String>,
}

impl Fill {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.ts.as_deref())
    }
}
