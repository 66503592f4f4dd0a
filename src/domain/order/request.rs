//! Order descriptors.

use super::wire::PlaceOrderBody;
use super::Order;
use crate::config::Config;
use crate::error::SdkError;
use crate::request::{segment, Descriptor, Method, Request};
use crate::shared::{Direction, OrderType};
use rust_decimal::prelude::*;

// ─── PlaceOrder ──────────────────────────────────────────────────────────────

/// Places a new order. `price` is in dollars and goes out in cents.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrder {
    pub account: String,
    pub venue: String,
    pub symbol: String,
    pub price: Decimal,
    pub qty: u64,
    pub direction: Direction,
    pub order_type: OrderType,
}

impl PlaceOrder {
    /// A limit order for the configured account, venue and stock.
    pub fn new(config: &Config, price: Decimal, qty: u64, direction: Direction) -> Self {
        Self {
            account: config.account().to_string(),
            venue: config.venue().to_string(),
            symbol: config.symbol().to_string(),
            price,
            qty,
            direction,
            order_type: OrderType::Limit,
        }
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Price in cents, rounded half away from zero.
    pub fn price_cents(&self) -> Result<u64, SdkError> {
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(SdkError::Validation(format!(
                "price must not be negative: {}",
                self.price
            )));
        }
        self.price
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|c| c.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|c| c.to_u64())
            .ok_or_else(|| SdkError::Validation(format!("price out of range: {}", self.price)))
    }
}

impl Descriptor for PlaceOrder {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!(
            "venues/{}/stocks/{}/orders",
            segment(&self.venue),
            segment(&self.symbol)
        )
    }

    fn body(&self) -> Result<Option<String>, SdkError> {
        if self.qty == 0 {
            return Err(SdkError::Validation("qty must be positive".to_string()));
        }
        let body = PlaceOrderBody {
            account: &self.account,
            venue: &self.venue,
            symbol: &self.symbol,
            price: self.price_cents()?,
            qty: self.qty,
            direction: self.direction,
            order_type: self.order_type,
        };
        Ok(Some(serde_json::to_string(&body)?))
    }
}

impl Request for PlaceOrder {
    type Response = Order;
}

// ─── QueryOrder / CancelOrder ────────────────────────────────────────────────

fn order_path(venue: &str, symbol: &str, id: i64) -> String {
    format!(
        "venues/{}/stocks/{}/orders/{}",
        segment(venue),
        segment(symbol),
        id
    )
}

/// Fetches the current state of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOrder {
    pub venue: String,
    pub symbol: String,
    pub id: i64,
}

impl QueryOrder {
    pub fn new(venue: impl Into<String>, symbol: impl Into<String>, id: i64) -> Self {
        Self {
            venue: venue.into(),
            symbol: symbol.into(),
            id,
        }
    }

    pub fn from_config(config: &Config, id: i64) -> Self {
        Self::new(config.venue(), config.symbol(), id)
    }
}

impl Descriptor for QueryOrder {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        order_path(&self.venue, &self.symbol, self.id)
    }
}

impl Request for QueryOrder {
    type Response = Order;
}

/// Cancels an order. Sent as DELETE with no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrder {
    pub venue: String,
    pub symbol: String,
    pub id: i64,
}

impl CancelOrder {
    pub fn new(venue: impl Into<String>, symbol: impl Into<String>, id: i64) -> Self {
        Self {
            venue: venue.into(),
            symbol: symbol.into(),
            id,
        }
    }

    pub fn from_config(config: &Config, id: i64) -> Self {
        Self::new(config.venue(), config.symbol(), id)
    }
}

impl Descriptor for CancelOrder {
    fn method(&self) -> Method {
        Method::Delete
    }

    fn path(&self) -> String {
        order_path(&self.venue, &self.symbol, self.id)
    }
}

impl Request for CancelOrder {
    type Response = Order;
}
