//! Wire types for order requests.

use crate::shared::{Direction, OrderType};
use serde::Serialize;

/// JSON body of a place-order POST.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlaceOrderBody<'a> {
    pub account: &'a str,
    pub venue: &'a str,
    pub symbol: &'a str,
    /// In cents.
    pub price: u64,
    pub qty: u64,
    pub direction: Direction,
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
}
