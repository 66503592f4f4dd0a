//! Orders sub-client.

use super::{CancelOrder, Order, PlaceOrder, QueryOrder};
use crate::client::StockfighterClient;
use crate::error::SdkError;
use crate::shared::{Direction, OrderType};
use rust_decimal::Decimal;

/// Sub-client for placing, querying and cancelling orders.
pub struct Orders<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Orders<'a> {
    /// Place an order for the configured account and stock.
    pub async fn place(
        &self,
        price: Decimal,
        qty: u64,
        direction: Direction,
        order_type: OrderType,
    ) -> Result<Order, SdkError> {
        let order = PlaceOrder::new(self.client.config(), price, qty, direction)
            .with_order_type(order_type);
        self.submit(&order).await
    }

    pub async fn submit(&self, order: &PlaceOrder) -> Result<Order, SdkError> {
        self.client.call(order).await
    }

    pub async fn status(&self, id: i64) -> Result<Order, SdkError> {
        self.client
            .call(&QueryOrder::from_config(self.client.config(), id))
            .await
    }

    pub async fn cancel(&self, id: i64) -> Result<Order, SdkError> {
        self.client
            .call(&CancelOrder::from_config(self.client.config(), id))
            .await
    }
}
