//! Cancellation, modification and the day-order expiry sweep.

use tracing::trace;

use super::book::OrderBook;
use crate::orders::order::Order;
use crate::orders::trade::Trades;
use crate::orders::{OrderId, OrderType, Price, Side, Size};

impl OrderBook {
    /// Cancels a resting order by id and returns it.
    ///
    /// Unknown ids are a silent no-op. Cancelling removes the order from its
    /// level (erasing the level if that emptied it) and from the by-id index
    /// in the same step, so the call is idempotent.
    pub fn cancel_order(&mut self, id: OrderId) -> Option<Order> {
        let (price, side) = *self.order_locations.get(&id)?;

        let removed = match side {
            Side::Buy => self.bids.cancel(price, id),
            Side::Sell => self.asks.cancel(price, id),
        };

        if removed.is_some() {
            self.order_locations.remove(&id);
            trace!(symbol = %self.symbol, id, price, %side, "order cancelled");
        }

        removed
    }

    /// Replaces a resting order: cancel followed by a fresh admission.
    ///
    /// The replacement joins the tail of its (possibly unchanged) price level;
    /// time priority is forfeited by design. An unknown id degrades to a plain
    /// admission.
    pub fn modify_order(
        &mut self,
        order_type: OrderType,
        id: OrderId,
        side: Side,
        price: Price,
        size: Size,
    ) -> Trades {
        trace!(
            symbol = %self.symbol,
            %order_type,
            id,
            %side,
            price,
            size,
            "modifying order"
        );
        self.cancel_order(id);
        self.add_order(order_type, id, side, price, size)
    }

    /// Ids of every resting GoodForDay order, both sides.
    pub fn good_for_day_ids(&self) -> Vec<OrderId> {
        let bids = self.bids.iter_levels().flat_map(|level| level.iter());
        let asks = self.asks.iter_levels().flat_map(|level| level.iter());
        bids.chain(asks)
            .filter(|order| order.order_type() == OrderType::GoodForDay)
            .map(Order::id)
            .collect()
    }

    /// Cancels every resting GoodForDay order and returns the cancelled ids.
    ///
    /// The book keeps no clock; a collaborator invokes this at the day
    /// boundary it enforces.
    pub fn expire_day_orders(&mut self) -> Vec<OrderId> {
        let expired = self.good_for_day_ids();
        for &id in &expired {
            self.cancel_order(id);
        }
        if !expired.is_empty() {
            trace!(
                symbol = %self.symbol,
                count = expired.len(),
                "expired day orders"
            );
        }
        expired
    }
}
