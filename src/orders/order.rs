//! The order record tracked by the book while an order rests.

use super::{OrderId, OrderType, Price, Side, Size};

/// A resting order.
///
/// An `Order` is only materialized when admission leaves residual quantity and
/// the order kind permits resting; Market, FillOrKill and FillAndKill aggressors
/// live and die inside a single [`crate::OrderBook::add_order`] call and never
/// become an `Order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    order_type: OrderType,
    id: OrderId,
    side: Side,
    price: Price,
    initial: Size,
    remaining: Size,
}

impl Order {
    /// Creates an order with its full initial quantity unfilled.
    pub fn new(order_type: OrderType, id: OrderId, side: Side, price: Price, size: Size) -> Self {
        Self {
            order_type,
            id,
            side,
            price,
            initial: size,
            remaining: size,
        }
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Quantity the order was admitted with.
    pub fn initial_size(&self) -> Size {
        self.initial
    }

    /// Quantity still available to trade.
    pub fn remaining_size(&self) -> Size {
        self.remaining
    }

    /// Quantity consumed so far.
    pub fn filled_size(&self) -> Size {
        self.initial - self.remaining
    }

    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Consumes `size` from the remaining quantity.
    ///
    /// Precondition: `size <= remaining_size()`.
    pub fn fill(&mut self, size: Size) {
        debug_assert!(
            size <= self.remaining,
            "fill of {} exceeds remaining {}",
            size,
            self.remaining
        );
        self.remaining -= size;
    }
}
