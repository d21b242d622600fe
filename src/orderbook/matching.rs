//! Matching engine internals: feasibility scans and execution against the
//! opposite side of the book.

use super::book::OrderBook;
use crate::orders::order::Order;
use crate::orders::trade::Trades;
use crate::orders::{OrderId, Price, Side, Size};

impl OrderBook {
    /// Whether the side opposite `side` holds enough crossable liquidity to
    /// fill `size` completely at `limit`.
    ///
    /// Resting AllOrNone orders too large for the still-needed volume do not
    /// count, matching the skip rule of the execution pass, so a positive
    /// answer guarantees the subsequent match consumes the full size.
    pub(super) fn opposite_can_fully_fill(&self, side: Side, limit: Price, size: Size) -> bool {
        match side {
            Side::Buy => self.asks.can_fully_fill(limit, size),
            Side::Sell => self.bids.can_fully_fill(limit, size),
        }
    }

    /// Matches an aggressor against the opposite ladder and returns the trades
    /// together with the aggressor's unfilled residual.
    ///
    /// Fully filled resting orders are evicted from the by-id index as they
    /// drop out of their level, keeping both views of the book in one step.
    pub(super) fn execute(
        &mut self,
        id: OrderId,
        side: Side,
        limit: Price,
        size: Size,
    ) -> (Trades, Size) {
        let mut volume_remaining = size;

        let order_locations = &mut self.order_locations;
        let on_remove = |filled: OrderId| {
            order_locations.remove(&filled);
        };

        let trades = match side {
            Side::Buy => {
                self.asks
                    .match_aggressor(id, side, limit, &mut volume_remaining, on_remove)
            }
            Side::Sell => {
                self.bids
                    .match_aggressor(id, side, limit, &mut volume_remaining, on_remove)
            }
        };

        if let Some(last) = trades.last() {
            self.last_trade_price = Some(last.price());
        }

        (trades, volume_remaining)
    }

    /// Enters a residual order into its own side and the by-id index.
    pub(super) fn rest(&mut self, order: Order) {
        self.order_locations
            .insert(order.id(), (order.price(), order.side()));
        match order.side() {
            Side::Buy => self.bids.add(order),
            Side::Sell => self.asks.add(order),
        }
    }
}
