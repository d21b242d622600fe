//! Order admission: the type-specific execution policies.

use tracing::trace;

use super::book::OrderBook;
use crate::orders::order::Order;
use crate::orders::trade::Trades;
use crate::orders::{OrderId, OrderType, Price, Side, Size, MARKET_PRICE};

impl OrderBook {
    /// Admits an order and returns the trades it generated, in execution order.
    ///
    /// Admission is total: a duplicate id, an infeasible FillOrKill, a size of
    /// zero or a simple lack of liquidity all come back as an empty trade list
    /// with the book unchanged (except that an infeasible AllOrNone rests).
    /// Residual quantity rests for GoodTillCancel, GoodForDay and AllOrNone and
    /// is discarded for the immediate kinds.
    pub fn add_order(
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
            "admitting order"
        );

        if size == 0 {
            return Trades::new();
        }

        if self.order_locations.contains_key(&id) {
            trace!(symbol = %self.symbol, id, "rejected: id already resting");
            return Trades::new();
        }

        match order_type {
            OrderType::FillOrKill => {
                if !self.opposite_can_fully_fill(side, price, size) {
                    trace!(symbol = %self.symbol, id, "FOK infeasible, killed");
                    return Trades::new();
                }
                let (trades, residual) = self.execute(id, side, price, size);
                debug_assert_eq!(residual, 0, "feasible FOK must fill completely");
                trades
            }

            OrderType::AllOrNone => {
                if !self.opposite_can_fully_fill(side, price, size) {
                    // Infeasible AON skips matching entirely and waits in the
                    // book for an aggressor that can absorb it whole.
                    self.rest(Order::new(order_type, id, side, price, size));
                    return Trades::new();
                }
                let (trades, residual) = self.execute(id, side, price, size);
                debug_assert_eq!(residual, 0, "feasible AON must fill completely");
                trades
            }

            OrderType::Market | OrderType::FillAndKill => {
                let (trades, _residual) = self.execute(id, side, price, size);
                trades
            }

            OrderType::GoodTillCancel | OrderType::GoodForDay => {
                let (trades, residual) = self.execute(id, side, price, size);
                if residual > 0 {
                    let mut order = Order::new(order_type, id, side, price, size);
                    order.fill(size - residual);
                    self.rest(order);
                }
                trades
            }
        }
    }

    /// Submits a market order: no limit, residual discarded.
    pub fn submit_market_order(&mut self, id: OrderId, side: Side, size: Size) -> Trades {
        self.add_order(OrderType::Market, id, side, MARKET_PRICE, size)
    }
}
