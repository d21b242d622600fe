//! Core OrderBook state and its read-only queries.

use std::collections::HashMap;

use tracing::trace;

use super::ladder::{AskRank, BidRank, LevelLadder};
use crate::orders::order::Order;
use crate::orders::{OrderId, Price, Side, Size};

/// A single-instrument limit order book.
///
/// The book composes a bid ladder, an ask ladder and a by-id index of every
/// resting order. The level FIFO is the sole owner of an order; the index maps
/// an id to the `(price, side)` where the order rests, so cancellation never
/// has to search the ladders. Both are updated in the same step on every
/// admission, fill and cancel.
///
/// All operations are synchronous and run to completion; the book holds no
/// locks and expects exclusive access.
pub struct OrderBook {
    /// Label for this book's instrument, used in logs and snapshots.
    pub(super) symbol: String,

    /// Buy-side levels, iterated highest price first.
    pub(super) bids: LevelLadder<BidRank>,

    /// Sell-side levels, iterated lowest price first.
    pub(super) asks: LevelLadder<AskRank>,

    /// Where each resting order sits, keyed by id. An id is present here iff
    /// exactly one resting order with that id exists in exactly one level of
    /// the matching side.
    pub(super) order_locations: HashMap<OrderId, (Price, Side)>,

    /// Price of the most recent trade, if any trade has happened.
    pub(super) last_trade_price: Option<Price>,
}

impl OrderBook {
    /// Creates an empty book for the given symbol.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: LevelLadder::new(),
            asks: LevelLadder::new(),
            order_locations: HashMap::new(),
            last_trade_price: None,
        }
    }

    /// The symbol this book trades.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// True when neither side holds any resting order.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// The best (highest) bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best()
    }

    /// The best (lowest) ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best()
    }

    /// Best ask minus best bid; requires both sides to be populated.
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Midpoint of the best bid and ask.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// The price at which the last trade executed, if there was one.
    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    /// Whether an order with this id is currently resting.
    pub fn contains_order(&self, id: OrderId) -> bool {
        self.order_locations.contains_key(&id)
    }

    /// Looks up a resting order by id.
    pub fn get_order(&self, id: OrderId) -> Option<Order> {
        let (price, side) = *self.order_locations.get(&id)?;
        let ladder_level = match side {
            Side::Buy => self.bids.iter_levels().find(|level| level.price() == price),
            Side::Sell => self.asks.iter_levels().find(|level| level.price() == price),
        }?;
        ladder_level.iter().find(|order| order.id() == id).copied()
    }

    /// All resting orders at one price on one side, in arrival order.
    pub fn orders_at_price(&self, price: Price, side: Side) -> Vec<Order> {
        trace!(
            symbol = %self.symbol,
            price,
            %side,
            "querying orders at price"
        );
        let level = match side {
            Side::Buy => self.bids.iter_levels().find(|level| level.price() == price),
            Side::Sell => self.asks.iter_levels().find(|level| level.price() == price),
        };
        level
            .map(|level| level.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of populated bid levels.
    pub fn bid_level_count(&self) -> usize {
        self.bids.level_count()
    }

    /// Number of populated ask levels.
    pub fn ask_level_count(&self) -> usize {
        self.asks.level_count()
    }

    /// Total resting quantity on the bid side.
    pub fn total_bid_volume(&self) -> Size {
        self.bids.total_volume()
    }

    /// Total resting quantity on the ask side.
    pub fn total_ask_volume(&self) -> Size {
        self.asks.total_volume()
    }

    /// Resting quantity keyed by price, for each side.
    pub fn volume_by_price(&self) -> (HashMap<Price, Size>, HashMap<Price, Size>) {
        let bid_volumes = self
            .bids
            .iter_levels()
            .map(|level| (level.price(), level.total_size()))
            .collect();
        let ask_volumes = self
            .asks
            .iter_levels()
            .map(|level| (level.price(), level.total_size()))
            .collect();
        (bid_volumes, ask_volumes)
    }
}
