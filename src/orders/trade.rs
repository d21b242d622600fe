//! Trades produced by the matching engine.

use serde::{Deserialize, Serialize};

use super::{OrderId, Price, Size};

/// One side of an executed trade: which order traded, at what price, how much.
///
/// The price is always the resting order's price, on both sides of the trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeData {
    /// Id of the order on this side of the trade.
    pub order_id: OrderId,
    /// Execution price.
    pub price: Price,
    /// Executed quantity.
    pub size: Size,
}

/// An executed match between a bid and an ask.
///
/// Both sides share the execution price and size; which of the two orders was
/// the aggressor is not recorded here, it is implied by the admission call that
/// returned the trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    bid: TradeData,
    ask: TradeData,
}

impl Trade {
    pub fn new(bid: TradeData, ask: TradeData) -> Self {
        debug_assert_eq!(bid.size, ask.size, "trade sides must carry one size");
        debug_assert_eq!(bid.price, ask.price, "trade sides must carry one price");
        Self { bid, ask }
    }

    /// The buy side of the trade.
    pub fn bid(&self) -> TradeData {
        self.bid
    }

    /// The sell side of the trade.
    pub fn ask(&self) -> TradeData {
        self.ask
    }

    /// Execution price, i.e. the resting order's price.
    pub fn price(&self) -> Price {
        self.bid.price
    }

    /// Executed quantity.
    pub fn size(&self) -> Size {
        self.bid.size
    }
}

/// The trades generated by a single admission, in execution order.
pub type Trades = Vec<Trade>;
