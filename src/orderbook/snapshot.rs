//! Depth snapshots of the book for market data consumers.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::book::OrderBook;
use crate::orders::{Price, Size};

/// One price level as seen from outside: its price, aggregate resting size and
/// queue length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub price: Price,
    pub size: Size,
    pub order_count: usize,
}

/// A point-in-time view of the top of the book.
///
/// Levels are ordered best-first on each side, truncated to the requested
/// depth. The timestamp records when the snapshot was taken (milliseconds
/// since epoch); it carries no expiry semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol the book trades.
    pub symbol: String,

    /// When the snapshot was created, in milliseconds since UNIX epoch.
    pub timestamp: u64,

    /// Bid levels, highest price first.
    pub bids: Vec<LevelSnapshot>,

    /// Ask levels, lowest price first.
    pub asks: Vec<LevelSnapshot>,
}

fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as u64
}

impl OrderBook {
    /// Captures the top `depth` levels of each side.
    pub fn snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let level_view = |level: &super::ladder::PriceLevel| LevelSnapshot {
            price: level.price(),
            size: level.total_size(),
            order_count: level.order_count(),
        };

        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids: self.bids.iter_levels().take(depth).map(level_view).collect(),
            asks: self.asks.iter_levels().take(depth).map(level_view).collect(),
        }
    }
}

impl OrderBookSnapshot {
    /// Best bid price and size, if the bid side is populated.
    pub fn best_bid(&self) -> Option<(Price, Size)> {
        self.bids.first().map(|level| (level.price, level.size))
    }

    /// Best ask price and size, if the ask side is populated.
    pub fn best_ask(&self) -> Option<(Price, Size)> {
        self.asks.first().map(|level| (level.price, level.size))
    }

    /// Midpoint of the best bid and ask.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Best ask minus best bid.
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask - bid),
            _ => None,
        }
    }

    /// Total visible quantity on the bid side of the snapshot.
    pub fn total_bid_volume(&self) -> Size {
        self.bids.iter().map(|level| level.size).sum()
    }

    /// Total visible quantity on the ask side of the snapshot.
    pub fn total_ask_volume(&self) -> Size {
        self.asks.iter().map(|level| level.size).sum()
    }
}
