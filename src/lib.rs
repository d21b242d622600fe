//! # Price-Time Priority Order Book Engine
//!
//! A single-instrument, in-memory limit order book with a matching engine, written in Rust.
//! The crate provides the core of an order matching system: admission of incoming orders,
//! execution against resting liquidity under strict price-time priority, and maintenance of
//! the two-sided price-level index that sustains it.
//!
//! ## Key Features
//!
//! - **Six order kinds**: Market, FillOrKill, FillAndKill, GoodTillCancel, GoodForDay and
//!   AllOrNone, each with its own execution policy at admission time.
//!
//! - **Strict price-time priority**: best price first, FIFO within a price level. Trades
//!   produced by a single admission are ordered best-price-first and arrival-first within a
//!   level, and always execute at the resting order's price.
//!
//! - **AllOrNone handling on both sides**: resting AllOrNone orders are stepped over when the
//!   aggressor cannot absorb them whole, and an AllOrNone aggressor matches only when the
//!   opposite side can fill it completely.
//!
//! - **Cancellation and modification**: cancel through a resting-order index; modification is
//!   cancel-plus-readmit and deliberately requeues at the tail of the new price level.
//!
//! - **Depth snapshots**: serializable views of the top of the book for market data feeds.
//!
//! ## Concurrency Model
//!
//! The book is a synchronous, single-threaded object: every public operation takes `&self`
//! or `&mut self`, runs to completion and returns. There are no internal queues, threads or
//! locks. Callers that need multi-producer access wrap the book in their own guard.
//!
//! ## What This Crate Is Not
//!
//! No multi-instrument routing, self-trade prevention, iceberg quantity, stop triggers, fee
//! computation or persistence. GoodForDay expiry is exposed as a sweep hook
//! ([`OrderBook::expire_day_orders`]); enforcing the wall clock is the caller's job.

mod orderbook;
mod orders;

pub use orderbook::snapshot::{LevelSnapshot, OrderBookSnapshot};
pub use orderbook::OrderBook;
pub use orders::order::Order;
pub use orders::trade::{Trade, TradeData, Trades};
pub use orders::{OrderId, OrderType, ParseError, Price, Side, Size, MARKET_PRICE};
