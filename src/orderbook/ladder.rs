//! Price levels and the per-side sorted ladder they live in.
//!
//! A [`LevelLadder`] is one side of the book: a sorted collection of
//! [`PriceLevel`]s whose iteration order always yields the best price first.
//! The ordering is fixed at compile time through [`SideRank`], so the bid and
//! ask ladders share every scan (feasibility, matching, cancellation) while
//! disagreeing only on what "best" means.

use std::cmp::Reverse;
use std::collections::{BTreeMap, VecDeque};

use crate::orders::order::Order;
use crate::orders::trade::{Trade, TradeData, Trades};
use crate::orders::{OrderId, OrderType, Price, Side, Size, MARKET_PRICE};

/// A single price's FIFO queue of resting orders plus its aggregate size.
///
/// The aggregate is maintained on every append, fill and removal so that
/// `size == Σ order.remaining` holds at all times. An emptied level is never
/// kept around: the enclosing ladder erases it in the same step.
#[derive(Debug)]
pub(crate) struct PriceLevel {
    price: Price,
    size: Size,
    orders: VecDeque<Order>,
}

impl PriceLevel {
    pub(crate) fn new(price: Price) -> Self {
        Self {
            price,
            size: 0,
            orders: VecDeque::new(),
        }
    }

    pub(crate) fn price(&self) -> Price {
        self.price
    }

    /// Total resting quantity at this price.
    pub(crate) fn total_size(&self) -> Size {
        self.size
    }

    pub(crate) fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resting orders in arrival order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Appends an order at the tail of the queue.
    pub(crate) fn push(&mut self, order: Order) {
        debug_assert_eq!(order.price(), self.price, "order joined the wrong level");
        self.size += order.remaining_size();
        self.orders.push_back(order);
    }

    /// Removes the order with the given id, keeping the aggregate size in step.
    pub(crate) fn remove(&mut self, id: OrderId) -> Option<Order> {
        let index = self.orders.iter().position(|order| order.id() == id)?;
        let order = self.orders.remove(index)?;
        self.size -= order.remaining_size();
        Some(order)
    }

    /// Trades the aggressor against this level's queue in FIFO order.
    ///
    /// Resting AllOrNone orders larger than the aggressor's remaining volume
    /// are stepped over, not consumed. Fully filled resting orders are reported
    /// through `on_remove` and dropped from the queue; the aggregate size
    /// tracks every partial fill.
    fn execute(
        &mut self,
        aggressor_id: OrderId,
        aggressor_side: Side,
        volume_remaining: &mut Size,
        trades: &mut Trades,
        on_remove: &mut impl FnMut(OrderId),
    ) {
        let mut index = 0;
        while index < self.orders.len() && *volume_remaining > 0 {
            let resting = &mut self.orders[index];

            if resting.order_type() == OrderType::AllOrNone
                && resting.remaining_size() > *volume_remaining
            {
                index += 1;
                continue;
            }

            let trade_size = (*volume_remaining).min(resting.remaining_size());

            let incoming = TradeData {
                order_id: aggressor_id,
                price: self.price,
                size: trade_size,
            };
            let standing = TradeData {
                order_id: resting.id(),
                price: self.price,
                size: trade_size,
            };
            trades.push(match aggressor_side {
                Side::Buy => Trade::new(incoming, standing),
                Side::Sell => Trade::new(standing, incoming),
            });

            *volume_remaining -= trade_size;
            self.size -= trade_size;
            resting.fill(trade_size);

            if resting.is_filled() {
                on_remove(resting.id());
                self.orders.remove(index);
            } else {
                index += 1;
            }
        }
    }
}

/// Compile-time ordering policy of one ladder side.
///
/// `rank` maps a price onto the ladder's sort key so that ascending key order
/// is best-first; `beyond` says when a limit can no longer reach a level and
/// the scan must stop.
pub(crate) trait SideRank {
    type Key: Copy + Ord;

    fn rank(price: Price) -> Self::Key;

    /// True when an aggressor limited to `limit` cannot trade at `level`.
    fn beyond(limit: Price, level: Price) -> bool;

    /// A limit crosses a level when it is not beyond it; the market sentinel
    /// crosses everything.
    fn crosses(limit: Price, level: Price) -> bool {
        limit == MARKET_PRICE || !Self::beyond(limit, level)
    }
}

/// Bid-side ordering: best first means highest price first; a sell aggressor
/// priced above a bid cannot reach it.
#[derive(Debug)]
pub(crate) enum BidRank {}

impl SideRank for BidRank {
    type Key = Reverse<Price>;

    fn rank(price: Price) -> Self::Key {
        Reverse(price)
    }

    fn beyond(limit: Price, level: Price) -> bool {
        limit > level
    }
}

/// Ask-side ordering: best first means lowest price first; a buy aggressor
/// priced below an ask cannot reach it.
#[derive(Debug)]
pub(crate) enum AskRank {}

impl SideRank for AskRank {
    type Key = Price;

    fn rank(price: Price) -> Self::Key {
        price
    }

    fn beyond(limit: Price, level: Price) -> bool {
        limit < level
    }
}

/// One side of the book: price levels sorted best-first, no empty levels.
#[derive(Debug)]
pub(crate) struct LevelLadder<R: SideRank> {
    levels: BTreeMap<R::Key, PriceLevel>,
}

impl<R: SideRank> LevelLadder<R> {
    pub(crate) fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of price levels currently populated.
    pub(crate) fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The best price on this side, if any.
    pub(crate) fn best(&self) -> Option<Price> {
        self.levels.values().next().map(PriceLevel::price)
    }

    /// Price levels in best-first order.
    pub(crate) fn iter_levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values()
    }

    /// Total resting quantity across all levels.
    pub(crate) fn total_volume(&self) -> Size {
        self.levels.values().map(PriceLevel::total_size).sum()
    }

    /// Inserts a resting order at the tail of its price's level, creating the
    /// level if it does not exist yet.
    pub(crate) fn add(&mut self, order: Order) {
        let price = order.price();
        self.levels
            .entry(R::rank(price))
            .or_insert_with(|| PriceLevel::new(price))
            .push(order);
    }

    /// Removes a resting order, erasing its level if that left it empty.
    /// Absent orders are a silent no-op.
    pub(crate) fn cancel(&mut self, price: Price, id: OrderId) -> Option<Order> {
        let key = R::rank(price);
        let level = self.levels.get_mut(&key)?;
        let removed = level.remove(id);
        if level.is_empty() {
            self.levels.remove(&key);
        }
        removed
    }

    /// Whether an aggressor limited to `limit` could be filled completely.
    ///
    /// Scans best-to-worse, stopping at the first level the limit does not
    /// cross. Resting AllOrNone orders whose remaining size exceeds the volume
    /// still needed are skipped, exactly as the matching pass will skip them.
    pub(crate) fn can_fully_fill(&self, limit: Price, mut needed: Size) -> bool {
        for level in self.levels.values() {
            if !R::crosses(limit, level.price()) {
                break;
            }
            for resting in level.iter() {
                if resting.order_type() == OrderType::AllOrNone
                    && resting.remaining_size() > needed
                {
                    continue;
                }
                needed -= needed.min(resting.remaining_size());
                if needed == 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Matches an aggressor against this side, best level first, FIFO within a
    /// level.
    ///
    /// `volume_remaining` is decremented as trades execute; `on_remove` fires
    /// for every resting order that fills completely, before it is dropped.
    /// Levels emptied by the scan are erased. The scan ends when the volume is
    /// exhausted or the next level's price no longer crosses the limit.
    pub(crate) fn match_aggressor(
        &mut self,
        aggressor_id: OrderId,
        aggressor_side: Side,
        limit: Price,
        volume_remaining: &mut Size,
        mut on_remove: impl FnMut(OrderId),
    ) -> Trades {
        let mut trades = Trades::new();

        let keys: Vec<R::Key> = self.levels.keys().copied().collect();
        for key in keys {
            if *volume_remaining == 0 {
                break;
            }
            let Some(level) = self.levels.get_mut(&key) else {
                continue;
            };
            if !R::crosses(limit, level.price()) {
                break;
            }

            level.execute(
                aggressor_id,
                aggressor_side,
                volume_remaining,
                &mut trades,
                &mut on_remove,
            );

            if level.is_empty() {
                self.levels.remove(&key);
            }
        }

        trades
    }
}
