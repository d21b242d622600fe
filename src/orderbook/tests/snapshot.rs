//! Unit tests for depth snapshots.

#[cfg(test)]
mod tests {
    use crate::orderbook::book::OrderBook;
    use crate::orderbook::snapshot::OrderBookSnapshot;
    use crate::orders::{OrderType, Side};

    fn populated_book() -> OrderBook {
        let mut book = OrderBook::new("TEST");
        book.add_order(OrderType::GoodTillCancel, 1, Side::Buy, 100, 10);
        book.add_order(OrderType::GoodTillCancel, 2, Side::Buy, 100, 5);
        book.add_order(OrderType::GoodTillCancel, 3, Side::Buy, 99, 20);
        book.add_order(OrderType::GoodTillCancel, 4, Side::Buy, 98, 30);
        book.add_order(OrderType::GoodTillCancel, 5, Side::Sell, 101, 7);
        book.add_order(OrderType::GoodTillCancel, 6, Side::Sell, 102, 9);
        book
    }

    #[test]
    fn test_snapshot_orders_levels_best_first() {
        let snapshot = populated_book().snapshot(10);

        assert_eq!(snapshot.symbol, "TEST");
        let bid_prices: Vec<i64> = snapshot.bids.iter().map(|level| level.price).collect();
        assert_eq!(bid_prices, vec![100, 99, 98]);
        let ask_prices: Vec<i64> = snapshot.asks.iter().map(|level| level.price).collect();
        assert_eq!(ask_prices, vec![101, 102]);

        assert_eq!(snapshot.bids[0].size, 15);
        assert_eq!(snapshot.bids[0].order_count, 2);
    }

    #[test]
    fn test_snapshot_truncates_to_depth() {
        let snapshot = populated_book().snapshot(2);

        assert_eq!(snapshot.bids.len(), 2);
        assert_eq!(snapshot.asks.len(), 2);
        assert_eq!(snapshot.bids[1].price, 99);
    }

    #[test]
    fn test_snapshot_helpers() {
        let snapshot = populated_book().snapshot(10);

        assert_eq!(snapshot.best_bid(), Some((100, 15)));
        assert_eq!(snapshot.best_ask(), Some((101, 7)));
        assert_eq!(snapshot.spread(), Some(1));
        assert_eq!(snapshot.mid_price(), Some(100.5));
        assert_eq!(snapshot.total_bid_volume(), 65);
        assert_eq!(snapshot.total_ask_volume(), 16);
    }

    #[test]
    fn test_empty_book_snapshot() {
        let book = OrderBook::new("TEST");
        let snapshot = book.snapshot(5);

        assert!(snapshot.bids.is_empty());
        assert!(snapshot.asks.is_empty());
        assert!(snapshot.best_bid().is_none());
        assert!(snapshot.spread().is_none());
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let snapshot = populated_book().snapshot(10);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: OrderBookSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
