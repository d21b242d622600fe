//! Minimal walkthrough: seed a book, cross it, inspect the result.
//!
//! Run with `cargo run --example basic_matching`.

use matchbook::{OrderBook, OrderType, Side, MARKET_PRICE};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut book = OrderBook::new("BTC-USD");

    book.add_order(OrderType::GoodTillCancel, 1, Side::Sell, 50_100, 5);
    book.add_order(OrderType::GoodTillCancel, 2, Side::Sell, 50_050, 3);
    book.add_order(OrderType::GoodTillCancel, 3, Side::Buy, 50_000, 4);

    println!(
        "book: best bid {:?}, best ask {:?}, spread {:?}",
        book.best_bid(),
        book.best_ask(),
        book.spread()
    );

    let trades = book.add_order(OrderType::Market, 4, Side::Buy, MARKET_PRICE, 6);
    for trade in &trades {
        println!(
            "trade: bid #{} / ask #{} -> {} @ {}",
            trade.bid().order_id,
            trade.ask().order_id,
            trade.size(),
            trade.price()
        );
    }

    let snapshot = book.snapshot(5);
    println!(
        "after sweep: last trade {:?}, asks left {:?}",
        book.last_trade_price(),
        snapshot.asks
    );
}
