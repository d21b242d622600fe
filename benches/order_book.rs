//! Criterion benchmarks for admission, matching and cancellation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use matchbook::{OrderBook, OrderType, Side, MARKET_PRICE};
use std::hint::black_box;

fn bench_add_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    group.bench_function("add_resting_orders_one_level", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for id in 0..100u64 {
                black_box(book.add_order(OrderType::GoodTillCancel, id, Side::Buy, 100, 10));
            }
        })
    });

    group.bench_function("add_resting_orders_spread_levels", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for id in 0..100u64 {
                let price = 1000 + (id as i64 % 20);
                black_box(book.add_order(OrderType::GoodTillCancel, id, Side::Sell, price, 10));
            }
        })
    });

    for order_count in [10u64, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            &order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut book = OrderBook::new("BENCH");
                    for id in 0..order_count {
                        black_box(book.add_order(
                            OrderType::GoodTillCancel,
                            id,
                            Side::Buy,
                            1000,
                            10,
                        ));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_match_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");

    group.bench_function("market_sweep_across_levels", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for id in 0..50u64 {
                book.add_order(OrderType::GoodTillCancel, id, Side::Sell, 100 + id as i64, 10);
            }
            black_box(book.add_order(OrderType::Market, 999, Side::Buy, MARKET_PRICE, 500));
        })
    });

    group.bench_function("limit_cross_single_level", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for id in 0..50u64 {
                book.add_order(OrderType::GoodTillCancel, id, Side::Sell, 100, 10);
            }
            black_box(book.add_order(OrderType::GoodTillCancel, 999, Side::Buy, 100, 500));
        })
    });

    group.bench_function("fok_feasibility_scan", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for id in 0..50u64 {
                book.add_order(OrderType::GoodTillCancel, id, Side::Sell, 100 + id as i64, 10);
            }
            black_box(book.add_order(OrderType::FillOrKill, 999, Side::Buy, 150, 500));
        })
    });

    group.finish();
}

fn bench_cancel_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Cancel Orders");

    group.bench_function("cancel_half_the_book", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("BENCH");
            for id in 0..100u64 {
                book.add_order(
                    OrderType::GoodTillCancel,
                    id,
                    Side::Buy,
                    1000 + (id as i64 % 10),
                    10,
                );
            }
            for id in (0..100u64).step_by(2) {
                black_box(book.cancel_order(id));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add_orders,
    bench_match_orders,
    bench_cancel_orders
);
criterion_main!(benches);
