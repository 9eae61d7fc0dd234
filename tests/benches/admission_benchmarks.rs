//! # Admission Benchmarks
//!
//! | Path | What is measured |
//! |------|------------------|
//! | `admit/ed25519` | Full pipeline, Ed25519 signature |
//! | `admit/secp256k1` | Full pipeline, secp256k1 signature |
//! | `check_input_data` | Decode plus semantic checks only |
//! | `admit/batch` | Sequential admission throughput |

use admission_tests::fixtures::{encode, pipeline, Wallet, MARKET_ID};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_types::{
    Command, InputData, OrderSubmission, OrderType, Side, TimeInForce, VoteSubmission,
};
use std::time::Duration;
use tx_admission::TransactionAdmissionApi;

fn order() -> Command {
    Command::OrderSubmission(OrderSubmission {
        market_id: MARKET_ID.into(),
        price: "100".into(),
        size: 10,
        side: Side::Buy.value(),
        time_in_force: TimeInForce::Gtc.value(),
        order_type: OrderType::Limit.value(),
        ..Default::default()
    })
}

fn bench_admit(c: &mut Criterion) {
    let mut group = c.benchmark_group("admit");
    group.measurement_time(Duration::from_secs(5));
    let pipeline = pipeline();

    let ed25519 = Wallet::ed25519(1).submit(1, order());
    group.bench_function("ed25519", |b| {
        b.iter(|| black_box(pipeline.admit(&ed25519).is_ok()))
    });

    let secp256k1 = Wallet::secp256k1().submit(1, order());
    group.bench_function("secp256k1", |b| {
        b.iter(|| black_box(pipeline.admit(&secp256k1).is_ok()))
    });

    for size in [10u64, 100, 500] {
        let wallet = Wallet::ed25519(2);
        let batch: Vec<_> = (1..=size)
            .map(|nonce| {
                let vote = Command::VoteSubmission(VoteSubmission {
                    proposal_id: MARKET_ID.into(),
                    value: 2,
                });
                wallet.submit(nonce, vote)
            })
            .collect();

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("batch", size), &batch, |b, batch| {
            b.iter(|| {
                let admitted = batch.iter().filter(|tx| pipeline.admit(tx).is_ok()).count();
                black_box(admitted)
            })
        });
    }

    group.finish();
}

fn bench_check_input_data(c: &mut Criterion) {
    let pipeline = pipeline();
    let bytes = encode(&InputData { nonce: 1, command: Some(order()) });

    c.bench_function("check_input_data", |b| {
        b.iter(|| black_box(pipeline.check_input_data(black_box(&bytes)).is_ok()))
    });
}

criterion_group!(benches, bench_admit, bench_check_input_data);
criterion_main!(benches);
