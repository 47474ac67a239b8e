use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tollgate_keystatus::link_transactions_to_key;
use tollgate_types::{
    Address, Key, Timestamp, Transaction, TransactionSet, TransactionStatus, TxHash,
};

fn make_key() -> Key {
    Key::new(Address::new("0xlock"), Address::new("0xowner"), Timestamp::new(u64::MAX))
}

fn make_set_with_purchases(n: usize) -> TransactionSet {
    let key = make_key();
    (0..n)
        .map(|i| {
            Transaction::new(TxHash::new(format!("0x{:08x}", i)), TransactionStatus::Mined)
                .with_key(key.id.clone())
                .with_block_number(i as u64)
                .with_confirmations((i % 16) as u32)
        })
        .collect()
}

fn bench_link_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_transactions");
    let key = make_key();

    for purchase_count in [1, 10, 100, 1000] {
        let set = make_set_with_purchases(purchase_count);
        let now = Timestamp::new(1_000_000);

        group.bench_with_input(
            BenchmarkId::new("link_transactions_to_key", purchase_count),
            &purchase_count,
            |b, _| {
                b.iter(|| {
                    black_box(link_transactions_to_key(
                        black_box(&key),
                        black_box(&set),
                        black_box(12),
                        black_box(now),
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_link_transactions);
criterion_main!(benches);
