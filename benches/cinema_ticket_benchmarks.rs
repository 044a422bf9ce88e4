use cinema_ticket::core::{MovieId, TicketId, UserId};
use cinema_ticket::store::TicketingStore;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn populated_store(size: u64) -> TicketingStore {
    let mut store = TicketingStore::new();
    for i in 0..size {
        store.add_movie(format!("Movie {i}"));
        store.add_user(format!("User {i}"));
    }
    store
}

fn bench_buy_ticket(c: &mut Criterion) {
    let mut group = c.benchmark_group("buy_ticket");
    for size in [10_u64, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut store = populated_store(size);
            b.iter(|| {
                // Last user and movie: worst case for the linear scans
                let _ = store.buy_ticket(black_box(UserId::new(size)), black_box(MovieId::new(size)));
            });
        });
    }
    group.finish();
}

fn bench_buy_then_cancel(c: &mut Criterion) {
    c.bench_function("buy_then_cancel", |b| {
        let mut store = populated_store(100);
        b.iter(|| {
            if let Ok(id) = store.buy_ticket(UserId::new(50), MovieId::new(50)) {
                let _ = store.cancel_ticket(black_box(id));
            }
        });
    });
}

fn bench_cancel_missing(c: &mut Criterion) {
    c.bench_function("cancel_missing", |b| {
        let mut store = populated_store(10);
        for _ in 0..1_000 {
            let _ = store.buy_ticket(UserId::new(1), MovieId::new(1));
        }
        b.iter(|| store.cancel_ticket(black_box(TicketId::new(u64::MAX))).is_err());
    });
}

criterion_group!(benches, bench_buy_ticket, bench_buy_then_cancel, bench_cancel_missing);
criterion_main!(benches);
