use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use leaderboard_engine::{
    core::ResultRow,
    ranking::{compute_ranks, ScoreSelector},
    view::{filter_by_username, partition_current_user},
};

fn create_test_rows(count: usize) -> Vec<ResultRow> {
    (0..count)
        .map(|i| {
            // Coarse scores so ties are common, like real standings
            ResultRow::new(format!("player_{}", i)).with_field("score", (i * 7919 % 500) as i64)
        })
        .collect()
}

fn bench_compute_ranks(c: &mut Criterion) {
    let selector = ScoreSelector::field("score");
    let mut group = c.benchmark_group("compute_ranks");

    for size in [100, 1_000, 10_000] {
        let rows = create_test_rows(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| black_box(compute_ranks(rows, &selector)));
        });
    }

    group.finish();
}

fn bench_filter_by_username(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_username");

    for size in [100, 1_000, 10_000] {
        let rows = create_test_rows(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| black_box(filter_by_username(rows, "Player_4")));
        });
    }

    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let rows = create_test_rows(10_000);

    c.bench_function("partition_current_user_10000", |b| {
        b.iter(|| black_box(partition_current_user(&rows, "player_5000")));
    });
}

criterion_group!(benches, bench_compute_ranks, bench_filter_by_username, bench_partition);
criterion_main!(benches);
