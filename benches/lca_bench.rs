//! Build and query benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use euler_lca::{LcaConfig, LcaIndex};

/// Deterministic pseudo-random tree: parent of `i` is drawn from `[0, i)`.
fn random_edges(n: usize) -> Vec<(usize, usize)> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (1..n)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            ((state % i as u64) as usize, i)
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [1_000, 10_000, 100_000] {
        let edges = random_edges(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &edges, |b, edges| {
            b.iter(|| LcaIndex::from_edges(n, black_box(edges), LcaConfig::default()).unwrap());
        });
    }
    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let n = 100_000;
    let index = LcaIndex::from_edges(n, &random_edges(n), LcaConfig::default()).unwrap();
    let pairs: Vec<_> = (0..1_000).map(|i| ((i * 7919) % n, (i * 104_729) % n)).collect();

    c.bench_function("query_1000_pairs_n=100000", |b| {
        b.iter(|| {
            for &(u, v) in &pairs {
                black_box(index.query(u, v).unwrap());
            }
        });
    });
}

criterion_group!(benches, benchmark_build, benchmark_query);
criterion_main!(benches);
