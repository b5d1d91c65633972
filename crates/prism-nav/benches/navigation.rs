//! Benchmarks for route lookup and sidebar serialization.

use criterion::{Criterion, criterion_group, criterion_main};
use prism_nav::{Route, SIDEBAR};

fn bench_route_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_lookup");

    group.bench_function("parse_hit", |b| {
        b.iter(|| Route::parse("/cookbooks/compare_multiple_models"))
    });

    group.bench_function("parse_miss", |b| {
        b.iter(|| Route::parse("/nonexistent/path"))
    });

    group.finish();
}

fn bench_sidebar(c: &mut Criterion) {
    let mut group = c.benchmark_group("sidebar");

    group.bench_function("walk_links", |b| {
        b.iter(|| {
            SIDEBAR
                .iter()
                .flat_map(|nav_group| nav_group.links.iter())
                .map(|link| link.route.path().len())
                .sum::<usize>()
        })
    });

    group.bench_function("serialize_json", |b| {
        b.iter(|| serde_json::to_string(SIDEBAR).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_route_lookup, bench_sidebar);
criterion_main!(benches);
