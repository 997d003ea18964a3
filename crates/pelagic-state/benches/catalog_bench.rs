//! Catalog filtering and grouping benchmarks.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pelagic_content::classify::Classifier;
use pelagic_content::team::{FILTER_TOKENS, TEAM};
use pelagic_state::Catalog;

fn bench_visible(c: &mut Criterion) {
    let mut catalog = Catalog::new(&TEAM, FILTER_TOKENS);
    catalog.set_filter("robotics");
    c.bench_function("catalog_visible_filtered", |b| {
        b.iter(|| black_box(catalog.visible()))
    });
}

fn bench_grouped(c: &mut Criterion) {
    let catalog = Catalog::new(&TEAM, FILTER_TOKENS);
    let classifier = Classifier::team();
    c.bench_function("catalog_grouped_full", |b| {
        b.iter(|| black_box(catalog.grouped(&classifier)))
    });
}

criterion_group!(benches, bench_visible, bench_grouped);
criterion_main!(benches);
