//! End-to-end calendar rendering benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loom::calendar::{layout, Layout, LayoutConfig};

fn bench_render_years(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar");
    let config = LayoutConfig::default();

    for &years in &[1u16, 10] {
        group.bench_with_input(BenchmarkId::new("render", years), &years, |b, &years| {
            b.iter(|| {
                let calendar = Layout::new(layout::years(2000, years), &config).unwrap();
                black_box(calendar.render().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_months_per_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_layout");

    for &per_row in &[1usize, 3, 4, 6] {
        let config = LayoutConfig::builder().months_per_row(per_row).build().unwrap();
        group.bench_with_input(BenchmarkId::new("per_row", per_row), &per_row, |b, _| {
            b.iter(|| {
                let calendar = Layout::new(layout::year(2022), &config).unwrap();
                let mut sink = Vec::with_capacity(4096);
                calendar.write_to(&mut sink).unwrap();
                black_box(sink.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_years, bench_months_per_row);
criterion_main!(benches);
