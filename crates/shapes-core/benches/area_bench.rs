//! Criterion benchmarks for area computation.
//!
//! Compares static dispatch on the concrete types with dynamic dispatch
//! through `dyn Rectangular`, and measures `report_area` into an in-memory
//! console.
//!
//! Run with:
//! ```bash
//! cargo bench --package shapes-core --bench area_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shapes_core::{BufferConsole, Rectangle, Rectangular, Square};

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// Builds `n` boxed shapes alternating between rectangles and squares.
fn mixed_shapes(n: usize) -> Vec<Box<dyn Rectangular>> {
    (0..n)
        .map(|i| -> Box<dyn Rectangular> {
            let v = i as f64 + 1.0;
            if i % 2 == 0 {
                Box::new(Rectangle::new(v, v * 2.0))
            } else {
                Box::new(Square::new(v))
            }
        })
        .collect()
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_area_static(c: &mut Criterion) {
    let rect = Rectangle::new(5.0, 10.0);
    let square = Square::new(7.0);
    let mut group = c.benchmark_group("area_static");

    group.bench_function("rectangle", |b| b.iter(|| black_box(&rect).area()));
    group.bench_function("square", |b| b.iter(|| black_box(&square).area()));

    group.finish();
}

fn bench_area_dyn(c: &mut Criterion) {
    let shapes = mixed_shapes(64);

    c.bench_function("area_dyn_sum_64", |b| {
        b.iter(|| black_box(&shapes).iter().map(|s| s.area()).sum::<f64>())
    });
}

fn bench_report_area(c: &mut Criterion) {
    let square = Square::with_color(7.0, "green");
    let mut console = BufferConsole::new();

    c.bench_function("report_area_square", |b| {
        b.iter(|| {
            console.clear();
            black_box(square.report_area(&mut console))
        })
    });
}

criterion_group!(benches, bench_area_static, bench_area_dyn, bench_report_area);
criterion_main!(benches);
