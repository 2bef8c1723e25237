// File: crates/benchplot-core/benches/render_bench.rs
// Summary: Criterion benches for PNG rendering of line/contour charts and for isoband computation.

use benchplot_core::contour::{isobands, nice_levels};
use benchplot_core::{Axis, AxisConfig, ChartError, ContourChart, Figure, Grid, LineChart, RenderOptions, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_log_log(n: usize) -> LineChart {
    let xs: Vec<f64> = (1..=n).map(|i| i as f64 * 10.0).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 1e-4 * x.powf(1.5)).collect();
    let axes = AxisConfig::new("bench", Axis::new("size").log(), Axis::new("seconds").log());
    LineChart::new(axes).with_series([Series::new("serial", xs, ys).expect("series")])
}

fn build_grid(rows: usize, cols: usize) -> Grid {
    let values = (0..rows)
        .map(|r| (0..cols).map(|c| ((r as f64 * 0.1).sin() + (c as f64 * 0.07).cos()) * 50.0).collect())
        .collect();
    Grid::from_rows(values).expect("grid")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10usize, 1_000usize] {
        group.bench_function(format!("log_log_{n}"), |b| {
            let chart = build_log_log(n);
            let mut opts = RenderOptions::default().with_size(800, 500);
            opts.draw_labels = false;
            b.iter(|| -> Result<(), ChartError> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.bench_function("contour_100x100", |b| {
        let chart = ContourChart::new(build_grid(100, 100), AxisConfig::new("bench", Axis::new("c"), Axis::new("r")));
        let mut opts = RenderOptions::contour();
        opts.draw_labels = false;
        b.iter(|| -> Result<(), ChartError> {
            black_box(chart.render_to_png_bytes(&opts)?);
            Ok(())
        });
    });
    group.finish();
}

fn bench_isobands(c: &mut Criterion) {
    let grid = build_grid(200, 200);
    let (lo, hi) = grid.extent();
    let levels = nice_levels(lo, hi, 7);
    c.bench_function("isobands_200x200", |b| b.iter(|| black_box(isobands(&grid, &levels))));
}

criterion_group!(benches, bench_render, bench_isobands);
criterion_main!(benches);
