// File: crates/benchplot-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a small log-log chart and a small contour chart without text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for an exact match.
// - Else, checks decoded size and content, and notes the missing snapshot.

use std::path::PathBuf;

use benchplot_core::{
    Axis, AxisConfig, ContourChart, Figure, Grid, LineChart, Marker, RenderOptions, Series,
};

fn line_bytes() -> Vec<u8> {
    let axes = AxisConfig::new("snapshot", Axis::new("size").log(), Axis::new("seconds").log());
    let chart = LineChart::new(axes).with_series([
        Series::new("a", vec![10.0, 100.0, 1000.0], vec![0.001, 0.02, 0.5]).unwrap(),
        Series::new("b", vec![10.0, 100.0, 1000.0], vec![0.002, 0.01, 0.1])
            .unwrap()
            .with_marker(Marker::Square)
            .with_color(skia_safe::Color::from_rgb(0, 128, 0)),
    ]);
    let mut opts = RenderOptions::default().with_size(400, 300);
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render line chart")
}

fn contour_bytes() -> Vec<u8> {
    let rows = (0..6).map(|r| (0..8).map(|c| ((r * c) as f64).sqrt()).collect()).collect();
    let chart = ContourChart::new(
        Grid::from_rows(rows).unwrap(),
        AxisConfig::new("snapshot", Axis::new("Column Index"), Axis::new("Row Index")),
    );
    let mut opts = RenderOptions::contour().with_size(400, 300);
    opts.draw_labels = false;
    chart.render_to_png_bytes(&opts).expect("render contour chart")
}

fn check_snapshot(name: &str, bytes: &[u8]) {
    let snap_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // decoded pixels, not bytes, so encoder settings don't matter
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        let img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        assert_eq!((img.width(), img.height()), (400, 300));
        let corner = *img.get_pixel(0, 0);
        assert_eq!(corner.0, [255, 255, 255, 255], "light theme background");
        let drawn = img.pixels().filter(|p| **p != corner).count();
        assert!(drawn > 500, "only {drawn} non-background pixels");
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_log_log_chart() {
    check_snapshot("log_log_chart.png", &line_bytes());
}

#[test]
fn golden_contour_chart() {
    check_snapshot("contour_chart.png", &contour_bytes());
}
