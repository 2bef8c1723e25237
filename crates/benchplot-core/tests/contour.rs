// File: crates/benchplot-core/tests/contour.rs
// Purpose: Contour levels, isoband geometry, colormap use and rendering of filled contour charts.

use benchplot_core::contour::{isobands, nice_levels};
use benchplot_core::geometry::polygon_area;
use benchplot_core::{
    Axis, AxisConfig, AxisId, ChartError, Colormap, ContourChart, Figure, Grid, Levels, RenderOptions,
};
use proptest::prelude::*;

fn axes() -> AxisConfig {
    AxisConfig::new("Contour Plot of Matrix C", Axis::new("Column Index"), Axis::new("Row Index"))
}

fn ramp(rows: usize, cols: usize) -> Grid {
    Grid::from_rows((0..rows).map(|r| (0..cols).map(|c| (r * cols + c) as f64).collect()).collect()).unwrap()
}

fn total_area(grid: &Grid, levels: &[f64]) -> f64 {
    isobands(grid, levels)
        .iter()
        .flat_map(|b| b.polygons.iter())
        .map(|p| polygon_area(p))
        .sum()
}

#[test]
fn nice_levels_enclose_the_data() {
    let levels = nice_levels(0.13, 9.7, 7);
    assert!(levels.len() >= 2 && levels.len() <= 8, "{levels:?}");
    assert!(levels[0] <= 0.13);
    assert!(*levels.last().unwrap() >= 9.7);
    assert!(levels.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(nice_levels(3.0, 3.0, 7), vec![3.0, 4.0]);
}

#[test]
fn flat_grid_fills_a_single_band() {
    let grid = Grid::from_rows(vec![vec![2.0, 2.0], vec![2.0, 2.0]]).unwrap();
    let bands = isobands(&grid, &[0.0, 2.0, 4.0]);
    // 2.0 belongs to the upper band because bands are [lo, hi)
    assert!(bands[0].polygons.is_empty());
    let area: f64 = bands[1].polygons.iter().map(|p| polygon_area(p)).sum();
    assert!((area - 1.0).abs() < 1e-12);
}

#[test]
fn gradient_cell_splits_by_level() {
    // value equals the x coordinate: the 0.5 level cuts the cell in half
    let grid = Grid::from_rows(vec![vec![0.0, 1.0], vec![0.0, 1.0]]).unwrap();
    let bands = isobands(&grid, &[0.0, 0.5, 1.0]);
    for band in &bands {
        let area: f64 = band.polygons.iter().map(|p| polygon_area(p)).sum();
        assert!((area - 0.5).abs() < 1e-12, "band {:?} area {area}", (band.lo, band.hi));
    }
}

#[test]
fn layout_uses_index_mesh_and_one_colour_per_band() {
    let chart = ContourChart::new(ramp(3, 5), axes());
    let layout = chart.layout(&RenderOptions::contour()).expect("layout");
    assert_eq!(layout.mesh_x, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(layout.mesh_y, vec![0.0, 1.0, 2.0]);
    assert_eq!(layout.colors.len(), layout.bands.len());
    assert_eq!(layout.bands.len() + 1, layout.levels.len());
    assert_eq!(layout.colors.first(), Some(&Colormap::Viridis.sample(0.0)));
    assert_eq!(layout.colors.last(), Some(&Colormap::Viridis.sample(1.0)));
    // row 0 sits at the bottom of the plot
    assert!(layout.y.to_px(0.0) > layout.y.to_px(2.0));
    assert!(layout.colorbar.left > layout.plot.right);
}

#[test]
fn explicit_levels_are_validated() {
    let chart = ContourChart::new(ramp(3, 3), axes()).with_levels(Levels::Explicit(vec![1.0, 1.0, 2.0]));
    assert!(matches!(chart.validate(), Err(ChartError::Shape { .. })));

    let chart = ContourChart::new(ramp(3, 3), axes()).with_levels(Levels::Explicit(vec![0.0, 4.0, 8.0]));
    assert_eq!(chart.levels(), vec![0.0, 4.0, 8.0]);
    chart.validate().expect("increasing levels are fine");
}

#[test]
fn too_small_grid_and_log_axes_are_rejected() {
    let row = Grid::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    assert!(matches!(ContourChart::new(row, axes()).validate(), Err(ChartError::Shape { .. })));

    let log_axes = AxisConfig::new("c", Axis::new("Column Index").log(), Axis::new("Row Index"));
    let chart = ContourChart::new(ramp(2, 2), log_axes);
    assert!(matches!(chart.validate(), Err(ChartError::Domain { axis: AxisId::X, .. })));
}

#[test]
fn render_fills_plot_with_colormap() {
    let chart = ContourChart::new(ramp(20, 30), axes()).with_colormap(Colormap::Viridis);
    let mut opts = RenderOptions::contour();
    opts.draw_labels = false;
    let img = chart.render_to_rgba8(&opts).expect("render");
    assert_eq!((img.width(), img.height()), (800, 600));

    let layout = chart.layout(&opts).expect("layout");
    let (cx, cy) = (layout.plot.center_x() as u32, layout.plot.center_y() as u32);
    let px = img.get_pixel(cx, cy).0;
    assert_ne!(&px[..3], &[255, 255, 255], "plot centre should be filled");

    let out = std::path::PathBuf::from("target/test_out/contour_ramp.png");
    chart.render_to_png(&opts, &out).expect("png");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

proptest! {
    #[test]
    fn band_areas_cover_the_mesh(
        rows in 2usize..7,
        cols in 2usize..7,
        seed in proptest::collection::vec(-50.0f64..50.0, 36),
    ) {
        let values: Vec<Vec<f64>> = (0..rows)
            .map(|r| (0..cols).map(|c| seed[r * 6 + c]).collect())
            .collect();
        let grid = Grid::from_rows(values).unwrap();
        let (lo, hi) = grid.extent();
        let levels = nice_levels(lo, hi, 7);
        let expected = ((rows - 1) * (cols - 1)) as f64;
        let area = total_area(&grid, &levels);
        prop_assert!((area - expected).abs() < 1e-6 * expected.max(1.0), "area {} vs {}", area, expected);
    }
}

#[test]
fn fixed_axis_limits_are_rejected() {
    let limited = AxisConfig::new("c", Axis::new("Column Index"), Axis::new("Row Index").with_limits(0.0, 1.0));
    match ContourChart::new(ramp(3, 3), limited).validate() {
        Err(ChartError::Shape { subject, .. }) => assert!(subject.contains("y axis"), "{subject}"),
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn grid_flag_draws_dashed_lines_over_bands() {
    // flat values: one band colour everywhere unless grid lines are drawn
    let flat = Grid::from_rows(vec![vec![5.0; 9]; 7]).unwrap();
    let mut opts = RenderOptions::contour();
    opts.draw_labels = false;

    let count_grid_pixels = |chart: &ContourChart| {
        let layout = chart.layout(&opts).expect("layout");
        let img = chart.render_to_rgba8(&opts).expect("render");
        let fill = img.get_pixel(layout.plot.center_x() as u32 + 3, layout.plot.center_y() as u32 + 3).0;
        let (l, r) = (layout.plot.left as u32 + 4, layout.plot.right as u32 - 4);
        let (t, b) = (layout.plot.top as u32 + 4, layout.plot.bottom as u32 - 4);
        (l..r)
            .flat_map(|x| (t..b).map(move |y| (x, y)))
            .filter(|&(x, y)| {
                let px = img.get_pixel(x, y).0;
                // tolerate anti-aliasing seams between same-coloured cells
                (0..3).map(|i| (px[i] as i32 - fill[i] as i32).abs()).sum::<i32>() > 40
            })
            .count()
    };

    let plain = ContourChart::new(flat.clone(), axes().without_grid());
    let gridded = ContourChart::new(flat, axes());
    assert_eq!(count_grid_pixels(&plain), 0);
    assert!(count_grid_pixels(&gridded) > 0);
}

#[test]
fn plasma_colormap_colours_the_bands() {
    let chart = ContourChart::new(ramp(4, 4), axes()).with_colormap(Colormap::Plasma);
    let layout = chart.layout(&RenderOptions::contour()).expect("layout");
    assert_eq!(chart.colormap(), Colormap::Plasma);
    assert_eq!(layout.colors.first(), Some(&Colormap::Plasma.sample(0.0)));
    assert_ne!(layout.colors.first(), Some(&Colormap::Viridis.sample(0.0)));
}
