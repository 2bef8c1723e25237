// File: crates/benchplot/src/bin/matmul_contour.rs
// Summary: Filled contour of a matrix-multiplication result grid read from CSV.

use std::path::PathBuf;

use anyhow::Result;
use benchplot::{run_contour_program, DEFAULT_GRID_PATH};
use benchplot_core::telemetry;

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    // args: [grid.csv] [output.png]
    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_GRID_PATH));
    run_contour_program(&input, args.next())
}
