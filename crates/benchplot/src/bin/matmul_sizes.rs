// File: crates/benchplot/src/bin/matmul_sizes.rs
// Summary: Matrix multiplication timings across matrix sizes (log-log).

use anyhow::Result;
use benchplot::{data, run_line_program};
use benchplot_core::telemetry;

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    // optional: output PNG path
    run_line_program(data::MATMUL_SIZES, std::env::args().nth(1))
}
