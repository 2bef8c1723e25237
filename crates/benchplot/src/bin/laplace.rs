// File: crates/benchplot/src/bin/laplace.rs
// Summary: Laplace solver timings across thread counts (log y).

use anyhow::Result;
use benchplot::{data, run_line_program};
use benchplot_core::telemetry;

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    // optional: output PNG path
    run_line_program(data::LAPLACE, std::env::args().nth(1))
}
