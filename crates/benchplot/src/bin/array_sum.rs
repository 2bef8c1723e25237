// File: crates/benchplot/src/bin/array_sum.rs
// Summary: Array sum timings for Serial, OpenMP and client/server runs (log-log).

use anyhow::Result;
use benchplot::{data, run_line_program};
use benchplot_core::telemetry;

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    // optional: output PNG path
    run_line_program(data::ARRAY_SUM, std::env::args().nth(1))
}
