// File: crates/benchplot-core/src/grid.rs
// Summary: Rectangular numeric grid and its comma-separated text loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::ticks::linspace;

/// Row-major R x C matrix of finite values. Contract: `values.len() == rows * cols`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Build from nested rows; every row must be as long as the first and
    /// every value finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(ChartError::shape("grid", "needs at least one row and one column"));
        }
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ChartError::shape(
                    "grid",
                    format!("row {} has {} values, expected {}", i + 1, row.len(), cols),
                ));
            }
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::Parse {
                    source_name: "grid rows".to_string(),
                    line: i as u64 + 1,
                    reason: format!("value {} in column {} is not finite", row[c], c + 1),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self { rows: rows.len(), cols, values })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn shape(&self) -> (usize, usize) { (self.rows, self.cols) }
    pub fn values(&self) -> &[f64] { &self.values }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.values[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        (row < self.rows).then(|| &self.values[row * self.cols..(row + 1) * self.cols])
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Smallest and largest value.
    pub fn extent(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Coordinate axes of the mesh: column indices `0..C-1` and row indices `0..R-1`.
    pub fn mesh_axes(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = if self.cols == 1 { vec![0.0] } else { linspace(0.0, (self.cols - 1) as f64, self.cols) };
        let ys = if self.rows == 1 { vec![0.0] } else { linspace(0.0, (self.rows - 1) as f64, self.rows) };
        (xs, ys)
    }
}

/// Load a comma-separated grid file: one row per line, no header.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ChartError::io(path, e))?;
    let grid = read_grid(file, &path.display().to_string()).map_err(|e| match e {
        // the reader only knows it failed mid-stream; attach the file path
        ChartError::Io { source, .. } => ChartError::io(path, source),
        other => other,
    })?;
    debug!(path = %path.display(), rows = grid.rows, cols = grid.cols, "loaded grid");
    Ok(grid)
}

/// Parse grid text from any reader. `source_name` appears in parse errors.
pub fn read_grid<R: Read>(reader: R, source_name: &str) -> Result<Grid> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let parse_err = |line: u64, reason: String| ChartError::Parse {
        source_name: source_name.to_string(),
        line,
        reason,
    };

    let mut cols: Option<usize> = None;
    let mut rows = 0usize;
    let mut values = Vec::new();

    for (i, rec) in rdr.records().enumerate() {
        let rec = match rec {
            Ok(rec) => rec,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
                return Err(match e.into_kind() {
                    csv::ErrorKind::Io(io) => ChartError::io(source_name, io),
                    other => parse_err(line, format!("{other:?}")),
                });
            }
        };
        let line = rec.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
        // whitespace-only lines trim down to a single empty field
        if rec.iter().all(str::is_empty) {
            continue;
        }
        let expected = *cols.get_or_insert(rec.len());
        if rec.len() != expected {
            return Err(parse_err(
                line,
                format!("row {} has {} fields, expected {}", rows + 1, rec.len(), expected),
            ));
        }
        for (c, field) in rec.iter().enumerate() {
            let v: f64 = field
                .parse()
                .map_err(|_| parse_err(line, format!("field {} is not a number: '{}'", c + 1, field)))?;
            if !v.is_finite() {
                return Err(parse_err(line, format!("field {} is not finite: '{}'", c + 1, field)));
            }
            values.push(v);
        }
        rows += 1;
    }

    let cols = match cols {
        Some(c) if rows > 0 => c,
        _ => return Err(parse_err(0, "no rows".to_string())),
    };
    Ok(Grid { rows, cols, values })
}
