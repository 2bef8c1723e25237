// File: crates/benchplot-core/src/ticks.rs
// Summary: Tick/level layout helpers: linspace, "nice" steps, linear and log10 tick placement, labels.

use crate::axis::ScaleKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Minor ticks get grid lines but, normally, no label.
    pub major: bool,
    pub label: Option<String>,
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `raw` up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Ticks for either scale kind over `[min, max]`.
pub fn ticks(kind: ScaleKind, min: f64, max: f64, target: usize) -> Vec<Tick> {
    match kind {
        ScaleKind::Linear => linear_ticks(min, max, target),
        ScaleKind::Log10 => log_ticks(min, max),
    }
}

pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<Tick> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step((hi - lo) / target.max(1) as f64);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let value = k as f64 * step;
            Tick { value, major: true, label: Some(format_value(value, step)) }
        })
        .collect()
}

/// Decade ticks are major; 2..9 times each decade are minor. When fewer than
/// two decades are visible the minor ticks are labelled as well.
pub fn log_ticks(min: f64, max: f64) -> Vec<Tick> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !(lo > 0.0 && hi.is_finite()) {
        return Vec::new();
    }
    let slack = 1e-9;
    let k_lo = lo.log10().floor() as i32;
    let k_hi = hi.log10().ceil() as i32;
    let mut out = Vec::new();
    for k in k_lo..=k_hi {
        let decade = 10f64.powi(k);
        for m in 1..=9 {
            let value = m as f64 * decade;
            if value < lo * (1.0 - slack) || value > hi * (1.0 + slack) {
                continue;
            }
            let major = m == 1;
            out.push(Tick { value, major, label: major.then(|| format_decade(k)) });
        }
    }
    if out.iter().filter(|t| t.major).count() < 2 {
        for t in out.iter_mut().filter(|t| !t.major) {
            let k = t.value.log10().floor() as i32;
            t.label = Some(format_value(t.value, 10f64.powi(k)));
        }
    }
    out
}

/// Format `value` with as many decimals as `step` needs.
pub fn format_value(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        let exp = step.log10().floor();
        let base = (-exp).max(0.0) as usize;
        // 2.5-style steps below ten need one more digit than their magnitude suggests
        let norm = step / 10f64.powf(exp);
        if (norm - 2.5).abs() < 1e-9 && exp <= 0.0 { base + 1 } else { base }
    } else {
        0
    };
    let v = if value.abs() < step.abs() * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, v)
}

fn format_decade(k: i32) -> String {
    if (-3..=4).contains(&k) {
        format!("{:.*}", (-k).max(0) as usize, 10f64.powi(k))
    } else {
        format!("1e{k}")
    }
}
