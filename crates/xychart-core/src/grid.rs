// File: crates/xychart-core/src/grid.rs
// Summary: Tick/grid value generation on 1-2-5 steps.

const FLAT_SPAN: f64 = 1e-7;

/// "Nice" ticks covering `[min, max]` with roughly `desired` steps.
/// Reversed ranges give descending ticks; non-finite values are dropped; `desired == 0` gives none.
pub fn tick_values(min: f64, max: f64, desired: usize) -> Vec<f64> {
    if desired == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if (max - min).abs() < FLAT_SPAN {
        return vec![min];
    }
    let (start, end) = if min > max { (max, min) } else { (min, max) };
    let step = nice_step((end - start) / desired as f64);
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let first = (start / step).ceil() * step;
    let last = (end / step).floor() * step;
    let count = ((last - first) / step + 1e-9).floor() as i64 + 1;
    let mut out: Vec<f64> = (0..count.max(0))
        .map(|i| first + i as f64 * step)
        .map(|v| if step >= 1e-5 { round_to(v, 5) } else { v })
        .filter(|v| v.is_finite())
        .collect();
    if min > max {
        out.reverse();
    }
    out
}

/// Rounds `raw` up to 1, 2, 5 or 10 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let exp = raw.log10().floor();
    let magnitude = 10f64.powi(exp as i32);
    let ratio = raw / magnitude;
    let nice = if ratio > 5.0 {
        10.0
    } else if ratio > 2.0 {
        5.0
    } else if ratio > 1.0 {
        2.0
    } else {
        1.0
    };
    nice * magnitude
}

fn round_to(v: f64, digits: i32) -> f64 {
    let f = 10f64.powi(digits);
    let r = (v * f).round() / f;
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_round_up_to_nice_values() {
        assert_eq!(nice_step(0.3), 0.5);
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(2.2), 5.0);
        assert_eq!(nice_step(70.0), 100.0);
    }

    #[test]
    fn ticks_cover_range() {
        assert_eq!(tick_values(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(tick_values(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert_eq!(tick_values(0.0, 1.0, 4), vec![0.0, 0.5, 1.0]);
        assert_eq!(tick_values(0.1, 0.95, 4), vec![0.5]);
        assert!(tick_values(0.0, 1.0, 0).is_empty());
        assert!(tick_values(f64::NAN, 1.0, 5).is_empty());
        assert_eq!(tick_values(3.0, 3.0, 5), vec![3.0]);
    }
}
