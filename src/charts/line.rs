//! Smoothed line-chart geometry in a 100x100 percentage plot space with a
//! top-left origin. Consecutive points are joined by cubic Bézier segments
//! whose control points sit one third of the horizontal span from each
//! endpoint, at that endpoint's own y. This is the dashboard's cosmetic
//! smoothing, not a true interpolating spline; the final segment is a
//! straight line.

fn plot_points(values: &[f64], max_value: f64, index_base: usize, n: usize) -> Vec<(f64, f64)> {
    let denom = if n > 1 { (n - 1) as f64 } else { 1.0 };
    let max = if max_value > 0.0 { max_value } else { 1.0 };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = ((index_base + i) as f64 / denom) * 100.0;
            let y = 100.0 - (v / max) * 100.0;
            (x, y)
        })
        .collect()
}

fn smooth_path(points: &[(f64, f64)]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut path = format!("M {},{}", first.0, first.1);

    for (i, curr) in rest.iter().enumerate() {
        let prev = points[i];
        match points.get(i + 2) {
            Some(next) => {
                let cp1x = prev.0 + (curr.0 - prev.0) / 3.0;
                let cp2x = curr.0 - (next.0 - curr.0) / 3.0;
                path.push_str(&format!(
                    " C {},{} {},{} {},{}",
                    cp1x, prev.1, cp2x, curr.1, curr.0, curr.1
                ));
            }
            None => {
                path.push_str(&format!(" L {},{}", curr.0, curr.1));
            }
        }
    }

    path
}

/// Full smoothed path over the whole series. A single-point series produces
/// a degenerate `M` command at x = 0; an empty series produces an empty path.
pub fn line_path(values: &[f64], max_value: f64) -> String {
    smooth_path(&plot_points(values, max_value, 0, values.len()))
}

/// Path over the prefix `[0, end_index]` of the series, on the same global
/// coordinate base as [`line_path`]. Drawn solid for the elapsed part of a
/// period.
pub fn solid_prefix_path(values: &[f64], max_value: f64, end_index: usize) -> String {
    let n = values.len();
    if n == 0 {
        return String::new();
    }
    let end = end_index.min(n - 1);
    smooth_path(&plot_points(&values[..=end], max_value, 0, n))
}

/// Path over the suffix `[start_index, n)` of the series, sharing the global
/// index base so it lines up with [`solid_prefix_path`]. Drawn dashed for
/// the projected part of a period.
pub fn dashed_suffix_path(values: &[f64], max_value: f64, start_index: usize) -> String {
    let n = values.len();
    if start_index >= n {
        return String::new();
    }
    smooth_path(&plot_points(&values[start_index..], max_value, start_index, n))
}
