use argminmax::ArgMinMax;

/// Largest value in `vec`, or `None` for an empty slice.
pub fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

/// Smallest value in `vec`, or `None` for an empty slice.
pub fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    let (min_index, max_index) = vec.argminmax();
    Some((vec[min_index], vec[max_index]))
}

/// `count` as a percentage of `total` (0 when `total` is 0).
pub fn share_pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Round to a fixed number of decimals, for display only.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
