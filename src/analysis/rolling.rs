//! Trailing fixed-window statistics.
//!
//! Every function here returns a [`WindowedSeries`] of the same length as its input.
//! Position `i` is computed from `data[i + 1 - window..=i]`; the first `window - 1`
//! positions are warm-up placeholders. A window longer than the input is not an
//! error: the output is simply all placeholders.

use crate::domain::{WindowedSeries, validate_prices};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::utils::maths_utils::get_min_max;

/// Trailing arithmetic mean.
pub fn rolling_mean(data: &[f64], window: usize) -> AnalyticsResult<WindowedSeries> {
    rolling_apply(data, window, window_mean)
}

/// Trailing population standard deviation (divides by `window`, not `window - 1`).
pub fn rolling_std_dev(data: &[f64], window: usize) -> AnalyticsResult<WindowedSeries> {
    rolling_apply(data, window, |slice| {
        // A flat window is exactly 0; the two-pass mean can leave residue otherwise.
        if get_min_max(slice).is_some_and(|(min, max)| min == max) {
            return 0.0;
        }
        let mean = window_mean(slice);
        let variance =
            slice.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / slice.len() as f64;
        // Guard against -0.0 / rounding noise so the output is never negative.
        variance.max(0.0).sqrt()
    })
}

/// Simple moving average of prices. Same mechanics as [`rolling_mean`], but the
/// input must be a valid price series.
pub fn simple_moving_average(prices: &[f64], window: usize) -> AnalyticsResult<WindowedSeries> {
    validate_prices(prices)?;
    rolling_mean(prices, window)
}

fn window_mean(slice: &[f64]) -> f64 {
    slice.iter().sum::<f64>() / slice.len() as f64
}

fn rolling_apply<F>(data: &[f64], window: usize, stat: F) -> AnalyticsResult<WindowedSeries>
where
    F: Fn(&[f64]) -> f64,
{
    if window == 0 {
        return Err(AnalyticsError::InvalidWindow);
    }

    if window > data.len() {
        log::debug!(
            "Window {} exceeds series length {}; output is all warm-up",
            window,
            data.len()
        );
        return Ok(WindowedSeries::new(window, vec![None; data.len()]));
    }

    let mut values = Vec::with_capacity(data.len());
    values.resize(window - 1, None);
    values.extend(data.windows(window).map(|slice| Some(stat(slice))));

    Ok(WindowedSeries::new(window, values))
}
