use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::error::{AnalyticsError, AnalyticsResult, ensure_same_len};
use crate::utils::maths_utils::get_min_max;

/// Pearson correlation coefficient of two index-aligned series, in `[-1, 1]`.
///
/// Fails if the lengths differ, if there are fewer than two observations, if any value
/// is NaN or infinite, or if either series is constant (correlation undefined).
pub fn correlate(series_a: &[f64], series_b: &[f64]) -> AnalyticsResult<f64> {
    ensure_same_len(series_a.len(), series_b.len())?;
    if series_a.len() < 2 {
        return Err(AnalyticsError::InsufficientData {
            required: 2,
            actual: series_a.len(),
        });
    }

    ensure_finite(series_a)?;
    ensure_finite(series_b)?;
    // Constant input can leave rounding residue in the variance, so test the values.
    if is_constant(series_a) || is_constant(series_b) {
        return Err(AnalyticsError::ZeroVariance);
    }

    let var_a = series_a.population_variance();
    let var_b = series_b.population_variance();
    if var_a <= 0.0 || var_b <= 0.0 {
        return Err(AnalyticsError::ZeroVariance);
    }

    let covariance = series_a.population_covariance(series_b);
    Ok((covariance / (var_a * var_b).sqrt()).clamp(-1.0, 1.0))
}

fn ensure_finite(series: &[f64]) -> AnalyticsResult<()> {
    match series.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(AnalyticsError::NonFiniteValue {
            index,
            value: series[index],
        }),
        None => Ok(()),
    }
}

fn is_constant(series: &[f64]) -> bool {
    get_min_max(series).is_none_or(|(min, max)| min == max)
}

/// Qualitative reading of a correlation coefficient, as worded on the comparison page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
}

impl CorrelationStrength {
    pub fn from_coefficient(coefficient: f64) -> Self {
        if coefficient > 0.7 {
            CorrelationStrength::Strong
        } else if coefficient > 0.4 {
            CorrelationStrength::Moderate
        } else {
            CorrelationStrength::Weak
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn perfectly_linear_series() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let up: Vec<f64> = a.iter().map(|x| 3.0 * x + 7.0).collect();
        let down: Vec<f64> = a.iter().map(|x| -0.5 * x + 1.0).collect();
        assert!(approx_eq(correlate(&a, &up).unwrap(), 1.0));
        assert!(approx_eq(correlate(&a, &down).unwrap(), -1.0));
    }

    #[test]
    fn known_coefficient() {
        // Sample with r = 0.8 exactly: cov 1.6, var_a 2, var_b 2 (population).
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 1.0, 4.0, 3.0, 5.0];
        assert!(approx_eq(correlate(&a, &b).unwrap(), 0.8));
        assert_eq!(CorrelationStrength::from_coefficient(0.8), CorrelationStrength::Strong);
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let a = [0.4, -1.1, 2.3, 0.0, 1.8, -0.7];
        let b = [1.0, 0.2, 1.9, -0.4, 2.2, 0.1];
        let ab = correlate(&a, &b).unwrap();
        let ba = correlate(&b, &a).unwrap();
        assert!(approx_eq(ab, ba));
        assert!((-1.0..=1.0).contains(&ab));
    }

    #[test]
    fn invalid_inputs_fail() {
        assert_eq!(
            correlate(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(AnalyticsError::LengthMismatch { left: 2, right: 3 })
        );
        assert_eq!(
            correlate(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]),
            Err(AnalyticsError::ZeroVariance)
        );
        assert!(matches!(
            correlate(&[1.0], &[2.0]),
            Err(AnalyticsError::InsufficientData { .. })
        ));
    }

    #[test]
    fn constant_series_with_inexact_values_have_zero_variance() {
        for (value, days) in [(0.1, 10), (58123.45, 30), (1.15, 50), (0.3, 7)] {
            let flat = vec![value; days];
            let ramp: Vec<f64> = (0..days).map(|i| i as f64).collect();
            assert_eq!(correlate(&flat, &ramp), Err(AnalyticsError::ZeroVariance), "{value}");
            assert_eq!(correlate(&ramp, &flat), Err(AnalyticsError::ZeroVariance), "{value}");
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let ramp = [1.0, 2.0, 3.0, 4.0];
        let err = correlate(&[1.0, f64::NAN, 3.0, 4.0], &ramp).unwrap_err();
        assert!(matches!(err, AnalyticsError::NonFiniteValue { index: 1, .. }));
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidInput);
        assert!(matches!(
            correlate(&ramp, &[1.0, 2.0, 3.0, f64::INFINITY]),
            Err(AnalyticsError::NonFiniteValue { index: 3, .. })
        ));
    }

    #[test]
    fn strength_bands() {
        assert_eq!(CorrelationStrength::from_coefficient(0.76), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::from_coefficient(0.7), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::from_coefficient(0.41), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::from_coefficient(-0.9), CorrelationStrength::Weak);
    }
}
