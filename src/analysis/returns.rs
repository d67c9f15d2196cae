use itertools::Itertools;

use crate::domain::validate_prices;
use crate::error::AnalyticsResult;

/// Percentage day-over-day returns, index-aligned with `prices`.
///
/// `returns[0]` is defined as `0.0` (no prior day); for `i >= 1` the value is
/// `(p[i] - p[i-1]) / p[i-1] * 100`.
pub fn build_returns(prices: &[f64]) -> AnalyticsResult<Vec<f64>> {
    validate_prices(prices)?;

    let mut returns = Vec::with_capacity(prices.len());
    returns.push(0.0);
    returns.extend(
        prices
            .iter()
            .tuple_windows()
            .map(|(prev, curr)| (curr - prev) / prev * 100.0),
    );
    Ok(returns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn returns_match_price_moves() {
        let returns = build_returns(&[100.0, 110.0, 99.0, 99.0]).unwrap();
        let expected = [0.0, 10.0, -10.0, 0.0];
        assert_eq!(returns.len(), 4);
        for (got, want) in returns.iter().zip(expected) {
            assert!(approx_eq(*got, want), "{got} != {want}");
        }
    }

    #[test]
    fn single_price_yields_single_zero() {
        assert_eq!(build_returns(&[42.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn invalid_prices_fail_as_a_whole() {
        assert_eq!(build_returns(&[]), Err(AnalyticsError::EmptySeries));
        assert_eq!(
            build_returns(&[10.0, -1.0, 10.0]),
            Err(AnalyticsError::NonPositivePrice {
                index: 1,
                price: -1.0
            })
        );
    }
}
