use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Ordered daily closing prices for one index, oldest first.
///
/// A `PriceSeries` can only be built through its validating constructors, so every
/// downstream stage may assume a non-empty series of finite, strictly positive prices.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PriceSeries {
    name: String,
    prices: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dates: Option<Vec<NaiveDate>>,
}

impl PriceSeries {
    pub fn new(name: impl Into<String>, prices: Vec<f64>) -> AnalyticsResult<Self> {
        validate_prices(&prices)?;
        Ok(Self {
            name: name.into(),
            prices,
            dates: None,
        })
    }

    /// Like [`PriceSeries::new`] but with one trading date per price.
    pub fn with_dates(
        name: impl Into<String>,
        prices: Vec<f64>,
        dates: Vec<NaiveDate>,
    ) -> AnalyticsResult<Self> {
        validate_prices(&prices)?;
        if dates.len() != prices.len() {
            return Err(AnalyticsError::InvalidDates(format!(
                "{} dates for {} prices",
                dates.len(),
                prices.len()
            )));
        }
        if let Some(pos) = dates.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(AnalyticsError::InvalidDates(format!(
                "{} does not follow {}",
                dates[pos + 1],
                dates[pos]
            )));
        }
        Ok(Self {
            name: name.into(),
            prices,
            dates: Some(dates),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    pub fn date_at(&self, idx: usize) -> Option<NaiveDate> {
        self.dates.as_ref().and_then(|dates| dates.get(idx).copied())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always false for a validated series; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn first_price(&self) -> f64 {
        self.prices[0]
    }

    pub fn last_price(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }
}

/// Rejects empty input and any price that is not finite and strictly positive.
pub fn validate_prices(prices: &[f64]) -> AnalyticsResult<()> {
    if prices.is_empty() {
        return Err(AnalyticsError::EmptySeries);
    }
    if let Some((index, &price)) = prices
        .iter()
        .enumerate()
        .find(|&(_, &p)| !p.is_finite() || p <= 0.0)
    {
        return Err(AnalyticsError::NonPositivePrice { index, price });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, d).unwrap()
    }

    #[test]
    fn rejects_empty_and_non_positive_prices() {
        assert_eq!(
            PriceSeries::new("X", vec![]),
            Err(AnalyticsError::EmptySeries)
        );
        assert_eq!(
            PriceSeries::new("X", vec![100.0, 0.0, 101.0]),
            Err(AnalyticsError::NonPositivePrice {
                index: 1,
                price: 0.0
            })
        );
        assert!(PriceSeries::new("X", vec![100.0, f64::NAN]).is_err());
        assert!(PriceSeries::new("X", vec![100.0, -3.0]).is_err());
    }

    #[test]
    fn dates_must_align_and_increase() {
        let ok = PriceSeries::with_dates("X", vec![1.0, 2.0], vec![day(3), day(4)]).unwrap();
        assert_eq!(ok.date_at(1), Some(day(4)));
        assert_eq!(ok.date_at(2), None);

        let short = PriceSeries::with_dates("X", vec![1.0, 2.0], vec![day(3)]);
        assert!(matches!(short, Err(AnalyticsError::InvalidDates(_))));

        let unsorted = PriceSeries::with_dates("X", vec![1.0, 2.0], vec![day(4), day(4)]);
        assert!(matches!(unsorted, Err(AnalyticsError::InvalidDates(_))));
    }

    #[test]
    fn accessors_expose_the_validated_prices() {
        let series = PriceSeries::new("SENSEX", vec![58000.0, 58100.0, 57900.0]).unwrap();
        assert_eq!(series.name(), "SENSEX");
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.first_price(), 58000.0);
        assert_eq!(series.last_price(), 57900.0);
        assert!(series.dates().is_none());
    }
}
