use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::{ANALYSIS, RegimeSettings};
use crate::domain::RegimeLabel;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::utils::maths_utils::share_pct;

/// Maps one day's stress value to a regime label.
///
/// Implementations must be pure: the same stress value always yields the same label.
pub trait RegimePolicy: Send + Sync {
    fn classify(&self, stress: f64) -> AnalyticsResult<RegimeLabel>;

    /// A unique identifier for this policy (reported alongside results).
    fn signature(&self) -> &'static str;
}

/// Fixed-breakpoint labeler: `[0, volatile_from)` Stable, `[volatile_from, crisis_from)`
/// Volatile, `[crisis_from, 100]` Crisis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRegimePolicy {
    pub thresholds: RegimeSettings,
}

impl Default for ThresholdRegimePolicy {
    fn default() -> Self {
        Self {
            thresholds: ANALYSIS.regime,
        }
    }
}

impl RegimePolicy for ThresholdRegimePolicy {
    fn classify(&self, stress: f64) -> AnalyticsResult<RegimeLabel> {
        // NaN fails the range check as well.
        if !(0.0..=100.0).contains(&stress) {
            return Err(AnalyticsError::StressOutOfRange(stress));
        }

        let label = if stress < self.thresholds.volatile_from {
            RegimeLabel::Stable
        } else if stress < self.thresholds.crisis_from {
            RegimeLabel::Volatile
        } else {
            RegimeLabel::Crisis
        };
        Ok(label)
    }

    fn signature(&self) -> &'static str {
        "fixed-threshold"
    }
}

/// Classify one stress value with the default threshold policy.
pub fn classify_regime(stress: f64) -> AnalyticsResult<RegimeLabel> {
    ThresholdRegimePolicy::default().classify(stress)
}

/// Label every day of a stress series. Fails as a whole on the first out-of-range value.
pub fn detect_regimes(
    stress: &[f64],
    policy: &dyn RegimePolicy,
) -> AnalyticsResult<Vec<RegimeLabel>> {
    stress.iter().map(|&s| policy.classify(s)).collect()
}

/// Day count and share of the period for one regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeShare {
    pub regime: RegimeLabel,
    pub days: usize,
    pub share_pct: f64,
}

/// Regime breakdown shown on the regime detection page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeCounts {
    /// One entry per label, in severity order.
    pub shares: Vec<RegimeShare>,
    pub total_days: usize,
    /// Label of the last day, `None` for an empty input.
    pub current: Option<RegimeLabel>,
}

impl RegimeCounts {
    pub fn from_labels(labels: &[RegimeLabel]) -> Self {
        let total_days = labels.len();
        let shares = RegimeLabel::iter()
            .map(|regime| {
                let days = labels.iter().filter(|&&l| l == regime).count();
                RegimeShare {
                    regime,
                    days,
                    share_pct: share_pct(days, total_days),
                }
            })
            .collect();

        Self {
            shares,
            total_days,
            current: labels.last().copied(),
        }
    }

    pub fn days_in(&self, regime: RegimeLabel) -> usize {
        self.shares
            .iter()
            .find(|s| s.regime == regime)
            .map_or(0, |s| s.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_partition_without_gaps() {
        assert_eq!(classify_regime(0.0), Ok(RegimeLabel::Stable));
        assert_eq!(classify_regime(29.999), Ok(RegimeLabel::Stable));
        assert_eq!(classify_regime(30.0), Ok(RegimeLabel::Volatile));
        assert_eq!(classify_regime(59.999), Ok(RegimeLabel::Volatile));
        assert_eq!(classify_regime(60.0), Ok(RegimeLabel::Crisis));
        assert_eq!(classify_regime(100.0), Ok(RegimeLabel::Crisis));
    }

    #[test]
    fn sweep_is_monotone() {
        let mut previous = RegimeLabel::Stable;
        for step in 0..=1000 {
            let stress = step as f64 / 10.0;
            let label = classify_regime(stress).unwrap();
            assert!(label.timeline_value() >= previous.timeline_value());
            previous = label;
        }
        assert_eq!(previous, RegimeLabel::Crisis);
    }

    #[test]
    fn out_of_domain_values_fail() {
        assert_eq!(
            classify_regime(-0.5),
            Err(AnalyticsError::StressOutOfRange(-0.5))
        );
        assert!(classify_regime(100.01).is_err());
        assert!(classify_regime(f64::NAN).is_err());
        assert!(detect_regimes(&[10.0, 120.0], &ThresholdRegimePolicy::default()).is_err());
    }

    #[test]
    fn custom_thresholds_are_honoured() {
        let policy = ThresholdRegimePolicy {
            thresholds: RegimeSettings {
                volatile_from: 10.0,
                crisis_from: 20.0,
            },
        };
        let labels = detect_regimes(&[5.0, 15.0, 25.0], &policy).unwrap();
        assert_eq!(
            labels,
            vec![
                RegimeLabel::Stable,
                RegimeLabel::Volatile,
                RegimeLabel::Crisis
            ]
        );
        assert_eq!(policy.signature(), "fixed-threshold");
    }

    #[test]
    fn counts_cover_every_day() {
        let labels = [
            RegimeLabel::Stable,
            RegimeLabel::Stable,
            RegimeLabel::Crisis,
            RegimeLabel::Volatile,
        ];
        let counts = RegimeCounts::from_labels(&labels);
        assert_eq!(counts.total_days, 4);
        assert_eq!(counts.days_in(RegimeLabel::Stable), 2);
        assert_eq!(counts.days_in(RegimeLabel::Crisis), 1);
        assert_eq!(counts.shares[0].share_pct, 50.0);
        assert_eq!(counts.current, Some(RegimeLabel::Volatile));
        let total: usize = counts.shares.iter().map(|s| s.days).sum();
        assert_eq!(total, labels.len());
    }
}
