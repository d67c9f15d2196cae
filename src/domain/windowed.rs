use serde::{Deserialize, Serialize};

/// Output of a fixed-window computation, index-aligned with its input.
///
/// Positions `0..window-1` have insufficient history and hold `None` ("no signal yet").
/// A computed value of exactly `0.0` is a real reading and is kept as `Some(0.0)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WindowedSeries {
    window: usize,
    values: Vec<Option<f64>>,
}

impl WindowedSeries {
    pub(crate) fn new(window: usize, values: Vec<Option<f64>>) -> Self {
        Self { window, values }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Value at `idx`, `None` for a warm-up position or an out-of-range index.
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied().flatten()
    }

    pub fn is_warm_up(&self, idx: usize) -> bool {
        idx < self.warm_up_len()
    }

    /// Number of leading placeholders: `window - 1` (capped at the length) for a
    /// freshly computed series, fewer for a [`tail`](Self::tail) view.
    pub fn warm_up_len(&self) -> usize {
        self.values.iter().take_while(|v| v.is_none()).count()
    }

    /// Iterates computed values only, skipping the warm-up prefix.
    pub fn defined(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }

    /// The trailing `count` positions (all of them if `count` exceeds the length).
    pub fn tail(&self, count: usize) -> WindowedSeries {
        let start = self.values.len().saturating_sub(count);
        WindowedSeries::new(self.window, self.values[start..].to_vec())
    }

    /// Legacy dashboard encoding with placeholders rendered as `0.0`.
    /// Presentation only: never feed the result back into the pipeline.
    pub fn to_zero_filled(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(0.0)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_up_prefix_is_distinct_from_real_zero() {
        let series = WindowedSeries::new(3, vec![None, None, Some(0.0), Some(2.5)]);
        assert_eq!(series.warm_up_len(), 2);
        assert!(series.is_warm_up(1));
        assert!(!series.is_warm_up(2));
        assert_eq!(series.get(1), None);
        assert_eq!(series.get(2), Some(0.0));
        assert_eq!(series.defined().collect::<Vec<_>>(), vec![0.0, 2.5]);
        assert_eq!(series.defined_count(), 2);
        assert_eq!(series.last(), Some(2.5));
        assert_eq!(series.to_zero_filled(), vec![0.0, 0.0, 0.0, 2.5]);
    }

    #[test]
    fn window_longer_than_series_is_all_warm_up() {
        let series = WindowedSeries::new(10, vec![None; 4]);
        assert_eq!(series.warm_up_len(), 4);
        assert_eq!(series.defined_count(), 0);
        assert_eq!(series.last(), None);
        assert_eq!(series.get(99), None);
    }

    #[test]
    fn tail_keeps_only_trailing_values() {
        let series = WindowedSeries::new(2, vec![None, Some(1.0), Some(2.0), Some(3.0)]);
        let tail = series.tail(2);
        assert_eq!(tail.values(), &[Some(2.0), Some(3.0)]);
        assert_eq!(tail.warm_up_len(), 0);
        assert_eq!(tail.defined_count(), 2);
        assert_eq!(tail.window(), 2);
        assert_eq!(series.tail(10), series);
    }
}
