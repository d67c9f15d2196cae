use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::PRINT_HISTOGRAM;

/// One of the 12 fixed daily-return ranges, in display order (most negative first).
///
/// Negative-side ranges include their upper bound (`<=`), non-negative ranges exclude
/// it (`<`); the outermost ranges are unbounded.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum ReturnBucket {
    AtMostMinus5,   // r <= -5
    Minus5ToMinus4, // -5 < r <= -4
    Minus4ToMinus3, // -4 < r <= -3
    Minus3ToMinus2, // -3 < r <= -2
    Minus2ToMinus1, // -2 < r <= -1
    Minus1ToZero,   // -1 < r < 0
    ZeroTo1,        // 0 <= r < 1
    OneTo2,         // 1 <= r < 2
    TwoTo3,         // 2 <= r < 3
    ThreeTo4,       // 3 <= r < 4
    FourTo5,        // 4 <= r < 5
    AtLeast5,       // r >= 5
}

impl ReturnBucket {
    pub fn label(&self) -> &'static str {
        match self {
            ReturnBucket::AtMostMinus5 => "-5+",
            ReturnBucket::Minus5ToMinus4 => "-4 to -5",
            ReturnBucket::Minus4ToMinus3 => "-3 to -4",
            ReturnBucket::Minus3ToMinus2 => "-2 to -3",
            ReturnBucket::Minus2ToMinus1 => "-1 to -2",
            ReturnBucket::Minus1ToZero => "-1 to 0",
            ReturnBucket::ZeroTo1 => "0 to 1",
            ReturnBucket::OneTo2 => "1 to 2",
            ReturnBucket::TwoTo3 => "2 to 3",
            ReturnBucket::ThreeTo4 => "3 to 4",
            ReturnBucket::FourTo5 => "4 to 5",
            ReturnBucket::AtLeast5 => "5+",
        }
    }

    /// Bucket for a daily return in percent. NaN lands in the top bucket, as it fails
    /// every comparison.
    pub fn for_return(ret: f64) -> Self {
        if ret <= -5.0 {
            ReturnBucket::AtMostMinus5
        } else if ret <= -4.0 {
            ReturnBucket::Minus5ToMinus4
        } else if ret <= -3.0 {
            ReturnBucket::Minus4ToMinus3
        } else if ret <= -2.0 {
            ReturnBucket::Minus3ToMinus2
        } else if ret <= -1.0 {
            ReturnBucket::Minus2ToMinus1
        } else if ret < 0.0 {
            ReturnBucket::Minus1ToZero
        } else if ret < 1.0 {
            ReturnBucket::ZeroTo1
        } else if ret < 2.0 {
            ReturnBucket::OneTo2
        } else if ret < 3.0 {
            ReturnBucket::TwoTo3
        } else if ret < 4.0 {
            ReturnBucket::ThreeTo4
        } else if ret < 5.0 {
            ReturnBucket::FourTo5
        } else {
            ReturnBucket::AtLeast5
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub bucket: ReturnBucket,
    pub label: String,
    pub count: usize,
}

/// Count daily returns per fixed range. Output is always the 12 buckets in order.
pub fn bin_returns(returns: &[f64]) -> Vec<HistogramBucket> {
    let mut counts = [0usize; 12];
    for &ret in returns {
        counts[ReturnBucket::for_return(ret) as usize] += 1;
    }

    let histogram: Vec<HistogramBucket> = ReturnBucket::iter()
        .map(|bucket| HistogramBucket {
            bucket,
            label: bucket.label().to_string(),
            count: counts[bucket as usize],
        })
        .collect();

    if PRINT_HISTOGRAM {
        for entry in &histogram {
            log::info!("{:>9} :: {}", entry.label, entry.count);
        }
    }

    histogram
}
