//! Sliding-window trend classification

use serde::Serialize;
use std::fmt;

/// Net direction of consecutive window-mean comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts behind a trend decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendSummary {
    pub trend: Trend,
    pub increasing: usize,
    pub decreasing: usize,
    pub unchanged: usize,
}

/// `prefix[0] = 0`, `prefix[i + 1] = prefix[i] + values[i]`.
pub fn prefix_sums(values: &[f64]) -> Vec<f64> {
    let mut prefix = Vec::with_capacity(values.len() + 1);
    prefix.push(0.0);
    let mut acc = 0.0;
    for &v in values {
        acc += v;
        prefix.push(acc);
    }
    prefix
}

/// Classify the direction of `values` using windows of `window` elements.
///
/// Each window mean is compared with the mean of the window one step
/// earlier, not with the first window. Ties change neither counter. With
/// fewer than `window` values (or a zero window) nothing is compared and the
/// result is [`Trend::Stable`].
pub fn classify_trend(values: &[f64], window: usize) -> TrendSummary {
    let mut summary = TrendSummary {
        trend: Trend::Stable,
        increasing: 0,
        decreasing: 0,
        unchanged: 0,
    };
    let n = values.len();
    if window == 0 || n < window {
        return summary;
    }

    let prefix = prefix_sums(values);
    let w = window as f64;
    let window_mean = |start: usize| (prefix[start + window] - prefix[start]) / w;

    let mut previous = window_mean(0);
    for start in 1..=n - window {
        let current = window_mean(start);
        if current > previous {
            summary.increasing += 1;
        } else if current < previous {
            summary.decreasing += 1;
        } else {
            summary.unchanged += 1;
        }
        previous = current;
    }

    summary.trend = match summary.increasing.cmp(&summary.decreasing) {
        std::cmp::Ordering::Greater => Trend::Increasing,
        std::cmp::Ordering::Less => Trend::Decreasing,
        std::cmp::Ordering::Equal => Trend::Stable,
    };
    summary
}
