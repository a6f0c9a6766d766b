//! Statistics Calculator Module
//! Descriptive statistics for the values of one series on one date.

use statrs::statistics::Statistics;
use std::cmp::Ordering;

/// Statistics for a single (date, series) group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    /// `None` when the group holds no values.
    pub mode: Option<f64>,
}

impl Default for SeriesStats {
    fn default() -> Self {
        Self {
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            mode: None,
        }
    }
}

pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    ///
    /// `std` is the sample standard deviation and is NaN below two values.
    pub fn compute_descriptive_stats(values: &[f64]) -> SeriesStats {
        let n = values.len();
        if n == 0 {
            return SeriesStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        SeriesStats {
            mean: values.mean(),
            median,
            std: values.std_dev(),
            mode: Self::mode_of_sorted(&sorted),
        }
    }

    /// Most frequent value; ties resolve to the smallest value.
    fn mode_of_sorted(sorted: &[f64]) -> Option<f64> {
        let mut best: Option<(f64, usize)> = None;
        let mut i = 0;
        while i < sorted.len() {
            let value = sorted[i];
            let run = sorted[i..]
                .iter()
                .take_while(|v| v.total_cmp(&value) == Ordering::Equal)
                .count();
            // Strictly greater keeps the earlier (smaller) value on ties.
            if best.map_or(true, |(_, count)| run > count) {
                best = Some((value, run));
            }
            i += run;
        }
        best.map(|(value, _)| value)
    }
}
