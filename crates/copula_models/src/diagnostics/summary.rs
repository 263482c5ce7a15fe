//! Distribution summaries for reporting sampled marginals.

use copula_core::math::stats::{self, Histogram};
use copula_core::types::{CopulaError, Result};
use serde::Serialize;

/// Number of equal-width histogram bins in a summary.
pub const HISTOGRAM_BINS: usize = 30;

/// Percentile markers reported with each summary.
pub const PERCENTILE_MARKERS: [f64; 3] = [5.0, 50.0, 95.0];

/// Descriptive statistics of one output vector.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DistributionSummary {
    /// Number of observations
    pub count: usize,
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation (n - 1); NaN for a single observation
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// 5th percentile
    pub p5: f64,
    /// Median
    pub p50: f64,
    /// 95th percentile
    pub p95: f64,
    /// Histogram over [min, max]
    pub histogram: Histogram,
}

/// Summarises `values` with moments, percentile markers and a histogram.
///
/// # Errors
///
/// `CopulaError::Shape` if `values` is empty or contains no finite value.
///
/// # Examples
/// ```
/// use copula_models::diagnostics::summarise;
///
/// let summary = summarise(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(summary.p50, 3.0);
/// assert_eq!(summary.histogram.total(), 5);
/// ```
pub fn summarise(values: &[f64]) -> Result<DistributionSummary> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let empty = || CopulaError::shape("cannot summarise an empty vector");
    let [p5, p50, p95] = PERCENTILE_MARKERS;
    let percentile = |q| stats::percentile_sorted(&sorted, q).ok_or_else(empty);

    Ok(DistributionSummary {
        count: values.len(),
        mean: stats::mean(values).ok_or_else(empty)?,
        std_dev: stats::std_dev(values).unwrap_or(f64::NAN),
        min: *sorted.first().ok_or_else(empty)?,
        max: *sorted.last().ok_or_else(empty)?,
        p5: percentile(p5)?,
        p50: percentile(p50)?,
        p95: percentile(p95)?,
        histogram: Histogram::new(values, HISTOGRAM_BINS).ok_or_else(|| {
            CopulaError::shape("cannot build a histogram without finite values")
        })?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_of_ramp() {
        let values: Vec<f64> = (0..=100).map(f64::from).collect();
        let s = summarise(&values).unwrap();
        assert_eq!(s.count, 101);
        assert_relative_eq!(s.mean, 50.0, epsilon = 1e-12);
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 100.0);
        assert_relative_eq!(s.p5, 5.0, epsilon = 1e-12);
        assert_relative_eq!(s.p50, 50.0, epsilon = 1e-12);
        assert_relative_eq!(s.p95, 95.0, epsilon = 1e-12);
        assert_eq!(s.histogram.counts.len(), HISTOGRAM_BINS);
        assert_eq!(s.histogram.total(), 101);
    }

    #[test]
    fn test_summary_unsorted_input() {
        let s = summarise(&[0.3, -0.1, 0.2]).unwrap();
        assert_eq!(s.min, -0.1);
        assert_eq!(s.max, 0.3);
        assert_relative_eq!(s.p50, 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_summary_single_value() {
        let s = summarise(&[0.25]).unwrap();
        assert!(s.std_dev.is_nan());
        assert_eq!(s.p5, 0.25);
        assert_eq!(s.histogram.total(), 1);
    }

    #[test]
    fn test_summary_empty() {
        assert!(matches!(summarise(&[]), Err(CopulaError::Shape(_))));
    }

    #[test]
    fn test_summary_serialises() {
        let s = summarise(&[1.0, 2.0]).unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["histogram"]["counts"].as_array().unwrap().len(), 30);
    }
}
