//! Descriptive statistics over `f64` slices.
//!
//! All functions return `None` when the statistic is undefined for the
//! input (empty slice, too few observations).

use serde::Serialize;

/// Arithmetic mean.
///
/// # Examples
/// ```
/// use copula_core::math::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample variance with Bessel's correction (n - 1 denominator).
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    Some(ss / (data.len() - 1) as f64)
}

/// Sample standard deviation (n - 1 denominator).
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Percentile `q` (in [0, 100]) of already sorted data, interpolating
/// linearly between the two closest order statistics.
///
/// # Panics
///
/// Debug builds assert that `sorted` is non-decreasing.
pub fn percentile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&q) {
        return None;
    }
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Percentile `q` (in [0, 100]) of unsorted data.
///
/// # Examples
/// ```
/// use copula_core::math::stats::percentile;
///
/// let data = [4.0, 1.0, 3.0, 2.0, 5.0];
/// assert_eq!(percentile(&data, 50.0), Some(3.0));
/// assert_eq!(percentile(&data, 25.0), Some(2.0));
/// ```
pub fn percentile(data: &[f64], q: f64) -> Option<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, q)
}

/// Equal-width histogram.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    /// Bin edges, `counts.len() + 1` values in increasing order.
    pub edges: Vec<f64>,
    /// Number of observations per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins `data` into `bins` equal-width buckets spanning [min, max].
    ///
    /// Each bin is half-open `[lo, hi)` except the last, which also includes
    /// its right edge. Constant data is centred in a unit-width range.
    /// Non-finite values are skipped.
    ///
    /// # Examples
    /// ```
    /// use copula_core::math::stats::Histogram;
    ///
    /// let hist = Histogram::new(&[0.0, 0.1, 0.5, 1.0], 2).unwrap();
    /// assert_eq!(hist.counts, vec![2, 2]);
    /// assert_eq!(hist.edges, vec![0.0, 0.5, 1.0]);
    /// ```
    pub fn new(data: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
        let mut lo = finite.iter().copied().reduce(f64::min)?;
        let mut hi = finite.iter().copied().reduce(f64::max)?;
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0_usize; bins];
        for v in finite {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self { edges, counts })
    }

    /// Total number of binned observations.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
