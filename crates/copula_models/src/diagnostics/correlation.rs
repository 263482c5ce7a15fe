//! Linear and rank correlation statistics.

use std::collections::BTreeMap;

use copula_core::types::{CopulaError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Correlation statistics between two output vectors.
///
/// Each value lies in [-1, 1], or is NaN when either input is constant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrelationDiagnostics {
    /// Pearson linear correlation
    pub pearson: f64,
    /// Spearman rank correlation (average ranks for ties)
    pub spearman: f64,
    /// Kendall's tau-b (tie-corrected)
    pub kendall: f64,
}

impl CorrelationDiagnostics {
    /// Statistic name to value, ordered by name.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("kendall", self.kendall),
            ("pearson", self.pearson),
            ("spearman", self.spearman),
        ])
    }
}

/// Computes Pearson, Spearman and Kendall tau-b between `x` and `y`.
///
/// # Errors
///
/// `CopulaError::Shape` if the lengths differ or there are fewer than two
/// observations.
///
/// # Examples
/// ```
/// use copula_models::diagnostics::correlation_diagnostics;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [10.0, 20.0, 30.0, 45.0];
/// let d = correlation_diagnostics(&x, &y).unwrap();
/// assert_eq!(d.spearman, 1.0);
/// assert_eq!(d.kendall, 1.0);
/// ```
pub fn correlation_diagnostics(x: &[f64], y: &[f64]) -> Result<CorrelationDiagnostics> {
    check_pair(x, y)?;

    let diagnostics = CorrelationDiagnostics {
        pearson: pearson_unchecked(x, y),
        spearman: pearson_unchecked(&average_ranks(x), &average_ranks(y)),
        kendall: kendall_unchecked(x, y),
    };

    info!(
        n = x.len(),
        pearson = diagnostics.pearson,
        spearman = diagnostics.spearman,
        kendall = diagnostics.kendall,
        "Correlation diagnostics computed"
    );
    Ok(diagnostics)
}

/// Pearson product-moment correlation.
///
/// # Errors
///
/// `CopulaError::Shape` if the lengths differ or there are fewer than two
/// observations.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    check_pair(x, y)?;
    Ok(pearson_unchecked(x, y))
}

/// Spearman rank correlation: Pearson on average ranks.
///
/// # Errors
///
/// `CopulaError::Shape` if the lengths differ or there are fewer than two
/// observations.
pub fn spearman(x: &[f64], y: &[f64]) -> Result<f64> {
    check_pair(x, y)?;
    Ok(pearson_unchecked(&average_ranks(x), &average_ranks(y)))
}

/// Kendall's tau-b with tie correction, O(n log n).
///
/// ```text
/// tau_b = (n_c - n_d) / sqrt((n0 - n1) * (n0 - n2))
/// ```
///
/// # Errors
///
/// `CopulaError::Shape` if the lengths differ or there are fewer than two
/// observations.
pub fn kendall_tau_b(x: &[f64], y: &[f64]) -> Result<f64> {
    check_pair(x, y)?;
    Ok(kendall_unchecked(x, y))
}

fn check_pair(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(CopulaError::shape(format!(
            "inputs must have equal length, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(CopulaError::shape(format!(
            "at least 2 observations required, got {}",
            x.len()
        )));
    }
    Ok(())
}

fn is_constant(data: &[f64]) -> bool {
    data.iter().all(|&v| v == data[0])
}

fn pearson_unchecked(x: &[f64], y: &[f64]) -> f64 {
    if is_constant(x) || is_constant(y) {
        return f64::NAN;
    }

    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    // Deviations are scaled into [-1, 1] so the sums of squares cannot overflow
    let largest_deviation =
        |data: &[f64], m: f64| data.iter().map(|v| (v - m).abs()).fold(0.0, f64::max);
    let scale_x = largest_deviation(x, mx);
    let scale_y = largest_deviation(y, my);

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = (xi - mx) / scale_x;
        let dy = (yi - my) / scale_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

/// 1-based ranks; tied values share the mean of their positions.
fn average_ranks(data: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| data[a].total_cmp(&data[b]));

    let mut ranks = vec![0.0; data.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && data[order[end]] == data[order[start]] {
            end += 1;
        }
        // Positions start..end hold ranks start+1..=end
        let rank = (start + end + 1) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        start = end;
    }
    ranks
}

/// Sum of t(t-1)/2 over runs of equal elements of a sorted sequence.
fn tied_pairs<T, F>(sorted: &[T], same: F) -> u64
where
    F: Fn(&T, &T) -> bool,
{
    let mut total = 0_u64;
    let mut run = 1_u64;
    for w in sorted.windows(2) {
        if same(&w[0], &w[1]) {
            run += 1;
        } else {
            total += run * (run - 1) / 2;
            run = 1;
        }
    }
    total + run * (run - 1) / 2
}

fn kendall_unchecked(x: &[f64], y: &[f64]) -> f64 {
    if is_constant(x) || is_constant(y) {
        return f64::NAN;
    }

    let n = x.len() as u64;
    // Adding +0.0 turns -0.0 into 0.0 so the sort agrees with `==` ties
    let mut pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi + 0.0, yi + 0.0))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));

    let x_ties = tied_pairs(&pairs, |a, b| a.0 == b.0);
    let joint_ties = tied_pairs(&pairs, |a, b| a.0 == b.0 && a.1 == b.1);

    // Discordant pairs are the strict inversions of y in x order
    let mut ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
    let mut buffer = vec![0.0; ys.len()];
    let discordant = count_inversions(&mut ys, &mut buffer);
    let y_ties = tied_pairs(&ys, |a, b| a == b);

    let total = n * (n - 1) / 2;
    let numerator = total as f64 - x_ties as f64 - y_ties as f64 + joint_ties as f64
        - 2.0 * discordant as f64;
    let denominator = ((total - x_ties) as f64 * (total - y_ties) as f64).sqrt();
    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Sorts `data` ascending, returning the number of pairs i < j with
/// data[i] > data[j].
fn count_inversions(data: &mut [f64], buffer: &mut [f64]) -> u64 {
    let n = data.len();
    if n < 2 {
        return 0;
    }
    let mid = n / 2;
    let mut count = {
        let (left, right) = data.split_at_mut(mid);
        let (left_buf, right_buf) = buffer.split_at_mut(mid);
        count_inversions(left, left_buf) + count_inversions(right, right_buf)
    };

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < n {
        if data[i] <= data[j] {
            buffer[k] = data[i];
            i += 1;
        } else {
            buffer[k] = data[j];
            count += (mid - i) as u64;
            j += 1;
        }
        k += 1;
    }
    buffer[k..k + mid - i].copy_from_slice(&data[i..mid]);
    k += mid - i;
    buffer[k..n].copy_from_slice(&data[j..n]);
    data.copy_from_slice(&buffer[..n]);

    count
}
