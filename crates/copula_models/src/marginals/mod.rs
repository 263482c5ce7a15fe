//! Marginal distribution models.
//!
//! Both marginals are exposed through the [`QuantileTransform`] capability:
//! a quantile function `ppf(q)` mapping a uniform value in (0, 1) to the
//! target distribution. The variants implement it independently, with no
//! shared hierarchy.
//!
//! - [`GrowthModel`]: ln(1 + g) ~ N(mu, sigma²), clipped to [-0.9, 1.0]
//! - [`MarginModel`]: Beta(alpha, beta) matched to a mean and variance
//!
//! ## Usage
//!
//! ```
//! use copula_core::types::SampleBatch;
//! use copula_models::marginals::{apply_marginals, make_growth_model, make_margin_model};
//!
//! let growth = make_growth_model(0.04, 0.08).unwrap();
//! let margin = make_margin_model(0.30, 0.015).unwrap();
//! let uniforms = SampleBatch::from_rows(&[[0.5, 0.5], [0.9, 0.1]]).unwrap();
//!
//! let (g, m) = apply_marginals(&uniforms, &growth, &margin).unwrap();
//! assert_eq!(g.len(), 2);
//! assert!(m.iter().all(|&v| v > 0.0 && v < 1.0));
//! ```

mod growth;
mod margin;

pub use growth::{make_growth_model, GrowthModel, GROWTH_CLIP_MAX, GROWTH_CLIP_MIN};
pub use margin::{make_margin_model, MarginModel};

use copula_core::types::{CopulaError, Result, SampleBatch};
use tracing::debug;

/// A distribution usable as a marginal: anything with a quantile function.
pub trait QuantileTransform {
    /// Quantile function (inverse CDF) at probability `q`.
    ///
    /// Implementations return NaN for `q` outside [0, 1].
    fn ppf(&self, q: f64) -> f64;

    /// Applies [`QuantileTransform::ppf`] elementwise.
    fn apply(&self, uniforms: &[f64]) -> Vec<f64> {
        uniforms.iter().map(|&q| self.ppf(q)).collect()
    }
}

/// Maps a uniform-marginal batch to `(growth, margin)` values.
///
/// Column 0 goes through `growth`, column 1 through `margin`; extra columns
/// are ignored.
///
/// # Errors
///
/// `CopulaError::Shape` if the batch has fewer than two columns.
pub fn apply_marginals<G, M>(
    uniforms: &SampleBatch,
    growth: &G,
    margin: &M,
) -> Result<(Vec<f64>, Vec<f64>)>
where
    G: QuantileTransform + ?Sized,
    M: QuantileTransform + ?Sized,
{
    if uniforms.n_cols() < 2 {
        return Err(CopulaError::shape(format!(
            "uniform batch must have at least 2 columns, got {}",
            uniforms.n_cols()
        )));
    }

    debug!(n = uniforms.n_rows(), "Applying marginals");
    let growth_values = uniforms.column(0).map(|q| growth.ppf(q)).collect();
    let margin_values = uniforms.column(1).map(|q| margin.ppf(q)).collect();
    Ok((growth_values, margin_values))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl QuantileTransform for Identity {
        fn ppf(&self, q: f64) -> f64 {
            q
        }
    }

    #[test]
    fn test_apply_default_is_elementwise() {
        assert_eq!(Identity.apply(&[0.1, 0.7]), vec![0.1, 0.7]);
    }

    #[test]
    fn test_apply_marginals_single_column() {
        let batch = SampleBatch::from_rows(&[[0.2], [0.4]]).unwrap();
        let result = apply_marginals(&batch, &Identity, &Identity);
        assert!(matches!(result, Err(CopulaError::Shape(_))));
    }

    #[test]
    fn test_apply_marginals_routes_columns() {
        let batch = SampleBatch::from_rows(&[[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]).unwrap();
        let (first, second) = apply_marginals(&batch, &Identity, &Identity).unwrap();
        assert_eq!(first, vec![0.1, 0.4]);
        assert_eq!(second, vec![0.2, 0.5]);
    }

    #[test]
    fn test_apply_marginals_trait_objects() {
        let growth = make_growth_model(0.0, 0.1).unwrap();
        let margin = make_margin_model(0.5, 0.01).unwrap();
        let g: &dyn QuantileTransform = &growth;
        let m: &dyn QuantileTransform = &margin;
        let batch = SampleBatch::from_rows(&[[0.5, 0.5]]).unwrap();
        let (gv, mv) = apply_marginals(&batch, g, m).unwrap();
        assert!(gv[0].abs() < 1e-9);
        assert!((mv[0] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_apply_marginals_empty_batch() {
        let growth = make_growth_model(0.0, 0.1).unwrap();
        let margin = make_margin_model(0.5, 0.01).unwrap();
        let batch = SampleBatch::zeros(0, 2).unwrap();
        let (gv, mv) = apply_marginals(&batch, &growth, &margin).unwrap();
        assert!(gv.is_empty() && mv.is_empty());
    }
}
