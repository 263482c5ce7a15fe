//! Profit margin marginal: beta law matched to a mean and variance.

use copula_core::math::special::{beta_ppf, regularized_incomplete_beta};
use copula_core::types::{CopulaError, Result};
use tracing::debug;

use super::QuantileTransform;

/// Beta distribution on (0, 1) parameterised by its mean and variance.
///
/// Method of moments:
/// ```text
/// common = mean * (1 - mean) / variance - 1
/// alpha  = mean * common
/// beta   = (1 - mean) * common
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginModel {
    mean: f64,
    variance: f64,
    alpha: f64,
    beta: f64,
}

impl MarginModel {
    /// Creates a margin model from a target mean and variance.
    ///
    /// # Errors
    ///
    /// `CopulaError::Parameter` if `mean` is not in (0, 1), `variance <= 0`,
    /// or `variance >= mean * (1 - mean)`.
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        if !(mean > 0.0 && mean < 1.0) {
            return Err(CopulaError::parameter(
                "mean",
                format!("must be in (0, 1), got {}", mean),
            ));
        }
        if !(variance > 0.0) {
            return Err(CopulaError::parameter(
                "variance",
                format!("must be positive, got {}", variance),
            ));
        }
        let max_variance = mean * (1.0 - mean);
        if variance >= max_variance {
            return Err(CopulaError::parameter(
                "variance",
                format!(
                    "must be less than mean * (1 - mean) = {}, got {}",
                    max_variance, variance
                ),
            ));
        }

        let common = max_variance / variance - 1.0;
        let alpha = mean * common;
        let beta = (1.0 - mean) * common;

        debug!(mean, variance, alpha, beta, "Created margin model");
        Ok(Self {
            mean,
            variance,
            alpha,
            beta,
        })
    }

    /// First shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Mean of the distribution.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Variance of the distribution.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// CDF, the regularised incomplete beta function I_x(alpha, beta).
    pub fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        regularized_incomplete_beta(x, self.alpha, self.beta)
    }
}

impl QuantileTransform for MarginModel {
    fn ppf(&self, q: f64) -> f64 {
        beta_ppf(q, self.alpha, self.beta)
    }
}

/// Creates a beta margin model with the given mean and variance.
///
/// # Errors
///
/// See [`MarginModel::new`].
pub fn make_margin_model(mean: f64, variance: f64) -> Result<MarginModel> {
    MarginModel::new(mean, variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape_parameters() {
        let model = make_margin_model(0.30, 0.015).unwrap();
        // common = 0.21 / 0.015 - 1 = 13
        assert_relative_eq!(model.alpha(), 3.9, epsilon = 1e-12);
        assert_relative_eq!(model.beta(), 9.1, epsilon = 1e-12);
        assert_eq!(model.mean(), 0.30);
        assert_eq!(model.variance(), 0.015);
    }

    #[test]
    fn test_moments_match_shape() {
        let model = make_margin_model(0.2, 0.004).unwrap();
        let (a, b) = (model.alpha(), model.beta());
        assert_relative_eq!(a / (a + b), 0.2, epsilon = 1e-12);
        assert_relative_eq!(
            a * b / ((a + b).powi(2) * (a + b + 1.0)),
            0.004,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rejects_variance_too_large() {
        let result = make_margin_model(0.5, 0.26);
        assert!(matches!(
            result,
            Err(CopulaError::Parameter {
                name: "variance",
                ..
            })
        ));
        // Boundary is excluded
        assert!(make_margin_model(0.5, 0.25).is_err());
    }

    #[test]
    fn test_rejects_bad_mean() {
        for mean in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            assert!(
                matches!(
                    make_margin_model(mean, 0.01),
                    Err(CopulaError::Parameter { name: "mean", .. })
                ),
                "mean = {} should be rejected",
                mean
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_variance() {
        assert!(make_margin_model(0.3, 0.0).is_err());
        assert!(make_margin_model(0.3, -0.01).is_err());
        assert!(make_margin_model(0.3, f64::NAN).is_err());
    }

    #[test]
    fn test_ppf_limits_and_domain() {
        let model = make_margin_model(0.30, 0.015).unwrap();
        assert_eq!(model.ppf(0.0), 0.0);
        assert_eq!(model.ppf(1.0), 1.0);
        assert!(model.ppf(-0.01).is_nan());
        assert!(model.ppf(1.01).is_nan());
        assert!(model.ppf(f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_inverts_ppf() {
        let model = make_margin_model(0.30, 0.015).unwrap();
        for q in [0.001, 0.05, 0.5, 0.95, 0.999] {
            let x = model.ppf(q);
            assert!(x > 0.0 && x < 1.0);
            assert_relative_eq!(model.cdf(x), q, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_symmetric_median() {
        let model = make_margin_model(0.5, 0.01).unwrap();
        assert_relative_eq!(model.ppf(0.5), 0.5, epsilon = 1e-12);
    }
}
