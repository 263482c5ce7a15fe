//! Revenue growth marginal: shifted lognormal clipped to a plausible range.

use copula_core::math::distributions::{norm_cdf, norm_ppf};
use copula_core::types::{CopulaError, Result};
use tracing::debug;

use super::QuantileTransform;

/// Lower clip bound: growth cannot lose more than 90%.
pub const GROWTH_CLIP_MIN: f64 = -0.9;

/// Upper clip bound: growth is capped at +100%.
pub const GROWTH_CLIP_MAX: f64 = 1.0;

/// Growth distribution with ln(1 + g) ~ N(mu_log1p, sigma_log1p²).
///
/// Quantiles are clipped to [`GROWTH_CLIP_MIN`, `GROWTH_CLIP_MAX`], which
/// puts point masses on both bounds for extreme draws. The clipped law's
/// mean and variance therefore differ slightly from the lognormal ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthModel {
    mu_log1p: f64,
    sigma_log1p: f64,
}

impl GrowthModel {
    /// Creates a growth model.
    ///
    /// # Errors
    ///
    /// `CopulaError::Parameter` if `sigma_log1p <= 0` or either parameter is
    /// not finite.
    pub fn new(mu_log1p: f64, sigma_log1p: f64) -> Result<Self> {
        if !mu_log1p.is_finite() {
            return Err(CopulaError::parameter(
                "mu_log1p",
                format!("must be finite, got {}", mu_log1p),
            ));
        }
        if !(sigma_log1p > 0.0 && sigma_log1p.is_finite()) {
            return Err(CopulaError::parameter(
                "sigma_log1p",
                format!("must be positive and finite, got {}", sigma_log1p),
            ));
        }

        debug!(mu_log1p, sigma_log1p, "Created growth model");
        Ok(Self {
            mu_log1p,
            sigma_log1p,
        })
    }

    /// Location of ln(1 + g).
    #[inline]
    pub fn mu_log1p(&self) -> f64 {
        self.mu_log1p
    }

    /// Scale of ln(1 + g).
    #[inline]
    pub fn sigma_log1p(&self) -> f64 {
        self.sigma_log1p
    }

    /// CDF of the clipped law.
    ///
    /// Zero below the lower bound, one at and above the upper bound.
    pub fn cdf(&self, g: f64) -> f64 {
        if g.is_nan() {
            return f64::NAN;
        }
        if g < GROWTH_CLIP_MIN {
            return 0.0;
        }
        if g >= GROWTH_CLIP_MAX {
            return 1.0;
        }
        norm_cdf((g.ln_1p() - self.mu_log1p) / self.sigma_log1p)
    }
}

impl QuantileTransform for GrowthModel {
    /// exp(mu + sigma * Φ⁻¹(q)) - 1, clipped to [-0.9, 1.0].
    fn ppf(&self, q: f64) -> f64 {
        let z = norm_ppf(q);
        let g = (self.mu_log1p + self.sigma_log1p * z).exp_m1();
        g.clamp(GROWTH_CLIP_MIN, GROWTH_CLIP_MAX)
    }
}

/// Creates a growth model such that ln(1 + g) ~ N(mu_log1p, sigma_log1p²).
///
/// # Errors
///
/// See [`GrowthModel::new`].
pub fn make_growth_model(mu_log1p: f64, sigma_log1p: f64) -> Result<GrowthModel> {
    GrowthModel::new(mu_log1p, sigma_log1p)
}
