//! Gaussian copula sampler.

use copula_core::math::distributions::norm_cdf;
use copula_core::types::{CopulaError, Result, SampleBatch};
use copula_models::correlation::{decompose, CholeskyFactor, CovarianceMatrix};
use tracing::{debug, info};

use super::config::CopulaConfig;
use crate::rng::CopulaRng;

/// Smallest uniform value emitted.
const UNIFORM_FLOOR: f64 = f64::MIN_POSITIVE;

/// Largest uniform value emitted: the greatest `f64` below 1.
const UNIFORM_CEIL: f64 = 1.0 - f64::EPSILON / 2.0;

/// Gaussian copula over a validated correlation structure.
///
/// Holds the Cholesky factor so repeated draws skip re-validation.
///
/// # Examples
///
/// ```rust
/// use copula_models::correlation::CovarianceMatrix;
/// use copula_sampling::copula::GaussianCopula;
/// use copula_sampling::rng::CopulaRng;
///
/// let copula = GaussianCopula::new(&CovarianceMatrix::bivariate(0.3)).unwrap();
/// let mut rng = CopulaRng::from_seed(1);
/// let u = copula.sample_uniform(500, &mut rng).unwrap();
/// assert_eq!((u.n_rows(), u.n_cols()), (500, 2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianCopula {
    factor: CholeskyFactor,
}

impl GaussianCopula {
    /// Validates `matrix` and builds a copula from its Cholesky factor.
    ///
    /// # Errors
    ///
    /// `CopulaError::Symmetry` or `CopulaError::NotPositiveDefinite`.
    pub fn new(matrix: &CovarianceMatrix) -> Result<Self> {
        Ok(Self::from_factor(matrix.cholesky()?))
    }

    /// Validates a matrix given as rows, as [`decompose`] does.
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape`, `CopulaError::Symmetry` or
    /// `CopulaError::NotPositiveDefinite`.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Ok(Self::from_factor(decompose(rows)?))
    }

    /// Wraps an existing factor.
    pub fn from_factor(factor: CholeskyFactor) -> Self {
        Self { factor }
    }

    /// Number of correlated variables.
    #[inline]
    pub fn dim(&self) -> usize {
        self.factor.dim()
    }

    /// The lower triangular factor L.
    #[inline]
    pub fn factor(&self) -> &CholeskyFactor {
        &self.factor
    }

    /// Draws `n` rows of correlated standard normals, X = Z * L^T.
    ///
    /// Each row consumes `dim` normals from `rng` in order.
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape` if `n == 0` or `n * dim` overflows `usize`.
    pub fn sample_normal(&self, n: usize, rng: &mut CopulaRng) -> Result<SampleBatch> {
        if n == 0 {
            return Err(CopulaError::shape("sample count must be at least 1"));
        }

        let d = self.dim();
        let mut batch = SampleBatch::zeros(n, d)?;
        let mut z = vec![0.0; d];
        for i in 0..n {
            rng.fill_normal(&mut z);
            self.factor.transform_into(&z, batch.row_mut(i));
        }

        debug!(n, d, "Drew correlated normals");
        Ok(batch)
    }

    /// Draws `n` rows of correlated uniforms, U = Φ(X).
    ///
    /// Every entry lies in the open interval (0, 1).
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape` if `n == 0`.
    pub fn sample_uniform(&self, n: usize, rng: &mut CopulaRng) -> Result<SampleBatch> {
        let mut batch = self.sample_normal(n, rng)?;
        for value in batch.as_mut_slice() {
            *value = norm_cdf(*value).clamp(UNIFORM_FLOOR, UNIFORM_CEIL);
        }
        Ok(batch)
    }

    /// Draws uniforms as configured, with a generator owned by this call.
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape` if the configuration is invalid.
    pub fn sample(&self, config: &CopulaConfig) -> Result<SampleBatch> {
        config.validate()?;
        let mut rng = CopulaRng::from_optional_seed(config.seed());
        info!(
            n = config.n_samples(),
            d = self.dim(),
            seed = ?config.seed(),
            "Sampling Gaussian copula"
        );
        self.sample_uniform(config.n_samples(), &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_samples_rejected() {
        let copula = GaussianCopula::new(&CovarianceMatrix::identity(2)).unwrap();
        let mut rng = CopulaRng::from_seed(1);
        assert!(matches!(
            copula.sample_normal(0, &mut rng),
            Err(CopulaError::Shape(_))
        ));
    }

    #[test]
    fn test_rows_follow_factor() {
        let copula = GaussianCopula::new(&CovarianceMatrix::bivariate(0.6)).unwrap();
        let batch = copula
            .sample_normal(4, &mut CopulaRng::from_seed(5))
            .unwrap();

        // Replay the same normals by hand
        let mut rng = CopulaRng::from_seed(5);
        for row in batch.rows() {
            let z1 = rng.gen_normal();
            let z2 = rng.gen_normal();
            assert_relative_eq!(row[0], z1, epsilon = 1e-15);
            assert_relative_eq!(row[1], 0.6 * z1 + 0.8 * z2, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_uniforms_open_interval() {
        let copula = GaussianCopula::new(&CovarianceMatrix::bivariate(-0.9)).unwrap();
        let batch = copula
            .sample_uniform(20_000, &mut CopulaRng::from_seed(8))
            .unwrap();
        assert!(batch.as_slice().iter().all(|&u| u > 0.0 && u < 1.0));
    }

    #[test]
    fn test_clamp_bounds_are_interior() {
        assert!(UNIFORM_FLOOR > 0.0);
        assert!(UNIFORM_CEIL < 1.0);
        assert_eq!(norm_cdf(-40.0_f64).clamp(UNIFORM_FLOOR, UNIFORM_CEIL), UNIFORM_FLOOR);
        assert_eq!(norm_cdf(40.0_f64).clamp(UNIFORM_FLOOR, UNIFORM_CEIL), UNIFORM_CEIL);
    }

    #[test]
    fn test_sample_with_config() {
        let copula = GaussianCopula::from_rows(&[[1.0, 0.2], [0.2, 1.0]]).unwrap();
        let config = CopulaConfig::builder().n_samples(100).seed(3).build().unwrap();
        let a = copula.sample(&config).unwrap();
        let b = copula.sample(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.n_rows(), 100);
    }

    #[test]
    fn test_three_dimensional() {
        let rows = [[1.0, 0.3, 0.1], [0.3, 1.0, -0.2], [0.1, -0.2, 1.0]];
        let copula = GaussianCopula::from_rows(&rows).unwrap();
        assert_eq!(copula.dim(), 3);
        let batch = copula
            .sample_uniform(10, &mut CopulaRng::from_seed(2))
            .unwrap();
        assert_eq!(batch.n_cols(), 3);
    }
}
