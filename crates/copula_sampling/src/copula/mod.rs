//! Gaussian copula sampling.
//!
//! ## Algorithm
//!
//! 1. Validate the matrix M and factor it, M = L * L^T
//! 2. Draw an n x d batch Z of independent standard normals
//! 3. Correlate row by row, X = Z * L^T
//! 4. Map to uniforms elementwise, U = Φ(X), kept inside (0, 1)
//!
//! The Pearson correlation of Φ⁻¹(U) converges to the off-diagonal entries
//! of M with error O(1/√n).

mod config;
mod gaussian;

pub use config::{CopulaConfig, CopulaConfigBuilder, MAX_SAMPLES};
pub use gaussian::GaussianCopula;

use copula_core::types::{CopulaError, Result, SampleBatch};
use tracing::info;

use crate::rng::CopulaRng;

/// Draws `n` rows of correlated uniforms from the Gaussian copula with
/// correlation/covariance `rows`.
///
/// Identical `(n, rows, Some(seed))` always give bit-identical batches.
/// Without a seed the generator is seeded from OS entropy.
///
/// # Errors
///
/// - `CopulaError::Shape` if `n == 0`, `n * d` overflows `usize` or the
///   matrix is not square
/// - `CopulaError::Symmetry` / `CopulaError::NotPositiveDefinite` from
///   validation, unmodified
pub fn sample_uniform_copula<R: AsRef<[f64]>>(
    n: usize,
    rows: &[R],
    seed: Option<u64>,
) -> Result<SampleBatch> {
    let copula = GaussianCopula::from_rows(rows)?;
    if n == 0 {
        return Err(CopulaError::shape("sample count must be at least 1"));
    }

    info!(n, d = copula.dim(), seed = ?seed, "Sampling Gaussian copula");
    let mut rng = CopulaRng::from_optional_seed(seed);
    copula.sample_uniform(n, &mut rng)
}
