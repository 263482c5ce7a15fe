//! Covariance matrix validation and Cholesky decomposition.
//!
//! ## Mathematical Background
//!
//! Given `d` independent standard normal random variables `Z = [Z1, ..., Zd]`,
//! correlated normals `X = [X1, ..., Xd]` are obtained with
//!
//! ```text
//! X = L * Z
//! ```
//!
//! where `L` is the lower triangular Cholesky factor of the target matrix `M`:
//! ```text
//! M = L * L^T
//! ```
//!
//! The decomposition doubles as the positive-definiteness check: it succeeds
//! exactly when every pivot is strictly positive.
//!
//! ## Usage
//!
//! ```
//! use copula_models::correlation::decompose;
//!
//! let l = decompose(&[[1.0, 0.5], [0.5, 1.0]]).unwrap();
//! let x = l.transform(&[1.0, 0.0]);
//! assert_eq!(x, vec![1.0, 0.5]);
//! ```

mod cholesky;
mod matrix;

pub use cholesky::CholeskyFactor;
pub use matrix::{CovarianceMatrix, SYMMETRY_TOLERANCE};

use copula_core::types::Result;

/// Validates a matrix given as rows and returns its Cholesky factor.
///
/// # Errors
///
/// - `CopulaError::Shape` if the rows do not form a non-empty square matrix
/// - `CopulaError::Symmetry` if `M[i][j]` and `M[j][i]` differ by more than
///   [`SYMMETRY_TOLERANCE`]
/// - `CopulaError::NotPositiveDefinite` if a pivot is not strictly positive
pub fn decompose<R: AsRef<[f64]>>(rows: &[R]) -> Result<CholeskyFactor> {
    CovarianceMatrix::from_rows(rows)?.cholesky()
}
