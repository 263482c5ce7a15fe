//! Square covariance/correlation matrix with structural validation.

use copula_core::types::{CopulaError, Result};
use tracing::debug;

use super::cholesky::CholeskyFactor;

/// Absolute tolerance for the symmetry check.
pub const SYMMETRY_TOLERANCE: f64 = 1e-10;

/// Square matrix of `f64` in row-major order.
///
/// Construction only checks the shape. Symmetry and positive definiteness
/// are established by [`CovarianceMatrix::cholesky`], so a `CovarianceMatrix`
/// that decomposes successfully is a valid copula input.
#[derive(Clone, Debug, PartialEq)]
pub struct CovarianceMatrix {
    /// Matrix elements in row-major order
    data: Vec<f64>,
    /// Matrix dimension (d x d)
    dim: usize,
}

impl CovarianceMatrix {
    /// Creates a matrix from rows.
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape` ("matrix must be square") if there are no rows or
    /// any row length differs from the number of rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 || rows.iter().any(|r| r.as_ref().len() != dim) {
            let widths: Vec<usize> = rows.iter().map(|r| r.as_ref().len()).collect();
            return Err(CopulaError::shape(format!(
                "matrix must be square: {} rows with lengths {:?}",
                dim, widths
            )));
        }

        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self { data, dim })
    }

    /// Creates a matrix from a flat row-major slice of `dim * dim` elements.
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape` if `dim == 0` or the element count is wrong.
    pub fn from_row_major(data: &[f64], dim: usize) -> Result<Self> {
        if dim == 0 || data.len() != dim * dim {
            return Err(CopulaError::shape(format!(
                "matrix must be square: expected {} elements for dimension {}, got {}",
                dim * dim,
                dim,
                data.len()
            )));
        }
        Ok(Self {
            data: data.to_vec(),
            dim,
        })
    }

    /// Bivariate correlation matrix `[[1, rho], [rho, 1]]`.
    pub fn bivariate(rho: f64) -> Self {
        Self {
            data: vec![1.0, rho, rho, 1.0],
            dim: 2,
        }
    }

    /// Identity matrix (no correlation).
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        Self { data, dim }
    }

    /// Matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dim + j]
    }

    /// Rows as owned vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks_exact(self.dim.max(1)).map(<[f64]>::to_vec).collect()
    }

    /// Checks symmetry within [`SYMMETRY_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// `CopulaError::Symmetry` naming the first offending upper-triangle entry.
    pub fn check_symmetric(&self) -> Result<()> {
        for i in 0..self.dim {
            for j in (i + 1)..self.dim {
                let upper = self.get(i, j);
                let lower = self.get(j, i);
                let diff = (upper - lower).abs();
                if diff.is_nan() || diff > SYMMETRY_TOLERANCE {
                    return Err(CopulaError::Symmetry { i, j, upper, lower });
                }
            }
        }
        Ok(())
    }

    /// Computes the Cholesky decomposition (lower triangular L with M = L * L^T).
    ///
    /// # Errors
    ///
    /// - `CopulaError::Symmetry` if the matrix is not symmetric
    /// - `CopulaError::NotPositiveDefinite` if a pivot is not strictly positive
    pub fn cholesky(&self) -> Result<CholeskyFactor> {
        debug!(dim = self.dim, "Validating covariance matrix");
        self.check_symmetric()?;

        let n = self.dim;
        let mut lower = vec![0.0; n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = 0.0;
                for k in 0..j {
                    sum += lower[i * n + k] * lower[j * n + k];
                }

                if i == j {
                    let pivot = self.get(i, i) - sum;
                    if !(pivot > 0.0 && pivot.is_finite()) {
                        debug!(index = i, pivot, "Cholesky pivot is not positive");
                        return Err(CopulaError::NotPositiveDefinite { index: i, pivot });
                    }
                    lower[i * n + i] = pivot.sqrt();
                } else {
                    lower[i * n + j] = (self.get(i, j) - sum) / lower[j * n + j];
                }
            }
        }

        debug!(dim = n, "Cholesky factor computed successfully");
        Ok(CholeskyFactor::from_lower(lower, n))
    }
}
