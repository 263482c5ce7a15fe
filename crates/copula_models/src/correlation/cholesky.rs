//! Lower triangular Cholesky factor.

/// Lower triangular Cholesky factor L of a covariance matrix M = L * L^T.
///
/// Only produced by a successful decomposition, so the diagonal is strictly
/// positive. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct CholeskyFactor {
    /// Lower triangular matrix elements (row-major)
    data: Vec<f64>,
    /// Matrix dimension
    dim: usize,
}

impl CholeskyFactor {
    pub(super) fn from_lower(data: Vec<f64>, dim: usize) -> Self {
        Self { data, dim }
    }

    /// Matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at (i, j).
    ///
    /// Returns zero for upper triangular elements (j > i).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if j > i {
            0.0
        } else {
            self.data[i * self.dim + j]
        }
    }

    /// Transforms independent standard normals into correlated normals,
    /// X = L * Z.
    ///
    /// # Panics
    ///
    /// Panics if `z.len() < self.dim()`.
    pub fn transform(&self, z: &[f64]) -> Vec<f64> {
        let mut x = vec![0.0; self.dim];
        self.transform_into(z, &mut x);
        x
    }

    /// Allocation-free variant of [`CholeskyFactor::transform`] writing into
    /// `out`.
    ///
    /// # Panics
    ///
    /// Panics if `z` or `out` is shorter than `self.dim()`.
    pub fn transform_into(&self, z: &[f64], out: &mut [f64]) {
        assert!(
            z.len() >= self.dim && out.len() >= self.dim,
            "Input length {} / output length {} is less than matrix dimension {}",
            z.len(),
            out.len(),
            self.dim
        );

        let n = self.dim;
        for i in 0..n {
            let row = &self.data[i * n..i * n + i + 1];
            out[i] = row.iter().zip(z).map(|(l, zj)| l * zj).sum();
        }
    }

    /// Reconstructs L * L^T, row-major.
    pub fn reconstruct(&self) -> Vec<f64> {
        let n = self.dim;
        let mut m = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                let k_max = i.min(j);
                m[i * n + j] = (0..=k_max).map(|k| self.get(i, k) * self.get(j, k)).sum();
            }
        }
        m
    }
}
