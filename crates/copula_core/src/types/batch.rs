//! Row-major n×d sample container.
//!
//! A [`SampleBatch`] holds `n_rows` draws of a `n_cols`-dimensional vector in
//! a single contiguous buffer. The sampler produces uniform-marginal batches;
//! the marginal transformers consume individual columns.

use super::error::{CopulaError, Result};

/// Contiguous n×d batch of `f64` samples in row-major order.
///
/// # Examples
///
/// ```rust
/// use copula_core::types::SampleBatch;
///
/// let batch = SampleBatch::from_rows(&[[0.1, 0.2], [0.3, 0.4]]).unwrap();
/// assert_eq!(batch.n_rows(), 2);
/// assert_eq!(batch.row(1), &[0.3, 0.4]);
/// assert_eq!(batch.column(0).collect::<Vec<_>>(), vec![0.1, 0.3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBatch {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl SampleBatch {
    /// Creates a zero-filled batch.
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape` if `n_rows * n_cols` overflows `usize`.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Result<Self> {
        let len = checked_len(n_rows, n_cols)?;
        Ok(Self {
            data: vec![0.0; len],
            n_rows,
            n_cols,
        })
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape` if `data.len() != n_rows * n_cols`.
    pub fn from_row_major(data: Vec<f64>, n_rows: usize, n_cols: usize) -> Result<Self> {
        if data.len() != checked_len(n_rows, n_cols)? {
            return Err(CopulaError::shape(format!(
                "buffer of length {} cannot hold {}x{} samples",
                data.len(),
                n_rows,
                n_cols
            )));
        }
        Ok(Self {
            data,
            n_rows,
            n_cols,
        })
    }

    /// Builds a batch from rows of equal length.
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape` if the rows are ragged.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(checked_len(rows.len(), n_cols)?);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(CopulaError::shape(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            n_rows: rows.len(),
            n_cols,
        })
    }

    /// Number of draws.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Dimension of each draw.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `true` when the batch holds no draws.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Element at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(j < self.n_cols, "column {} out of bounds", j);
        self.data[i * self.n_cols + j]
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Mutable row `i`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.n_cols.max(1)).take(self.n_rows)
    }

    /// Iterator over column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= n_cols`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(j < self.n_cols, "column {} out of bounds", j);
        self.data.iter().skip(j).step_by(self.n_cols).copied()
    }

    /// Underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the batch and returns the row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

fn checked_len(n_rows: usize, n_cols: usize) -> Result<usize> {
    n_rows.checked_mul(n_cols).ok_or_else(|| {
        CopulaError::shape(format!(
            "{}x{} samples exceed the addressable buffer size",
            n_rows, n_cols
        ))
    })
}
