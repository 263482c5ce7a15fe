//! Error types for structured error handling.
//!
//! Every failure in the copula engine is a deterministic validation failure
//! raised at the point of violation:
//! - `Shape`: dimension or length mismatches
//! - `Symmetry`: a matrix that is not symmetric
//! - `NotPositiveDefinite`: Cholesky decomposition hit a non-positive pivot
//! - `Parameter`: invalid distribution parameters

use thiserror::Error;

/// Categorised copula engine errors.
///
/// # Examples
/// ```
/// use copula_core::types::CopulaError;
///
/// let err = CopulaError::shape("matrix must be square");
/// assert_eq!(format!("{}", err), "Shape error: matrix must be square");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CopulaError {
    /// Dimension or length mismatch.
    #[error("Shape error: {0}")]
    Shape(String),

    /// Matrix is not symmetric within tolerance.
    #[error("Symmetry error: M[{i}][{j}] = {upper} but M[{j}][{i}] = {lower}")]
    Symmetry {
        /// Row index of the offending upper-triangle entry
        i: usize,
        /// Column index of the offending upper-triangle entry
        j: usize,
        /// Value at (i, j)
        upper: f64,
        /// Value at (j, i)
        lower: f64,
    },

    /// Cholesky decomposition encountered a non-positive pivot.
    #[error("Matrix is not positive definite: pivot {index} is {pivot}")]
    NotPositiveDefinite {
        /// Diagonal index at which decomposition failed
        index: usize,
        /// Value of the failing pivot
        pivot: f64,
    },

    /// Invalid distribution parameter.
    #[error("Parameter error: {name} {reason}")]
    Parameter {
        /// Parameter name
        name: &'static str,
        /// Description of the violated constraint
        reason: String,
    },
}

impl CopulaError {
    /// Create a shape error.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Create a parameter error.
    pub fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the copula crates.
pub type Result<T> = std::result::Result<T, CopulaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_display() {
        let err = CopulaError::shape("matrix must be square");
        assert_eq!(err.to_string(), "Shape error: matrix must be square");
    }

    #[test]
    fn test_symmetry_display() {
        let err = CopulaError::Symmetry {
            i: 0,
            j: 1,
            upper: 0.5,
            lower: 0.3,
        };
        let msg = err.to_string();
        assert!(msg.contains("M[0][1] = 0.5"));
        assert!(msg.contains("M[1][0] = 0.3"));
    }

    #[test]
    fn test_not_positive_definite_display() {
        let err = CopulaError::NotPositiveDefinite {
            index: 1,
            pivot: -3.0,
        };
        assert!(err.to_string().contains("not positive definite"));
        assert!(err.to_string().contains("pivot 1"));
    }

    #[test]
    fn test_parameter_display() {
        let err = CopulaError::parameter("sigma_log1p", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Parameter error: sigma_log1p must be positive, got 0"
        );
    }
}
