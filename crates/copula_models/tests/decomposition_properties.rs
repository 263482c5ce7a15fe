//! Property tests for matrix validation and decomposition.

use copula_core::types::CopulaError;
use copula_models::correlation::{decompose, CovarianceMatrix};
use proptest::prelude::*;

/// Builds A * A^T + d * I from `d * d` entries, which is symmetric positive
/// definite for any A.
fn spd_from_entries(entries: &[f64], d: usize) -> Vec<Vec<f64>> {
    let mut rows = vec![vec![0.0; d]; d];
    for i in 0..d {
        for j in 0..d {
            let dot: f64 = (0..d).map(|k| entries[i * d + k] * entries[j * d + k]).sum();
            rows[i][j] = dot + if i == j { d as f64 } else { 0.0 };
        }
    }
    rows
}

fn spd_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1..=6usize).prop_flat_map(|d| {
        prop::collection::vec(-2.0..2.0f64, d * d).prop_map(move |e| spd_from_entries(&e, d))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// L * L^T reproduces the input within 1e-8.
    #[test]
    fn prop_reconstruction(rows in spd_matrix()) {
        let d = rows.len();
        let factor = decompose(&rows).unwrap();
        let rebuilt = factor.reconstruct();

        for i in 0..d {
            for j in 0..d {
                prop_assert!(
                    (rebuilt[i * d + j] - rows[i][j]).abs() < 1e-8,
                    "Mismatch at ({}, {}): {} vs {}",
                    i, j, rebuilt[i * d + j], rows[i][j]
                );
            }
        }
    }

    /// The factor is lower triangular with a strictly positive diagonal.
    #[test]
    fn prop_factor_structure(rows in spd_matrix()) {
        let d = rows.len();
        let factor = decompose(&rows).unwrap();
        for i in 0..d {
            prop_assert!(factor.get(i, i) > 0.0);
            for j in (i + 1)..d {
                prop_assert_eq!(factor.get(i, j), 0.0);
            }
        }
    }

    /// Every valid bivariate correlation decomposes; |rho| >= 1 does not.
    #[test]
    fn prop_bivariate_domain(rho in -1.5..1.5f64) {
        let result = CovarianceMatrix::bivariate(rho).cholesky();
        if rho.abs() < 1.0 {
            prop_assert!(result.is_ok());
        } else {
            let is_not_pd = matches!(result, Err(CopulaError::NotPositiveDefinite { index: 1, .. }));
            prop_assert!(is_not_pd);
        }
    }

    /// Perturbing one off-diagonal entry beyond tolerance breaks symmetry.
    #[test]
    fn prop_asymmetry_detected(rows in spd_matrix(), delta in 1e-6..1.0f64) {
        let d = rows.len();
        prop_assume!(d >= 2);
        let mut rows = rows;
        rows[0][d - 1] += delta;
        let is_symmetry_error = matches!(decompose(&rows), Err(CopulaError::Symmetry { i: 0, .. }));
        prop_assert!(is_symmetry_error);
    }
}

#[test]
fn test_non_symmetric_rejected() {
    let result = decompose(&[[1.0, 0.2, 0.0], [0.2, 1.0, 0.7], [0.0, 0.1, 1.0]]);
    assert!(matches!(
        result,
        Err(CopulaError::Symmetry { i: 1, j: 2, .. })
    ));
}

#[test]
fn test_indefinite_rejected() {
    let result = decompose(&[[1.0, 2.0], [2.0, 1.0]]);
    assert!(matches!(
        result,
        Err(CopulaError::NotPositiveDefinite { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = decompose(&[vec![1.0, 0.0]]).unwrap_err();
    assert!(err.to_string().contains("matrix must be square"));

    let err = decompose(&[[1.0, 2.0], [2.0, 1.0]]).unwrap_err();
    assert!(err.to_string().contains("not positive definite"));
}
