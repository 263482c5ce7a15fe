//! # copula_core: Numerical Foundation for the Copula Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! copula_core is the bottom layer of the workspace and provides:
//! - Error taxonomy: `CopulaError` and the `Result` alias (`types::error`)
//! - Row-major sample storage: `SampleBatch` (`types::batch`)
//! - Standard normal CDF, PDF and quantile function (`math::distributions`)
//! - Log-gamma, regularised incomplete beta and beta quantile (`math::special`)
//! - Descriptive statistics: mean, standard deviation, percentiles,
//!   histograms (`math::stats`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other copula_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation of report types
//!
//! ## Usage Examples
//!
//! ```rust
//! use copula_core::math::distributions::{norm_cdf, norm_ppf};
//! use copula_core::math::special::beta_ppf;
//!
//! let p = norm_cdf(1.0_f64);
//! assert!((norm_ppf(p) - 1.0).abs() < 1e-6);
//!
//! let median = beta_ppf(0.5, 2.0, 2.0);
//! assert!((median - 0.5).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
