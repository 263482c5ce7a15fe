//! # Copula Models (L2: Business Logic)
//!
//! Validation of correlation structures, marginal distribution models and
//! correlation diagnostics.
//!
//! This crate provides:
//! - [`correlation`]: covariance matrix validation and Cholesky decomposition
//! - [`marginals`]: growth (clipped lognormal) and margin (beta) quantile
//!   transforms behind the [`marginals::QuantileTransform`] capability
//! - [`diagnostics`]: Pearson, Spearman and Kendall statistics plus
//!   distribution summaries for reporting
//!
//! ## Design Principles
//!
//! - **Validate at construction**: invalid matrices and parameters are
//!   rejected before any sampling happens
//! - **Plain numeric interfaces**: inputs and outputs are slices, `Vec<f64>`
//!   and `SampleBatch`; no file formats or rendering concerns
//! - **Logging via `tracing`**: the subscriber is chosen by the binary

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod correlation;
pub mod diagnostics;
pub mod marginals;

pub use correlation::{decompose, CholeskyFactor, CovarianceMatrix};
pub use diagnostics::{correlation_diagnostics, summarise, CorrelationDiagnostics, DistributionSummary};
pub use marginals::{
    apply_marginals, make_growth_model, make_margin_model, GrowthModel, MarginModel,
    QuantileTransform,
};
