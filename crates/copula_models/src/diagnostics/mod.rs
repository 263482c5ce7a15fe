//! Correlation diagnostics and distribution summaries of sampled outputs.
//!
//! - [`correlation_diagnostics`]: Pearson, Spearman and Kendall tau-b between
//!   two equally long vectors
//! - [`summarise`]: moments, percentile markers and histogram of one vector

mod correlation;
mod summary;

pub use correlation::{
    correlation_diagnostics, kendall_tau_b, pearson, spearman, CorrelationDiagnostics,
};
pub use summary::{summarise, DistributionSummary, HISTOGRAM_BINS, PERCENTILE_MARKERS};
