//! Core types shared by every layer of the copula engine.
//!
//! - [`error`]: `CopulaError` taxonomy and `Result` alias
//! - [`batch`]: `SampleBatch`, the n×d row-major sample container

pub mod batch;
pub mod error;

pub use batch::SampleBatch;
pub use error::{CopulaError, Result};
