//! # copula_sampling: Gaussian Copula Sampling Engine
//!
//! ## Layer 3 (Engine) Role
//!
//! copula_sampling draws correlated samples on top of the validated
//! structures of `copula_models`:
//! - [`rng`]: seedable random number generator wrapper (`CopulaRng`)
//! - [`copula`]: Gaussian copula sampler, its configuration builder and the
//!   one-shot [`copula::sample_uniform_copula`] entry point
//!
//! ## Pipeline
//!
//! ```text
//! matrix --decompose--> L --(Z * L^T)--> X --Φ--> U in (0, 1)^d
//! ```
//!
//! ## Usage Examples
//!
//! ```rust
//! use copula_sampling::copula::sample_uniform_copula;
//!
//! let rows = [[1.0, 0.4], [0.4, 1.0]];
//! let batch = sample_uniform_copula(1_000, &rows, Some(7)).unwrap();
//! assert_eq!(batch.n_rows(), 1_000);
//! assert!(batch.as_slice().iter().all(|&u| u > 0.0 && u < 1.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod copula;
pub mod rng;

pub use copula::{sample_uniform_copula, CopulaConfig, CopulaConfigBuilder, GaussianCopula};
pub use rng::CopulaRng;
