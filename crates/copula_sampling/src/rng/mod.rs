//! # Random Number Generation
//!
//! Seedable pseudo-random number generation for copula sampling.
//!
//! - **Reproducibility**: a seeded generator always yields the same sequence
//! - **Ownership**: each sampling call owns its generator; there is no
//!   process-wide random state
//! - **Batch fills**: zero-allocation `&mut [f64]` operations
//!
//! ## Usage Example
//!
//! ```rust
//! use copula_sampling::rng::CopulaRng;
//!
//! let mut rng = CopulaRng::from_seed(12345);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! assert!(buffer.iter().all(|v| v.is_finite()));
//! ```

mod prng;

pub use prng::CopulaRng;
