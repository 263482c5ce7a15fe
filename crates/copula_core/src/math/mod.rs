//! Mathematical building blocks.
//!
//! - [`distributions`]: standard normal CDF, PDF and quantile function
//! - [`special`]: log-gamma, incomplete beta and beta quantile
//! - [`stats`]: descriptive statistics over `f64` slices

pub mod distributions;
pub mod special;
pub mod stats;
