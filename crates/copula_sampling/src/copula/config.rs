//! Sampling run configuration.

use copula_core::types::{CopulaError, Result};

/// Maximum number of samples in one run.
pub const MAX_SAMPLES: usize = 50_000_000;

/// Copula sampling configuration.
///
/// Use [`CopulaConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use copula_sampling::copula::CopulaConfig;
///
/// let config = CopulaConfig::builder()
///     .n_samples(100_000)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_samples(), 100_000);
/// assert_eq!(config.seed(), Some(7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopulaConfig {
    n_samples: usize,
    seed: Option<u64>,
}

impl CopulaConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> CopulaConfigBuilder {
        CopulaConfigBuilder::default()
    }

    /// Number of sample rows to draw.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `CopulaError::Shape` if `n_samples` is 0 or greater than
    /// [`MAX_SAMPLES`].
    pub fn validate(&self) -> Result<()> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(CopulaError::shape(format!(
                "sample count {} must be in [1, {}]",
                self.n_samples, MAX_SAMPLES
            )));
        }
        Ok(())
    }
}

/// Builder for [`CopulaConfig`], validated at build time.
#[derive(Clone, Debug, Default)]
pub struct CopulaConfigBuilder {
    n_samples: Option<usize>,
    seed: Option<u64>,
}

impl CopulaConfigBuilder {
    /// Sets the number of samples, in [1, 50_000_000].
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// - `CopulaError::Parameter` if `n_samples` was not set
    /// - `CopulaError::Shape` if `n_samples` is out of range
    pub fn build(self) -> Result<CopulaConfig> {
        let n_samples = self
            .n_samples
            .ok_or_else(|| CopulaError::parameter("n_samples", "must be specified"))?;

        let config = CopulaConfig {
            n_samples,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid() {
        let config = CopulaConfig::builder().n_samples(10_000).build().unwrap();
        assert_eq!(config.n_samples(), 10_000);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_maybe_seed() {
        let config = CopulaConfig::builder()
            .n_samples(10)
            .seed(1)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_missing_samples() {
        assert!(matches!(
            CopulaConfig::builder().seed(3).build(),
            Err(CopulaError::Parameter {
                name: "n_samples",
                ..
            })
        ));
    }

    #[test]
    fn test_builder_rejects_out_of_range() {
        assert!(matches!(
            CopulaConfig::builder().n_samples(0).build(),
            Err(CopulaError::Shape(_))
        ));
        assert!(CopulaConfig::builder()
            .n_samples(MAX_SAMPLES + 1)
            .build()
            .is_err());
        assert!(CopulaConfig::builder().n_samples(MAX_SAMPLES).build().is_ok());
    }
}
