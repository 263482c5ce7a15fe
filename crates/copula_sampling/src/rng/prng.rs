//! Seedable generator wrapper around `rand::StdRng`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Random number generator for copula sampling.
///
/// Wraps `StdRng`, remembering the seed (if any) so runs can be reported
/// and replayed.
///
/// # Examples
///
/// ```rust
/// use copula_sampling::rng::CopulaRng;
///
/// let mut a = CopulaRng::from_seed(7);
/// let mut b = CopulaRng::from_seed(7);
/// assert_eq!(a.gen_normal(), b.gen_normal());
/// assert_eq!(a.seed(), Some(7));
/// ```
#[derive(Clone, Debug)]
pub struct CopulaRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl CopulaRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a generator seeded from operating system entropy.
    ///
    /// The sequence is not reproducible; [`CopulaRng::seed`] returns `None`.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Seed used for initialisation, `None` for entropy-seeded generators.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Single standard normal variate (Ziggurat via `rand_distr`).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with standard normal variates.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
