//! Seedable uniform random fill for matrices.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::types::Scalar;

/// Closed interval `[low, high]` that random entries are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRange {
    low: Scalar,
    high: Scalar,
}

impl UniformRange {
    /// Build a range; both bounds must be finite and `low < high`.
    pub fn new(low: Scalar, high: Scalar) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(MatrixError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    #[inline]
    pub fn low(&self) -> Scalar {
        self.low
    }

    #[inline]
    pub fn high(&self) -> Scalar {
        self.high
    }

    /// Whether `x` lies inside the interval.
    #[inline]
    pub fn contains(&self, x: Scalar) -> bool {
        self.low <= x && x <= self.high
    }

    /// Draw `len` independent samples.
    pub fn sample_vec<R: Rng + ?Sized>(&self, rng: &mut R, len: usize) -> Vec<Scalar> {
        let dist = Uniform::new_inclusive(self.low, self.high);
        (0..len).map(|_| dist.sample(rng)).collect()
    }
}

impl Default for UniformRange {
    /// `[-1, 1]`
    fn default() -> Self {
        Self { low: -1.0, high: 1.0 }
    }
}

/// Generator for random matrices.
///
/// A fixed seed gives reproducible output; `None` seeds from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "seeding random generator");
            StdRng::seed_from_u64(seed)
        }
        None => {
            debug!("seeding random generator from entropy");
            StdRng::from_entropy()
        }
    }
}
