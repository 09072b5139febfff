use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::ParamGen;
use crate::Result;

/// A parameter generator that samples from a uniform distribution using a borrowed random
/// source, so callers decide whether the run is seeded or not.
pub struct RandParamGen<'r, R: Rng> {
    rng: &'r mut R,
    distribution: Uniform<f32>,
    remaining: usize,
}

impl<'r, R: Rng> RandParamGen<'r, R> {
    /// Creates a new `RandParamGen` over the inclusive range `[low, high]`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `limit` - The maximum amount of numbers to generate.
    /// * `low` - The inclusive lower limit.
    /// * `high` - The inclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is invalid (low > high or not finite).
    pub fn uniform_inclusive(rng: &'r mut R, limit: usize, low: f32, high: f32) -> Result<Self> {
        Ok(Self {
            rng,
            distribution: Uniform::new_inclusive(low, high)?,
            remaining: limit,
        })
    }

    /// Creates a new `RandParamGen` over `[-1, 1]`, the classic perceptron initialization.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `limit` - The maximum amount of numbers to generate.
    pub fn symmetric(rng: &'r mut R, limit: usize) -> Result<Self> {
        Self::uniform_inclusive(rng, limit, -1., 1.)
    }
}

impl<R: Rng> ParamGen for RandParamGen<'_, R> {
    fn sample(&mut self, n: usize) -> Option<Vec<f32>> {
        if self.remaining == 0 {
            return None;
        }

        let n = n.min(self.remaining);
        self.remaining -= n;

        let distribution = &self.distribution;
        let rng = &mut *self.rng;
        let sample = (0..n).map(|_| distribution.sample(rng)).collect();

        Some(sample)
    }
}
