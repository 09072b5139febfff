use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::{point::Point, PerceptronErr, Result};

/// The ground truth the perceptron is trained against: `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetLine {
    pub slope: f32,
    pub intercept: f32,
}

impl Default for TargetLine {
    fn default() -> Self {
        Self::new(0.5, 10.)
    }
}

impl TargetLine {
    pub fn new(slope: f32, intercept: f32) -> Self {
        Self { slope, intercept }
    }

    pub fn eval(&self, x: f32) -> f32 {
        self.slope * x + self.intercept
    }

    /// Whether `p` lies strictly over the line.
    pub fn is_above(&self, p: &Point) -> bool {
        p.y > self.eval(p.x)
    }
}

/// A labelled training sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub point: Point,
    pub desired: bool,
}

impl Sample {
    /// Returns the perceptron input vector: `[x, y, bias]`.
    pub fn inputs(&self) -> [f32; 3] {
        self.point.inputs()
    }
}

/// Draws points uniformly from `[-x_bound, x_bound] x [-y_bound, y_bound]` and labels them
/// with a [`TargetLine`].
#[derive(Clone, Debug)]
pub struct Sampler {
    x_bound: f32,
    y_bound: f32,
    xs: Uniform<f32>,
    ys: Uniform<f32>,
    target: TargetLine,
}

impl Sampler {
    /// Creates a new `Sampler`.
    ///
    /// # Arguments
    /// * `x_bound` - Half the width of the sampling domain.
    /// * `y_bound` - Half the height of the sampling domain.
    /// * `target` - The line that labels the samples.
    ///
    /// # Returns
    /// A new `Sampler` or an error if a bound is not finite and positive.
    pub fn new(x_bound: f32, y_bound: f32, target: TargetLine) -> Result<Self> {
        for (name, bound) in [("x_bound", x_bound), ("y_bound", y_bound)] {
            if !bound.is_finite() || bound <= 0. {
                return Err(PerceptronErr::InvalidInput(format!(
                    "{name} must be finite and positive, got {bound}"
                )));
            }
        }

        Ok(Self {
            x_bound,
            y_bound,
            xs: Uniform::new_inclusive(-x_bound, x_bound)?,
            ys: Uniform::new_inclusive(-y_bound, y_bound)?,
            target,
        })
    }

    /// Returns the half extents of the sampling domain, `(x_bound, y_bound)`.
    pub fn bounds(&self) -> (f32, f32) {
        (self.x_bound, self.y_bound)
    }

    pub fn target(&self) -> &TargetLine {
        &self.target
    }

    /// Draws a new labelled sample.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        let point = Point::new(self.xs.sample(rng), self.ys.sample(rng));

        Sample {
            point,
            desired: self.target.is_above(&point),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn target_line() {
        let target = TargetLine::default();

        assert_eq!(target.eval(0.), 10.);
        assert_eq!(target.eval(-20.), 0.);
        assert!(target.is_above(&Point::new(0., 10.5)));
        assert!(!target.is_above(&Point::new(0., 10.)));
        assert!(!target.is_above(&Point::new(4., 0.)));
    }

    #[test]
    fn samples_stay_in_bounds_and_are_labelled() {
        let mut rng = StdRng::seed_from_u64(42);
        let sampler = Sampler::new(400., 300., TargetLine::default()).unwrap();

        for _ in 0..1000 {
            let s = sampler.sample(&mut rng);

            assert!((-400. ..=400.).contains(&s.point.x));
            assert!((-300. ..=300.).contains(&s.point.y));
            assert_eq!(s.desired, s.point.y > 0.5 * s.point.x + 10.);
            assert_eq!(s.inputs(), [s.point.x, s.point.y, 1.]);
        }
    }

    #[test]
    fn invalid_bounds() {
        let target = TargetLine::default();

        assert!(Sampler::new(0., 300., target).is_err());
        assert!(Sampler::new(400., -1., target).is_err());
        assert!(Sampler::new(f32::NAN, 300., target).is_err());
        assert!(Sampler::new(f32::INFINITY, 300., target).is_err());
    }
}
