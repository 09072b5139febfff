use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    boundary::BoundaryEstimator,
    config::SessionConfig,
    perceptron::Perceptron,
    point::{BoundaryLine, ClassifiedPoint, Point},
    sampling::{Sample, Sampler, TargetLine},
    scatter::Scatter,
    PerceptronErr, Result, NUM_INPUTS,
};

/// The display side of a [`Session`].
///
/// A painter draws points and the estimated boundary and hands back an opaque handle per point
/// so it can later recolor it. The session never looks inside a handle.
pub trait Painter {
    type Handle;

    /// Draws a newly classified point.
    fn draw_point(&mut self, point: &Point, label: bool) -> Self::Handle;

    /// Updates an already drawn point to its refreshed label.
    fn recolor(&mut self, handle: &mut Self::Handle, label: bool);

    /// Replaces the previously drawn boundary, `None` meaning nothing to draw this frame.
    fn draw_boundary(&mut self, line: Option<&BoundaryLine>);
}

/// What happened during a single [`Session::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    /// 1-based number of this step.
    pub step: usize,
    pub sample: Sample,
    /// Whether the sample made the perceptron correct its weights.
    pub corrected: bool,
    /// How many previous points changed label on refresh.
    pub flipped: usize,
    pub boundary: Option<BoundaryLine>,
}

/// One run of the visualization: a perceptron learning from samples drawn one per tick.
pub struct Session<H, R: Rng> {
    perceptron: Perceptron,
    sampler: Sampler,
    estimator: BoundaryEstimator,
    scatter: Scatter<H>,
    rng: R,
    steps: usize,
    corrections: usize,
}

impl<H, R: Rng> Session<H, R> {
    /// Creates a new `Session` with a freshly initialized `[x, y, bias]` perceptron.
    ///
    /// # Arguments
    /// * `config` - The problem to learn.
    /// * `rng` - The random source for both the initial weights and the samples.
    pub fn new(config: &SessionConfig, mut rng: R) -> Result<Self> {
        let perceptron = Perceptron::new(NUM_INPUTS, &mut rng)?;
        Self::with_perceptron(config, perceptron, rng)
    }

    /// Creates a new `Session` around an existing perceptron.
    ///
    /// # Returns
    /// A new `Session`, or an error if the configuration is invalid or the perceptron doesn't
    /// take `[x, y, bias]` inputs.
    pub fn with_perceptron(
        config: &SessionConfig,
        perceptron: Perceptron,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;

        if perceptron.num_inputs() != NUM_INPUTS {
            return Err(PerceptronErr::SizeMismatch {
                what: "perceptron inputs",
                got: perceptron.num_inputs(),
                expected: NUM_INPUTS,
            });
        }

        let sampler = Sampler::new(config.x_bound, config.y_bound, config.target)?;

        info!(
            "session created: target y = {}x + {}, domain {}x{}, initial weights {:?}",
            config.target.slope,
            config.target.intercept,
            2. * config.x_bound,
            2. * config.y_bound,
            perceptron.weights()
        );

        Ok(Self {
            perceptron,
            sampler,
            estimator: BoundaryEstimator::new(config.vertical_policy),
            scatter: Scatter::new(),
            rng,
            steps: 0,
            corrections: 0,
        })
    }

    pub fn perceptron(&self) -> &Perceptron {
        &self.perceptron
    }

    pub fn scatter(&self) -> &Scatter<H> {
        &self.scatter
    }

    pub fn target(&self) -> &TargetLine {
        self.sampler.target()
    }

    /// Returns the half extents of the sampling domain, `(x_bound, y_bound)`.
    pub fn bounds(&self) -> (f32, f32) {
        self.sampler.bounds()
    }

    /// Returns the amount of steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the amount of steps that corrected the weights.
    pub fn corrections(&self) -> usize {
        self.corrections
    }

    /// Runs a single tick.
    ///
    /// The perceptron trains on a fresh sample, then the boundary is estimated from the labels
    /// the points had *before* this tick, then every point is relabelled and finally the new
    /// sample joins the scatter with the updated perceptron's label.
    ///
    /// # Arguments
    /// * `painter` - Where to draw.
    ///
    /// # Returns
    /// A report of the step or the perceptron's error, which can only be a size mismatch.
    pub fn step<P>(&mut self, painter: &mut P) -> Result<StepReport>
    where
        P: Painter<Handle = H>,
    {
        let sample = self.sampler.sample(&mut self.rng);
        let inputs = sample.inputs();

        let corrected = self.perceptron.train(&inputs, sample.desired)?;
        if corrected {
            self.corrections += 1;
        }

        let boundary = self.estimator.estimate(self.scatter.points());
        painter.draw_boundary(boundary.as_ref());

        let flipped = self
            .scatter
            .refresh(&self.perceptron, |handle, label| painter.recolor(handle, label))?;

        let label = self.perceptron.feed_forward(&inputs)?;
        let handle = painter.draw_point(&sample.point, label);
        self.scatter.push(ClassifiedPoint {
            point: sample.point,
            label,
            handle,
        });

        self.steps += 1;

        Ok(StepReport {
            step: self.steps,
            sample,
            corrected,
            flipped,
            boundary,
        })
    }
}

/// Creates the session's random source, seeded when reproducibility is wanted.
pub fn generate_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
