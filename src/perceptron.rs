use log::debug;
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;

use crate::{
    activation::Step,
    initialization::{ParamGen, RandParamGen},
    PerceptronErr, Result,
};

/// The learning rate every perceptron trains with.
pub const LEARNING_RATE: f32 = 0.01;

/// A single neuron binary linear classifier trained online with the Rosenblatt rule.
///
/// The weight vector's length is fixed at construction and every input vector given to
/// [`Perceptron::feed_forward`] or [`Perceptron::train`] must match it, bias input included.
#[derive(Clone, Debug)]
pub struct Perceptron {
    weights: Vec<f32>,
    learning_rate: f32,
    act_fn: Step,
}

impl Perceptron {
    /// Creates a new `Perceptron` with `num_inputs` weights sampled uniformly from `[-1, 1]`.
    ///
    /// # Arguments
    /// * `num_inputs` - The amount of inputs, including the bias input.
    /// * `rng` - The random source the initial weights are drawn from.
    ///
    /// # Returns
    /// A new `Perceptron` or an error if `num_inputs` is zero.
    pub fn new<R: Rng>(num_inputs: usize, rng: &mut R) -> Result<Self> {
        let mut param_gen = RandParamGen::symmetric(rng, num_inputs)?;
        Self::with_param_gen(num_inputs, &mut param_gen)
    }

    /// Creates a new `Perceptron` whose initial weights come from `param_gen`.
    ///
    /// # Arguments
    /// * `num_inputs` - The amount of inputs, including the bias input.
    /// * `param_gen` - The generator of the initial weights.
    ///
    /// # Returns
    /// A new `Perceptron`, or an error if `num_inputs` is zero or the generator runs out of
    /// values before filling every weight.
    pub fn with_param_gen<G>(num_inputs: usize, param_gen: &mut G) -> Result<Self>
    where
        G: ParamGen + ?Sized,
    {
        if num_inputs == 0 {
            return Err(PerceptronErr::InvalidInput(
                "a perceptron needs at least one input".into(),
            ));
        }

        let mut weights = Vec::with_capacity(num_inputs);

        while weights.len() < num_inputs {
            let Some(sample) = param_gen.sample(num_inputs - weights.len()) else {
                break;
            };

            weights.extend(sample);
        }

        if weights.len() != num_inputs {
            return Err(PerceptronErr::SizeMismatch {
                what: "initial weights",
                got: weights.len(),
                expected: num_inputs,
            });
        }

        Self::from_weights(weights)
    }

    /// Creates a new `Perceptron` starting from the given weights.
    ///
    /// # Returns
    /// A new `Perceptron` or an error if `weights` is empty.
    pub fn from_weights(weights: Vec<f32>) -> Result<Self> {
        if weights.is_empty() {
            return Err(PerceptronErr::InvalidInput(
                "a perceptron needs at least one input".into(),
            ));
        }

        Ok(Self {
            weights,
            learning_rate: LEARNING_RATE,
            act_fn: Step::default(),
        })
    }

    /// Returns the amount of inputs this perceptron expects, bias input included.
    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Returns the current weights.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// Classifies `inputs`.
    ///
    /// # Arguments
    /// * `inputs` - The input vector, its length must match the amount of weights.
    ///
    /// # Returns
    /// `true` if the weighted sum is strictly positive, `false` otherwise, or a size mismatch
    /// error if `inputs` has the wrong length.
    pub fn feed_forward(&self, inputs: &[f32]) -> Result<bool> {
        let x = self.view_inputs(inputs)?;
        Ok(self.act_fn.f(self.view_weights().dot(&x)))
    }

    /// Makes one online training step on a single sample.
    ///
    /// Every weight moves by `learning_rate * error * inputs[i]`, where the error is
    /// `desired - guess` over `{0, 1}`, so nothing changes when the guess is right.
    ///
    /// # Arguments
    /// * `inputs` - The input vector, its length must match the amount of weights.
    /// * `desired` - The expected classification.
    ///
    /// # Returns
    /// Whether the weights were corrected, or a size mismatch error if `inputs` has the wrong
    /// length.
    pub fn train(&mut self, inputs: &[f32], desired: bool) -> Result<bool> {
        let guess = self.feed_forward(inputs)?;
        let error = Step::numeric(desired) - Step::numeric(guess);

        if error == 0. {
            return Ok(false);
        }

        let lr = self.learning_rate;

        for (w, x) in self.weights.iter_mut().zip(inputs) {
            *w += lr * error * x;
        }

        debug!(error = error, desired = desired; "corrected weights: {:?}", self.weights);
        Ok(true)
    }

    /// Classifies every row of `x`.
    ///
    /// # Arguments
    /// * `x` - A matrix with one input vector per row.
    ///
    /// # Returns
    /// One label per row, or a size mismatch error if the amount of columns is not the amount
    /// of weights.
    pub fn predict_batch(&self, x: ArrayView2<f32>) -> Result<Array1<bool>> {
        if x.ncols() != self.num_inputs() {
            return Err(PerceptronErr::SizeMismatch {
                what: "batch columns",
                got: x.ncols(),
                expected: self.num_inputs(),
            });
        }

        Ok(x.dot(&self.view_weights()).mapv(|z| self.act_fn.f(z)))
    }

    fn view_weights(&self) -> ArrayView1<'_, f32> {
        ArrayView1::from(&self.weights[..])
    }

    fn view_inputs<'a>(&self, inputs: &'a [f32]) -> Result<ArrayView1<'a, f32>> {
        if inputs.len() != self.num_inputs() {
            return Err(PerceptronErr::SizeMismatch {
                what: "inputs",
                got: inputs.len(),
                expected: self.num_inputs(),
            });
        }

        Ok(ArrayView1::from(inputs))
    }
}
