use ndarray::ArrayView2;
use rand::Rng;

use crate::{
    perceptron::Perceptron,
    sampling::{Sample, Sampler},
    PerceptronErr, Result,
};

/// A labelled dataset stored row by row, each row being one input vector.
#[derive(Clone, Debug)]
pub struct Dataset {
    x_size: usize,
    data: Vec<f32>,
    labels: Vec<bool>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `data` - The input vectors laid out one after the other.
    /// * `labels` - The expected classification of each input vector.
    /// * `x_size` - The length of each input vector.
    ///
    /// # Returns
    /// A new `Dataset` or an error if `data` doesn't hold exactly one row per label.
    pub fn new(data: Vec<f32>, labels: Vec<bool>, x_size: usize) -> Result<Self> {
        if x_size == 0 {
            return Err(PerceptronErr::InvalidInput(
                "rows must have at least one column".into(),
            ));
        }

        let expected = labels.len() * x_size;

        if data.len() != expected {
            return Err(PerceptronErr::SizeMismatch {
                what: "dataset values",
                got: data.len(),
                expected,
            });
        }

        Ok(Self {
            x_size,
            data,
            labels,
        })
    }

    /// Collects samples into a dataset of `[x, y, bias]` rows.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        let mut data = Vec::new();
        let mut labels = Vec::new();

        for sample in samples {
            data.extend(sample.inputs());
            labels.push(sample.desired);
        }

        Self {
            x_size: 3,
            data,
            labels,
        }
    }

    /// Draws `n` fresh samples from `sampler`.
    pub fn generate<R: Rng + ?Sized>(sampler: &Sampler, rng: &mut R, n: usize) -> Self {
        Self::from_samples((0..n).map(|_| sampler.sample(rng)))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn x_size(&self) -> usize {
        self.x_size
    }

    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    /// Returns every input vector as the rows of a matrix.
    pub fn x(&self) -> ArrayView2<'_, f32> {
        ArrayView2::from_shape((self.len(), self.x_size), &self.data)
            .expect("the constructors keep one row per label")
    }

    /// Iterates over `(inputs, label)` pairs in order.
    pub fn rows(&self) -> impl Iterator<Item = (&[f32], bool)> + '_ {
        self.data
            .chunks_exact(self.x_size)
            .zip(self.labels.iter().copied())
    }

    /// Runs one online pass over the dataset, training on every row in order.
    ///
    /// # Returns
    /// The amount of corrections made during the pass.
    pub fn train_epoch(&self, perceptron: &mut Perceptron) -> Result<usize> {
        let mut corrections = 0;

        for (inputs, desired) in self.rows() {
            if perceptron.train(inputs, desired)? {
                corrections += 1;
            }
        }

        Ok(corrections)
    }

    /// Returns the fraction of rows `perceptron` classifies correctly, `None` if empty.
    pub fn accuracy(&self, perceptron: &Perceptron) -> Result<Option<f32>> {
        if self.is_empty() {
            return Ok(None);
        }

        let predictions = perceptron.predict_batch(self.x())?;
        let hits = predictions
            .iter()
            .zip(&self.labels)
            .filter(|(pred, label)| pred == label)
            .count();

        Ok(Some(hits as f32 / self.len() as f32))
    }
}
