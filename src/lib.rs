//! A single neuron learning a linear decision boundary online.
//!
//! The [`Perceptron`] trains on one sample at a time and the [`BoundaryEstimator`] guesses its
//! current decision boundary from the points it already classified. A [`Session`] ties both
//! together into the tick the visualizer runs, talking to the display through [`Painter`].

pub mod activation;
pub mod boundary;
pub mod config;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod perceptron;
pub mod point;
pub mod sampling;
pub mod scatter;
pub mod session;

pub use boundary::{BoundaryEstimator, VerticalPolicy};
pub use config::SessionConfig;
pub use dataset::Dataset;
pub use error::{PerceptronErr, Result};
pub use perceptron::{Perceptron, LEARNING_RATE};
pub use point::{BoundaryLine, ClassifiedPoint, Point};
pub use sampling::{Sample, Sampler, TargetLine};
pub use scatter::Scatter;
pub use session::{generate_rng, Painter, Session, StepReport};

/// The amount of inputs of the visualized perceptron: `x`, `y` and the bias.
pub const NUM_INPUTS: usize = 3;
