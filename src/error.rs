use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use rand_distr::uniform::Error as UniformError;

/// The result type used in the entire perceptron crate.
pub type Result<T> = std::result::Result<T, PerceptronErr>;

/// The perceptron crate's error type.
#[derive(Debug)]
pub enum PerceptronErr {
    /// Two sizes that must agree don't, e.g. an input vector and the weights.
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A constructor argument is out of its domain.
    InvalidInput(String),
    /// The configuration could not be read, parsed or validated.
    InvalidConfig(String),
}

impl Display for PerceptronErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptronErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch for {what}, got {got} and expected {expected}"
            ),
            PerceptronErr::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            PerceptronErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for PerceptronErr {}

impl From<UniformError> for PerceptronErr {
    fn from(value: UniformError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}

impl From<serde_json::Error> for PerceptronErr {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}

impl From<io::Error> for PerceptronErr {
    fn from(value: io::Error) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}
