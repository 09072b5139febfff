use std::collections::VecDeque;

use super::ParamGen;

/// A parameter generator that replays a known sequence of values.
///
/// Used wherever the initial weights must be exact, e.g. to reproduce a particular starting
/// decision boundary.
pub struct FixedParamGen {
    values: VecDeque<f32>,
}

impl FixedParamGen {
    /// Creates a new `FixedParamGen` that yields `values` in order and then runs dry.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Creates a new `FixedParamGen` that yields `value` exactly `limit` times.
    pub fn splat(value: f32, limit: usize) -> Self {
        Self::new(std::iter::repeat_n(value, limit))
    }
}

impl ParamGen for FixedParamGen {
    fn sample(&mut self, n: usize) -> Option<Vec<f32>> {
        if self.values.is_empty() {
            return None;
        }

        let n = n.min(self.values.len());
        Some(self.values.drain(..n).collect())
    }
}
