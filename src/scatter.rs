use crate::{perceptron::Perceptron, point::ClassifiedPoint, sampling::TargetLine, Result};

/// Every point classified so far, in the order they were drawn.
///
/// Points are never removed. Their labels only change through [`Scatter::refresh`].
#[derive(Clone, Debug)]
pub struct Scatter<H> {
    points: Vec<ClassifiedPoint<H>>,
}

impl<H> Default for Scatter<H> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<H> Scatter<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ClassifiedPoint<H>] {
        &self.points
    }

    pub fn push(&mut self, point: ClassifiedPoint<H>) {
        self.points.push(point);
    }

    /// Relabels every point with the perceptron's current answer.
    ///
    /// # Arguments
    /// * `perceptron` - The perceptron whose opinion is recorded.
    /// * `recolor` - Called once per point with its handle and its new label, flipped or not.
    ///
    /// # Returns
    /// The amount of labels that flipped, or an error if the perceptron doesn't take
    /// `[x, y, bias]` inputs.
    pub fn refresh<F>(&mut self, perceptron: &Perceptron, mut recolor: F) -> Result<usize>
    where
        F: FnMut(&mut H, bool),
    {
        let mut flipped = 0;

        for p in &mut self.points {
            let label = perceptron.feed_forward(&p.point.inputs())?;

            if label != p.label {
                flipped += 1;
            }

            p.label = label;
            recolor(&mut p.handle, label);
        }

        Ok(flipped)
    }

    /// Returns the fraction of points whose label agrees with `target`, `None` if empty.
    pub fn agreement(&self, target: &TargetLine) -> Option<f32> {
        if self.points.is_empty() {
            return None;
        }

        let agree = self
            .points
            .iter()
            .filter(|p| p.label == target.is_above(&p.point))
            .count();

        Some(agree as f32 / self.points.len() as f32)
    }
}
