/// Heaviside step activation: fires only when the weighted sum is strictly above the threshold.
///
/// The comparison is strict, so a weighted sum that lands exactly on the threshold does not
/// fire. With the default threshold of `0` a point lying on the decision boundary is classified
/// as `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Step {
    thresh: f32,
}

impl Step {
    /// Creates a new `Step` with the given threshold.
    pub fn new(thresh: f32) -> Self {
        Self { thresh }
    }

    pub fn f(&self, z: f32) -> bool {
        z > self.thresh
    }

    /// Maps an activation to the numeric value used by the learning rule.
    pub fn numeric(a: bool) -> f32 {
        a as u8 as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_does_not_fire() {
        let step = Step::default();

        assert!(!step.f(0.));
        assert!(!step.f(-0.));
        assert!(step.f(f32::MIN_POSITIVE));
        assert!(!step.f(-f32::MIN_POSITIVE));
    }

    #[test]
    fn numeric() {
        assert_eq!(Step::numeric(true), 1.);
        assert_eq!(Step::numeric(false), 0.);
    }
}
