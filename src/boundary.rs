use log::trace;
use serde::{Deserialize, Serialize};

use crate::point::{BoundaryLine, ClassifiedPoint, Point};

/// What the estimator does with a candidate that sits straight below or above the highest
/// point, where the slope between them has a zero denominator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalPolicy {
    /// The candidate is ignored.
    #[default]
    Skip,
    /// The slope is `+inf`: the candidate only wins when nothing flatter came before it.
    InfiniteSlope,
}

/// Estimates the perceptron's decision boundary from the points it already classified.
///
/// This is a point based approximation, the weights are never read. Among the points labelled
/// `false` it takes the highest one and pairs it with the point that makes the flattest line
/// with it. The result jumps around from frame to frame and is sometimes missing altogether,
/// callers are expected to simply skip drawing in that case.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundaryEstimator {
    policy: VerticalPolicy,
}

impl BoundaryEstimator {
    /// Creates a new `BoundaryEstimator` with the given policy for vertical pairs.
    pub fn new(policy: VerticalPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> VerticalPolicy {
        self.policy
    }

    /// Computes the two endpoints of the estimated boundary.
    ///
    /// # Arguments
    /// * `points` - Every point classified so far, in insertion order.
    ///
    /// # Returns
    /// The line through the highest `false` point and its flattest partner, or `None` if there
    /// are less than two points overall, no `false` point, or no partner for it.
    pub fn estimate<H>(&self, points: &[ClassifiedPoint<H>]) -> Option<BoundaryLine> {
        if points.len() < 2 {
            return None;
        }

        let under = || points.iter().filter(|p| !p.label).map(|p| p.point);

        let highest = under().fold(None, |best: Option<Point>, p| match best {
            Some(b) if p.y <= b.y => Some(b),
            _ => Some(p),
        })?;

        let mut flattest: Option<(f32, Point)> = None;

        for p in under().filter(|p| !p.same_coords(&highest)) {
            let Some(slope) = self.slope(&highest, &p) else {
                continue;
            };

            if flattest.is_none_or(|(lowest, _)| slope < lowest) {
                flattest = Some((slope, p));
            }
        }

        let (slope, partner) = flattest?;
        trace!(slope = slope; "estimated boundary through {highest:?} and {partner:?}");

        Some(BoundaryLine::new(highest, partner))
    }

    /// The absolute slope between `highest` and `p`, or `None` if the policy skips `p`.
    fn slope(&self, highest: &Point, p: &Point) -> Option<f32> {
        let dx = p.x - highest.x;

        if dx == 0. {
            return match self.policy {
                VerticalPolicy::Skip => None,
                VerticalPolicy::InfiniteSlope => Some(f32::INFINITY),
            };
        }

        Some(((p.y - highest.y) / dx).abs())
    }
}
