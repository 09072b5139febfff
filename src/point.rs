use serde::{Deserialize, Serialize};

/// A point in data space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both points sit on the same coordinates.
    pub fn same_coords(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Returns the perceptron input vector for this point: `[x, y, bias]`.
    pub fn inputs(&self) -> [f32; 3] {
        [self.x, self.y, 1.]
    }
}

/// A point together with the perceptron's current opinion about it.
///
/// `label` is what the perceptron answered for the point when it was created or last refreshed,
/// it is not the ground truth. `handle` belongs to whoever draws the point and is never
/// inspected here.
#[derive(Clone, Debug)]
pub struct ClassifiedPoint<H> {
    pub point: Point,
    pub label: bool,
    pub handle: H,
}

impl<H> ClassifiedPoint<H> {
    pub fn new(x: f32, y: f32, label: bool, handle: H) -> Self {
        Self {
            point: Point::new(x, y),
            label,
            handle,
        }
    }

    pub fn x(&self) -> f32 {
        self.point.x
    }

    pub fn y(&self) -> f32 {
        self.point.y
    }
}

/// Two data space endpoints the display draws the estimated decision boundary through.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLine {
    pub p0: Point,
    pub p1: Point,
}

impl BoundaryLine {
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// Returns the slope of the line, `None` when it is vertical.
    pub fn slope(&self) -> Option<f32> {
        let dx = self.p1.x - self.p0.x;
        (dx != 0.).then(|| (self.p1.y - self.p0.y) / dx)
    }
}
