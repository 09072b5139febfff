use perceptron::{BoundaryLine, Painter, Point};

/// How a point is drawn: which side of the line the perceptron puts it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dot {
    Over,
    Under,
}

impl Dot {
    pub fn for_label(label: bool) -> Self {
        if label {
            Dot::Over
        } else {
            Dot::Under
        }
    }
}

/// Keeps the drawable state between frames: point shades live in the session's scatter as
/// handles, the boundary lives here.
#[derive(Debug, Default)]
pub struct CanvasPainter {
    boundary: Option<BoundaryLine>,
}

impl CanvasPainter {
    pub fn boundary(&self) -> Option<&BoundaryLine> {
        self.boundary.as_ref()
    }
}

impl Painter for CanvasPainter {
    type Handle = Dot;

    fn draw_point(&mut self, _point: &Point, label: bool) -> Dot {
        Dot::for_label(label)
    }

    fn recolor(&mut self, handle: &mut Dot, label: bool) {
        *handle = Dot::for_label(label);
    }

    fn draw_boundary(&mut self, line: Option<&BoundaryLine>) {
        self.boundary = line.copied();
    }
}

/// A painter for runs nobody watches.
#[derive(Debug, Default)]
pub struct NullPainter;

impl Painter for NullPainter {
    type Handle = ();

    fn draw_point(&mut self, _point: &Point, _label: bool) {}

    fn recolor(&mut self, _handle: &mut (), _label: bool) {}

    fn draw_boundary(&mut self, _line: Option<&BoundaryLine>) {}
}
