use perceptron::{
    generate_rng, BoundaryEstimator, BoundaryLine, Painter, Perceptron, Point, Session,
    SessionConfig,
};

/// Records what a session asks to draw. Handles are the index of the drawn point.
#[derive(Default)]
struct RecordingPainter {
    drawn: Vec<(Point, bool)>,
    recolors: Vec<(usize, bool)>,
    boundaries: Vec<Option<BoundaryLine>>,
}

impl Painter for RecordingPainter {
    type Handle = usize;

    fn draw_point(&mut self, point: &Point, label: bool) -> usize {
        self.drawn.push((*point, label));
        self.drawn.len() - 1
    }

    fn recolor(&mut self, handle: &mut usize, label: bool) {
        self.recolors.push((*handle, label));
    }

    fn draw_boundary(&mut self, line: Option<&BoundaryLine>) {
        self.boundaries.push(line.copied());
    }
}

fn session(seed: u64) -> Session<usize, rand::rngs::StdRng> {
    Session::new(&SessionConfig::default(), generate_rng(Some(seed))).unwrap()
}

#[test]
fn every_step_adds_one_point_and_recolors_the_rest() {
    let mut session = session(42);
    let mut painter = RecordingPainter::default();

    for step in 1..=50 {
        let report = session.step(&mut painter).unwrap();

        assert_eq!(report.step, step);
        assert_eq!(session.steps(), step);
        assert_eq!(session.scatter().len(), step);
        assert_eq!(painter.drawn.len(), step);
        assert_eq!(painter.boundaries.len(), step);
    }

    // Step n recolors the n - 1 points drawn before it.
    assert_eq!(painter.recolors.len(), (0..50).sum::<usize>());

    let handles: Vec<_> = session.scatter().points().iter().map(|p| p.handle).collect();
    assert_eq!(handles, (0..50).collect::<Vec<_>>());
}

#[test]
fn labels_follow_the_latest_weights() {
    let mut session = session(7);
    let mut painter = RecordingPainter::default();

    for _ in 0..200 {
        session.step(&mut painter).unwrap();
    }

    let p = session.perceptron();
    for point in session.scatter().points() {
        assert_eq!(point.label, p.feed_forward(&point.point.inputs()).unwrap());
    }
}

#[test]
fn boundary_is_estimated_before_the_refresh() {
    let mut session = session(3);
    let mut painter = RecordingPainter::default();

    for _ in 0..100 {
        let before: Vec<_> = session.scatter().points().to_vec();
        let report = session.step(&mut painter).unwrap();

        let expected = BoundaryEstimator::new(Default::default()).estimate(&before);
        assert_eq!(report.boundary, expected);
        assert_eq!(painter.boundaries.last().copied().flatten(), expected);
    }
}

#[test]
fn no_boundary_on_the_first_two_steps() {
    let mut session = session(5);
    let mut painter = RecordingPainter::default();

    // Estimation runs before the new point joins, so the first two ticks see 0 and 1 points.
    assert!(session.step(&mut painter).unwrap().boundary.is_none());
    assert!(session.step(&mut painter).unwrap().boundary.is_none());
}

#[test]
fn corrections_match_the_reports() {
    let mut session = session(11);
    let mut painter = RecordingPainter::default();

    let corrected = (0..300)
        .filter(|_| session.step(&mut painter).unwrap().corrected)
        .count();

    assert_eq!(session.corrections(), corrected);
}

#[test]
fn session_learns_the_target() {
    let mut session = session(2024);
    let mut painter = RecordingPainter::default();

    for _ in 0..5000 {
        session.step(&mut painter).unwrap();
    }

    let agreement = session.scatter().agreement(session.target()).unwrap();
    assert!(agreement > 0.95, "agreement {agreement}");
}

#[test]
fn seeded_sessions_are_reproducible() {
    let mut a = session(99);
    let mut b = session(99);
    let mut pa = RecordingPainter::default();
    let mut pb = RecordingPainter::default();

    for _ in 0..100 {
        assert_eq!(a.step(&mut pa).unwrap(), b.step(&mut pb).unwrap());
    }

    assert_eq!(a.perceptron().weights(), b.perceptron().weights());
}

#[test]
fn session_with_given_perceptron() {
    let perceptron = Perceptron::from_weights(vec![-0.5, 1., -10.]).unwrap();
    let mut session: Session<usize, _> =
        Session::with_perceptron(&SessionConfig::default(), perceptron, generate_rng(Some(1)))
            .unwrap();
    let mut painter = RecordingPainter::default();

    // These weights already are the target line, nothing is ever corrected.
    for _ in 0..500 {
        assert!(!session.step(&mut painter).unwrap().corrected);
    }

    assert_eq!(session.perceptron().weights(), [-0.5, 1., -10.]);
}
