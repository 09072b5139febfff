use std::time::{Duration, Instant};

use log::{debug, info};
use perceptron::{generate_rng, Session, StepReport};
use rand::rngs::StdRng;

use super::{
    model::{FrameView, LogLine, Phase},
    painter::{CanvasPainter, Dot},
};
use crate::config::AppConfig;

const MAX_LOGS: usize = 200;

/// Drives the learning session one tick at a time and produces the frames to render.
pub struct SimulationState {
    session: Session<Dot, StdRng>,
    painter: CanvasPainter,
    phase: Phase,
    started_at: Instant,
    tick_interval: Duration,
    max_steps: Option<usize>,
    logs: Vec<LogLine>,
}

impl SimulationState {
    /// Creates a new `SimulationState` from the application config.
    ///
    /// # Errors
    /// Returns an error if the session configuration is invalid.
    pub fn new(config: &AppConfig) -> perceptron::Result<Self> {
        let session = Session::new(&config.session(), generate_rng(config.seed))?;

        let mut state = Self {
            session,
            painter: CanvasPainter::default(),
            phase: Phase::Training,
            started_at: Instant::now(),
            tick_interval: config.tick_interval(),
            max_steps: config.max_steps,
            logs: Vec::new(),
        };

        let target = *state.session.target();
        state.push_log(
            "INFO",
            format!(
                "learning y = {}x + {} from one point every {} ms",
                target.slope, target.intercept, config.tick_interval_ms
            ),
        );

        Ok(state)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs one training step unless paused or finished.
    ///
    /// # Returns
    /// The step report, `None` if nothing ran.
    pub fn tick(&mut self) -> perceptron::Result<Option<StepReport>> {
        if self.phase != Phase::Training {
            return Ok(None);
        }

        let report = self.session.step(&mut self.painter)?;

        if report.corrected {
            debug!(step = report.step; "weights corrected: {:?}", self.session.perceptron().weights());
            self.push_log(
                "INFO",
                format!(
                    "step {}: misclassified ({:.1}, {:.1}), corrected weights",
                    report.step, report.sample.point.x, report.sample.point.y
                ),
            );
        }

        if report.flipped > 0 {
            self.push_log(
                "INFO",
                format!("step {}: {} point(s) changed side", report.step, report.flipped),
            );
        }

        if self.max_steps.is_some_and(|max| report.step >= max) {
            self.phase = Phase::Finished;
            info!("reached {} steps", report.step);
            self.push_log("INFO", format!("finished after {} steps", report.step));
        }

        Ok(Some(report))
    }

    /// Pauses a running simulation or resumes a paused one.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Training => Phase::Paused,
            Phase::Paused => Phase::Training,
            Phase::Finished => Phase::Finished,
        };
    }

    /// Returns the current snapshot for rendering.
    pub fn view(&self) -> FrameView {
        let mut over = Vec::new();
        let mut under = Vec::new();

        for p in self.session.scatter().points() {
            let coords = (p.x() as f64, p.y() as f64);

            match p.handle {
                Dot::Over => over.push(coords),
                Dot::Under => under.push(coords),
            }
        }

        let (x_bounds, y_bounds) = self.bounds();
        let target = *self.session.target();
        let [x0, x1] = x_bounds;

        FrameView {
            phase: self.phase,
            elapsed: self.started_at.elapsed(),
            tick_interval: self.tick_interval,
            step: self.session.steps(),
            max_steps: self.max_steps,
            corrections: self.session.corrections(),
            weights: self.session.perceptron().weights().to_vec(),
            agreement: self.session.scatter().agreement(&target),
            x_bounds,
            y_bounds,
            over,
            under,
            target: [
                (x0, target.eval(x0 as f32) as f64),
                (x1, target.eval(x1 as f32) as f64),
            ],
            target_label: format!("y = {}x + {}", target.slope, target.intercept),
            boundary: self.painter.boundary().copied(),
            logs: self.logs.clone(),
        }
    }

    fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let (xb, yb) = self.session.bounds();
        ([-xb as f64, xb as f64], [-yb as f64, yb as f64])
    }

    fn push_log(&mut self, level: &'static str, message: String) {
        self.logs.push(LogLine { level, message });
        if self.logs.len() > MAX_LOGS {
            let drain = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..drain);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            seed: Some(42),
            max_steps: Some(30),
            ..Default::default()
        }
    }

    #[test]
    fn stops_at_max_steps() {
        let mut sim = SimulationState::new(&config()).unwrap();

        for _ in 0..30 {
            assert!(sim.tick().unwrap().is_some());
        }

        assert_eq!(sim.phase(), Phase::Finished);
        assert!(sim.tick().unwrap().is_none());
        assert_eq!(sim.view().step, 30);
    }

    #[test]
    fn paused_does_not_step() {
        let mut sim = SimulationState::new(&config()).unwrap();

        sim.toggle_pause();
        assert_eq!(sim.phase(), Phase::Paused);
        assert!(sim.tick().unwrap().is_none());

        sim.toggle_pause();
        assert!(sim.tick().unwrap().is_some());
    }

    #[test]
    fn view_splits_points_by_label() {
        let mut sim = SimulationState::new(&config()).unwrap();
        for _ in 0..20 {
            sim.tick().unwrap();
        }

        let view = sim.view();
        assert_eq!(view.over.len() + view.under.len(), 20);
        assert_eq!(view.x_bounds, [-400., 400.]);
        assert_eq!(view.y_bounds, [-300., 300.]);
        assert_eq!(view.target, [(-400., -190.), (400., 210.)]);
        assert_eq!(view.weights.len(), 3);
    }
}
