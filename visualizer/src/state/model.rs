use std::time::Duration;

use perceptron::BoundaryLine;

/// High-level lifecycle of the visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Training,
    Paused,
    Finished,
}

/// A single log entry shown in the event panel.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// Full snapshot rendered by the TUI.
#[derive(Debug, Clone)]
pub struct FrameView {
    pub phase: Phase,
    pub elapsed: Duration,
    pub tick_interval: Duration,
    pub step: usize,
    pub max_steps: Option<usize>,
    pub corrections: usize,
    pub weights: Vec<f32>,
    /// Fraction of points whose label matches the ground truth.
    pub agreement: Option<f32>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Points the perceptron puts over the line.
    pub over: Vec<(f64, f64)>,
    /// Points the perceptron puts under the line.
    pub under: Vec<(f64, f64)>,
    /// The ground truth line clipped to the horizontal bounds.
    pub target: [(f64, f64); 2],
    pub target_label: String,
    pub boundary: Option<BoundaryLine>,
    pub logs: Vec<LogLine>,
}
