use anyhow::{Context, Result};
use log::info;
use perceptron::{generate_rng, Session};

use crate::{
    config::{AppConfig, HEADLESS_STEPS},
    state::painter::NullPainter,
};

const REPORT_EVERY: usize = 500;

/// Runs the same training loop as the TUI without a terminal or tick delay, then prints a
/// summary.
///
/// # Errors
/// Returns an error if the session can't be built or a step fails.
pub fn run(config: &AppConfig) -> Result<()> {
    let steps = config.max_steps.unwrap_or(HEADLESS_STEPS);
    let mut session: Session<(), _> = Session::new(&config.session(), generate_rng(config.seed))
        .context("cannot start the session")?;
    let mut painter = NullPainter;

    let mut boundaries = 0;

    for _ in 0..steps {
        let report = session.step(&mut painter)?;

        if report.boundary.is_some() {
            boundaries += 1;
        }

        if report.step % REPORT_EVERY == 0 {
            info!(
                step = report.step, corrections = session.corrections();
                "weights {:?}",
                session.perceptron().weights()
            );
        }
    }

    let target = session.target();
    let agreement = session.scatter().agreement(target).unwrap_or_default();

    println!("steps:       {}", session.steps());
    println!("corrections: {}", session.corrections());
    println!("weights:     {:?}", session.perceptron().weights());
    println!("target:      y = {}x + {}", target.slope, target.intercept);
    println!("agreement:   {:.2}%", agreement * 100.);
    println!("estimated boundary on {boundaries} of {steps} steps");

    Ok(())
}
