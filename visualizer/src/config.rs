use std::{env, fs, time::Duration};

use anyhow::{bail, Context, Result};
use perceptron::{SessionConfig, TargetLine, VerticalPolicy};
use serde::Deserialize;

/// Environment variable overriding the configured seed.
pub const SEED_VAR: &str = "PERCEPTRON_SEED";

/// Steps a headless run takes when `max_steps` is not configured.
pub const HEADLESS_STEPS: usize = 5000;

/// The visualizer's configuration, read from an optional JSON file.
///
/// Every field is optional in JSON, missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Milliseconds between two training steps.
    pub tick_interval_ms: u64,
    /// Stop training after this many steps, `None` runs until quit.
    pub max_steps: Option<usize>,
    /// Seed for the weights and the samples, `None` seeds from the OS.
    pub seed: Option<u64>,
    pub x_bound: f32,
    pub y_bound: f32,
    pub target: TargetLine,
    pub vertical_policy: VerticalPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        let session = SessionConfig::default();

        Self {
            tick_interval_ms: 100,
            max_steps: None,
            seed: None,
            x_bound: session.x_bound,
            y_bound: session.y_bound,
            target: session.target,
            vertical_policy: session.vertical_policy,
        }
    }
}

impl AppConfig {
    /// Loads the configuration file if any, applies the environment overrides and validates
    /// the result.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or a value is out of range.
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content =
                    fs::read_to_string(path).with_context(|| format!("cannot read '{path}'"))?;
                Self::from_json(&content).with_context(|| format!("invalid config '{path}'"))?
            }
            None => Self::default(),
        };

        if let Ok(seed) = env::var(SEED_VAR) {
            config.seed = Some(
                seed.parse()
                    .with_context(|| format!("{SEED_VAR} must be an unsigned integer"))?,
            );
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON configuration without validating it.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be positive");
        }

        if self.max_steps == Some(0) {
            bail!("max_steps must be positive");
        }

        self.session().validate()?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// The part of the configuration the learning session cares about.
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            x_bound: self.x_bound,
            y_bound: self.y_bound,
            target: self.target,
            vertical_policy: self.vertical_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::from_json("{}").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.max_steps, None);
        assert_eq!(config.session(), SessionConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_file() {
        let json = r#"{
            "tick_interval_ms": 20,
            "max_steps": 1000,
            "seed": 7,
            "x_bound": 100,
            "y_bound": 50,
            "target": { "slope": 2.0, "intercept": -5.0 },
            "vertical_policy": "infinite_slope"
        }"#;

        let config = AppConfig::from_json(json).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
        assert_eq!(config.max_steps, Some(1000));
        assert_eq!(config.seed, Some(7));

        let session = config.session();
        assert_eq!(session.x_bound, 100.);
        assert_eq!(session.y_bound, 50.);
        assert_eq!(session.target, TargetLine::new(2., -5.));
        assert_eq!(session.vertical_policy, VerticalPolicy::InfiniteSlope);
    }

    #[test]
    fn shipped_config_is_valid() {
        let config = AppConfig::from_json(include_str!("../../configs/steep.json")).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.session().target, TargetLine::new(2., -40.));
    }

    #[test]
    fn invalid_values() {
        for json in [
            r#"{ "tick_interval_ms": 0 }"#,
            r#"{ "max_steps": 0 }"#,
            r#"{ "x_bound": -10 }"#,
        ] {
            let config = AppConfig::from_json(json).unwrap();
            assert!(config.validate().is_err(), "{json}");
        }

        assert!(AppConfig::from_json(r#"{ "tick": 10 }"#).is_err());
        assert!(AppConfig::from_json(r#"{ "tick_interval_ms": -1 }"#).is_err());
    }
}
