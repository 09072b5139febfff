use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{boundary::VerticalPolicy, sampling::TargetLine, PerceptronErr, Result};

/// Everything a [`Session`](crate::Session) needs to know about the problem it learns.
///
/// Every field is optional in JSON, missing ones take the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Half the width of the sampling domain.
    pub x_bound: f32,
    /// Half the height of the sampling domain.
    pub y_bound: f32,
    /// The ground truth line.
    pub target: TargetLine,
    pub vertical_policy: VerticalPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            x_bound: 400.,
            y_bound: 300.,
            target: TargetLine::default(),
            vertical_policy: VerticalPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PerceptronErr::InvalidConfig(format!("cannot read '{}': {e}", path.display()))
        })?;

        Self::from_json(&content)
    }

    /// Checks the values serde can't.
    pub fn validate(&self) -> Result<()> {
        for (name, bound) in [("x_bound", self.x_bound), ("y_bound", self.y_bound)] {
            if !bound.is_finite() || bound <= 0. {
                return Err(PerceptronErr::InvalidConfig(format!(
                    "{name} must be finite and positive, got {bound}"
                )));
            }
        }

        let TargetLine { slope, intercept } = self.target;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(PerceptronErr::InvalidConfig(format!(
                "the target line must be finite, got y = {slope}x + {intercept}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_the_default() {
        let config = SessionConfig::from_json("{}").unwrap();

        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.x_bound, 400.);
        assert_eq!(config.y_bound, 300.);
        assert_eq!(config.target, TargetLine::new(0.5, 10.));
        assert_eq!(config.vertical_policy, VerticalPolicy::Skip);
    }

    #[test]
    fn partial_json() {
        let json = r#"{
            "y_bound": 400,
            "target": { "slope": -1.0, "intercept": 0.0 },
            "vertical_policy": "infinite_slope"
        }"#;

        let config = SessionConfig::from_json(json).unwrap();

        assert_eq!(config.x_bound, 400.);
        assert_eq!(config.y_bound, 400.);
        assert_eq!(config.target, TargetLine::new(-1., 0.));
        assert_eq!(config.vertical_policy, VerticalPolicy::InfiniteSlope);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(SessionConfig::from_json(r#"{ "x_bound": 0 }"#).is_err());
        assert!(SessionConfig::from_json(r#"{ "y_bound": -3.5 }"#).is_err());
        assert!(SessionConfig::from_json(r#"{ "vertical_policy": "guess" }"#).is_err());
        assert!(SessionConfig::from_json(r#"{ "x_bonud": 10 }"#).is_err());
        assert!(SessionConfig::from_json("not json").is_err());
    }

    #[test]
    fn partial_target_keeps_the_other_default() {
        let config = SessionConfig::from_json(r#"{ "target": { "slope": 2.0 } }"#).unwrap();

        assert_eq!(config.target, TargetLine::new(2., 10.));
    }

    #[test]
    fn missing_file() {
        let err = SessionConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, PerceptronErr::InvalidConfig(_)));
    }
}
