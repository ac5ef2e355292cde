//! Data driven intersection tests.
//!
//! A scenario names two shapes, optionally the expected answer and a [`GjkConfig`]. Scenarios
//! are read from json, either a single object or an array of them:
//!
//! ```json
//! {
//!   "name": "overlapping rectangles",
//!   "a": { "type": "rectangle", "center": { "x": 2.0, "y": 3.0 }, "width": 1.0, "height": 2.0 },
//!   "b": { "type": "circle", "center": { "x": 1.0, "y": 3.0 }, "radius": 1.0 },
//!   "expect_collision": true
//! }
//! ```

use std::{fmt::Display, path::Path};

use gjk_macro_tools::Fields;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    collision::{calculate_with, GjkOutcome},
    config::GjkConfig,
    error::{GjkError, GjkResult},
    math::{vector::Vector, FloatNum},
    shape::{ensure_finite, AnyShape, Circle, Polygon},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Polygon {
        vertices: Vec<Vector>,
    },
    Rectangle {
        center: Vector,
        width: FloatNum,
        height: FloatNum,
    },
    Circle {
        center: Vector,
        radius: FloatNum,
    },
}

impl ShapeDescription {
    pub fn build(&self) -> GjkResult<AnyShape> {
        let shape: AnyShape = match self {
            ShapeDescription::Polygon { vertices } => Polygon::try_new(vertices.clone())?.into(),
            ShapeDescription::Rectangle {
                center,
                width,
                height,
            } => {
                ensure_finite(center, "rectangle center")?;
                for (what, extent) in [("width", width), ("height", height)] {
                    if !extent.is_finite() || *extent < 0. {
                        return Err(GjkError::InvalidShape(format!(
                            "rectangle {what} {extent} must be finite and not negative"
                        )));
                    }
                }
                Polygon::rectangle(*center, *width, *height).into()
            }
            ShapeDescription::Circle { center, radius } => {
                Circle::try_new(*center, *radius)?.into()
            }
        };
        Ok(shape)
    }
}

#[derive(Clone, Debug, PartialEq, Fields, Serialize, Deserialize)]
#[r]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    name: String,
    a: ShapeDescription,
    b: ShapeDescription,
    #[r(copy)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expect_collision: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<GjkConfig>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, a: ShapeDescription, b: ShapeDescription) -> Self {
        Self {
            name: name.into(),
            a,
            b,
            expect_collision: None,
            config: None,
        }
    }

    pub fn with_expectation(mut self, expect_collision: bool) -> Self {
        self.expect_collision = Some(expect_collision);
        self
    }

    pub fn with_config(mut self, config: GjkConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// parse one scenario object or an array of them
    pub fn from_json(text: &str) -> GjkResult<Vec<Scenario>> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let scenarios = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            vec![serde_json::from_value(value)?]
        };
        Ok(scenarios)
    }

    pub fn from_file(path: impl AsRef<Path>) -> GjkResult<Vec<Scenario>> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn run(&self) -> GjkResult<ScenarioReport> {
        let a = self.a.build()?;
        let b = self.b.build()?;

        let config = self.config.clone().unwrap_or_default();

        let outcome = match calculate_with(&a, &b, &config) {
            GjkOutcome::Collision(_) => ScenarioOutcome::Collision,
            GjkOutcome::Separated => ScenarioOutcome::Separated,
            GjkOutcome::IterationLimit { iterations } => {
                ScenarioOutcome::IterationLimit { iterations }
            }
        };

        debug!("scenario {:?}: {}", self.name, outcome);

        Ok(ScenarioReport {
            name: self.name.clone(),
            outcome,
            expect_collision: self.expect_collision,
        })
    }
}

/// owned form of [`GjkOutcome`], the shapes of a scenario do not outlive the run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Collision,
    Separated,
    IterationLimit { iterations: usize },
}

impl ScenarioOutcome {
    #[inline]
    pub fn is_collision(&self) -> bool {
        matches!(self, ScenarioOutcome::Collision)
    }
}

impl Display for ScenarioOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioOutcome::Collision => f.write_str("collision"),
            ScenarioOutcome::Separated => f.write_str("no collision"),
            ScenarioOutcome::IterationLimit { iterations } => {
                f.write_str(&format!("no collision (gave up after {iterations} iterations)"))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Fields)]
#[r]
pub struct ScenarioReport {
    name: String,
    #[r(copy)]
    outcome: ScenarioOutcome,
    #[r(copy)]
    expect_collision: Option<bool>,
}

impl ScenarioReport {
    /// `None` when the scenario carries no expectation
    pub fn matches_expectation(&self) -> Option<bool> {
        self.expect_collision
            .map(|expected| expected == self.outcome.is_collision())
    }
}

impl Display for ScenarioReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("{}: {}", self.name, self.outcome))?;
        match self.matches_expectation() {
            Some(true) => f.write_str(" [ok]"),
            Some(false) => f.write_str(" [unexpected]"),
            None => Ok(()),
        }
    }
}
