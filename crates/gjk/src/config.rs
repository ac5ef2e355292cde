use gjk_macro_tools::{Builder, Fields};
use serde::{Deserialize, Serialize};

use crate::math::vector::Vector;

pub const DEFAULT_MAX_ITERATIONS: usize = 32;

pub const DEFAULT_INITIAL_DIRECTION: Vector = Vector::new(0., 1.);

/// knobs of a single gjk run
#[derive(Clone, Debug, PartialEq, Builder, Fields, Serialize, Deserialize)]
#[r(copy)]
#[serde(default, deny_unknown_fields)]
pub struct GjkConfig {
    /// upper bound of support queries after the first one, guards against malformed shapes
    #[default(DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// first search direction, a zero vector falls back to straight up
    #[default(DEFAULT_INITIAL_DIRECTION)]
    initial_direction: Vector,
}

impl GjkConfig {
    pub(crate) fn effective_initial_direction(&self) -> Vector {
        if self.initial_direction.is_zero() || !self.initial_direction.is_finite() {
            DEFAULT_INITIAL_DIRECTION
        } else {
            self.initial_direction
        }
    }
}
