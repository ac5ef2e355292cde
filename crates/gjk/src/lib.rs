//! Two dimensional convex intersection test built on the Gilbert–Johnson–Keerthi algorithm.
//!
//! ```
//! use gjk::prelude::*;
//!
//! let a = Polygon::rectangle((2., 3.), 1., 2.);
//! let b = Polygon::rectangle((1., 3.), 2., 2.);
//! assert!(calculate(&a, &b).is_some());
//!
//! let far = Circle::new((10., 3.), 1.);
//! assert!(calculate(&a, &far).is_none());
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod math;
pub mod scenario;
pub mod shape;

pub mod prelude {
    pub use super::collision::{calculate, calculate_with, support, Collision, GjkOutcome};
    pub use super::config::{GjkConfig, GjkConfigBuilder};
    pub use super::error::{GjkError, GjkResult};
    pub use super::math::{vector::Vector, FloatNum};
    pub use super::scenario::{Scenario, ScenarioReport, ShapeDescription};
    pub use super::shape::{AnyShape, Circle, Polygon, Shape};
}
