//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   callers (the `cli` binary, benches, examples). Breaking changes are allowed.

// Shapes and ids
pub use crate::shape::{IdGen, Shape, ShapeId, ShapeKind, Variant};
// Random generation
pub use crate::factory::{
    random_shape, FactoryParams, GeneratorError, ShapeFactory, DEFAULT_DIM_MAX, DEFAULT_DIM_MIN,
};
// Collections and the listing pipeline
pub use crate::canvas::Canvas;
pub use crate::driver::{run, DriverCfg, DriverError, RunSummary, BANNER};

