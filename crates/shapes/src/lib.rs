//! Shapes, a random shape factory, and a deduplicating canvas.
//!
//! Layout
//! - `shape`: the closed shape enum, descriptors, and the atomic id source.
//! - `factory`: seeded or entropy-backed random shape generation.
//! - `canvas`: insertion-ordered collection keyed by descriptor.
//! - `driver`: the banner + listing pipeline used by the `cli` binary.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod api;
pub mod canvas;
pub mod driver;
pub mod factory;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use canvas::Canvas;
pub use shape::{IdGen, Shape, ShapeId, ShapeKind, Variant};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::driver::{run, DriverCfg, DriverError, RunSummary, BANNER};
    pub use crate::factory::{random_shape, FactoryParams, GeneratorError, ShapeFactory};
    pub use crate::shape::{IdGen, Shape, ShapeId, ShapeKind, Variant};
}
