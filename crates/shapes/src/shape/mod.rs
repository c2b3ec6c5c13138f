//! Shape values: a closed enum of four variants plus a process-unique id.
//!
//! Purpose
//! - Every shape reports a human-readable descriptor (`OVAL 3x4`, `CIRCLE 5`, ...)
//!   computed from its own fields.
//! - Ids come from an explicit `IdGen`; the convenience constructors use the
//!   process-wide one.
//!
//! Code cross-refs: `factory::ShapeFactory`, `canvas::Canvas`

mod ids;
mod types;

pub use ids::IdGen;
pub use types::{Shape, ShapeId, ShapeKind, Variant};
