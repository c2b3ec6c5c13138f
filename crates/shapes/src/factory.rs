//! Random shape factory.
//!
//! Purpose
//! - Produce one uniformly chosen `Variant` per call, each dimension drawn
//!   independently and uniformly from `[dim_min, dim_max]` (default `[1, 100]`).
//! - Seeded factories are reproducible; `from_entropy` is not.
//!
//! Model
//! - The selector is a draw in `[0, Variant::ALL.len())` used as an index into
//!   `Variant::ALL`, so there is no fallback branch.
//! - Ids come from the factory's `IdGen` (process-wide unless `with_ids` is used).

use crate::shape::{IdGen, Shape, ShapeKind, Variant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_DIM_MIN: u32 = 1;
pub const DEFAULT_DIM_MAX: u32 = 100;

/// Error type for factory configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid factory params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Inclusive bounds for every drawn dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactoryParams {
    pub dim_min: u32,
    pub dim_max: u32,
}

impl Default for FactoryParams {
    fn default() -> Self {
        Self {
            dim_min: DEFAULT_DIM_MIN,
            dim_max: DEFAULT_DIM_MAX,
        }
    }
}

impl FactoryParams {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.dim_min == 0 {
            return Err(GeneratorError::invalid("dim_min must be > 0"));
        }
        if self.dim_min > self.dim_max {
            return Err(GeneratorError::invalid("dim_min <= dim_max required"));
        }
        Ok(())
    }

    #[inline]
    fn sample_dim<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.dim_min..=self.dim_max)
    }
}

/// Draw one shape from a caller-owned `rng`.
pub fn random_shape<R: Rng>(
    rng: &mut R,
    params: &FactoryParams,
    ids: &IdGen,
) -> Result<Shape, GeneratorError> {
    params.validate()?;
    Ok(draw_shape(rng, params, ids))
}

// `params` must already be validated.
fn draw_shape<R: Rng>(rng: &mut R, params: &FactoryParams, ids: &IdGen) -> Shape {
    let variant = Variant::ALL[rng.gen_range(0..Variant::ALL.len())];
    let kind = match variant {
        Variant::Oval => ShapeKind::Oval {
            horizontal_radius: params.sample_dim(rng),
            vertical_radius: params.sample_dim(rng),
        },
        Variant::Circle => ShapeKind::Circle {
            radius: params.sample_dim(rng),
        },
        Variant::Rectangle => ShapeKind::Rectangle {
            length: params.sample_dim(rng),
            width: params.sample_dim(rng),
        },
        Variant::Square => ShapeKind::Square {
            side: params.sample_dim(rng),
        },
    };
    Shape::new(kind, ids)
}

/// Stateful shape source.
pub struct ShapeFactory {
    params: FactoryParams,
    rng: StdRng,
    ids: Arc<IdGen>,
}

impl ShapeFactory {
    pub fn new(params: FactoryParams, seed: u64) -> Result<Self, GeneratorError> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: FactoryParams) -> Result<Self, GeneratorError> {
        Self::with_rng(params, StdRng::from_entropy())
    }

    fn with_rng(params: FactoryParams, rng: StdRng) -> Result<Self, GeneratorError> {
        params.validate()?;
        Ok(Self {
            params,
            rng,
            ids: IdGen::shared(),
        })
    }

    /// Replace the id source (e.g. a run-scoped generator).
    pub fn with_ids(mut self, ids: Arc<IdGen>) -> Self {
        self.ids = ids;
        self
    }

    pub fn generate_random_shape(&mut self) -> Shape {
        draw_shape(&mut self.rng, &self.params, &self.ids)
    }

    /// `n` shapes in creation order.
    pub fn generate(&mut self, n: usize) -> Vec<Shape> {
        (0..n).map(|_| self.generate_random_shape()).collect()
    }
}
