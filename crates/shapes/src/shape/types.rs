//! Shape types and descriptors.
//!
//! - `Variant`: the four kinds, in factory selector order.
//! - `ShapeKind`: a variant together with its own dimension fields.
//! - `Shape`: a `ShapeKind` stamped with an id at construction.

use super::IdGen;
use std::fmt;

/// Process-unique shape identifier, assigned in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub(crate) u64);

impl ShapeId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of shape kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Oval,
    Circle,
    Rectangle,
    Square,
}

impl Variant {
    /// All variants, indexed by the factory's selector value.
    pub const ALL: [Variant; 4] = [
        Variant::Oval,
        Variant::Circle,
        Variant::Rectangle,
        Variant::Square,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Variant::Oval => "OVAL",
            Variant::Circle => "CIRCLE",
            Variant::Rectangle => "RECTANGLE",
            Variant::Square => "SQUARE",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A variant with its dimensions. Circles and squares carry a single value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Oval {
        horizontal_radius: u32,
        vertical_radius: u32,
    },
    Circle {
        radius: u32,
    },
    Rectangle {
        length: u32,
        width: u32,
    },
    Square {
        side: u32,
    },
}

impl ShapeKind {
    pub fn variant(&self) -> Variant {
        match self {
            ShapeKind::Oval { .. } => Variant::Oval,
            ShapeKind::Circle { .. } => Variant::Circle,
            ShapeKind::Rectangle { .. } => Variant::Rectangle,
            ShapeKind::Square { .. } => Variant::Square,
        }
    }

    /// Descriptor string, e.g. `RECTANGLE 4x7`.
    pub fn dimensions(&self) -> String {
        self.to_string()
    }

    /// Numeric dimension fields in declaration order.
    #[cfg(test)]
    pub(crate) fn magnitudes(&self) -> Vec<u32> {
        match *self {
            ShapeKind::Oval {
                horizontal_radius,
                vertical_radius,
            } => vec![horizontal_radius, vertical_radius],
            ShapeKind::Circle { radius } => vec![radius],
            ShapeKind::Rectangle { length, width } => vec![length, width],
            ShapeKind::Square { side } => vec![side],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.variant().label();
        match *self {
            ShapeKind::Oval {
                horizontal_radius,
                vertical_radius,
            } => write!(f, "{label} {horizontal_radius}x{vertical_radius}"),
            ShapeKind::Circle { radius } => write!(f, "{label} {radius}"),
            ShapeKind::Rectangle { length, width } => write!(f, "{label} {length}x{width}"),
            ShapeKind::Square { side } => write!(f, "{label} {side}"),
        }
    }
}

/// A shape with its id. Not `Clone`: an id belongs to exactly one value.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
}

impl Shape {
    /// Stamp `kind` with the next id from `ids`.
    pub fn new(kind: ShapeKind, ids: &IdGen) -> Self {
        Self {
            id: ids.next_id(),
            kind,
        }
    }

    pub fn oval(horizontal_radius: u32, vertical_radius: u32) -> Self {
        Self::new(
            ShapeKind::Oval {
                horizontal_radius,
                vertical_radius,
            },
            &IdGen::shared(),
        )
    }

    pub fn circle(radius: u32) -> Self {
        Self::new(ShapeKind::Circle { radius }, &IdGen::shared())
    }

    pub fn rectangle(length: u32, width: u32) -> Self {
        Self::new(ShapeKind::Rectangle { length, width }, &IdGen::shared())
    }

    pub fn square(side: u32) -> Self {
        Self::new(ShapeKind::Square { side }, &IdGen::shared())
    }

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    pub fn dimensions(&self) -> String {
        self.kind.dimensions()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape {}: {}", self.id, self.kind)
    }
}
