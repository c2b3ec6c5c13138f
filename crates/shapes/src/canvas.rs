//! Canvas: an insertion-ordered shape collection with unique descriptors.
//!
//! The canvas is built once and is read-only afterwards. Uniqueness is keyed on
//! the full descriptor string (label included), not on the numeric fields.

use crate::shape::Shape;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
    rejected: usize,
}

impl Canvas {
    /// Keep each shape in input order unless an earlier kept shape has the same descriptor.
    pub fn new<I>(shapes: I) -> Self
    where
        I: IntoIterator<Item = Shape>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept = Vec::new();
        let mut rejected = 0;
        for shape in shapes {
            if seen.insert(shape.dimensions()) {
                kept.push(shape);
            } else {
                rejected += 1;
            }
        }
        Self {
            shapes: kept,
            rejected,
        }
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of input shapes dropped as duplicates.
    #[inline]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

impl<'a> IntoIterator for &'a Canvas {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
