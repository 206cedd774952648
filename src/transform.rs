//! 2D transformation matrices for glyph positioning.

use crate::units::*;

/// A transformation matrix for positioning glyphs in page space.
///
/// Uses the standard PDF transformation matrix where (0,0) is at the bottom-left.
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
///
/// # Composing transforms
///
/// Transforms can be chained using [`then`](Transform::then) or the builder method
/// [`with_translate`](Transform::with_translate). Operations are applied in the
/// order they're chained. [`pre_translate`](Transform::pre_translate) instead
/// applies a translation in the *untransformed* (glyph) space, which is how a
/// pen position is advanced between glyphs of a scaled run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation transform
    pub fn translate(x: Pt, y: Pt) -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: *x,
            f: *y,
        }
    }

    /// Create a scaling transform
    pub fn scale(sx: f32, sy: f32) -> Self {
        Transform {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Combine this transform with another (self * other)
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: Pt, y: Pt) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// Translate in pre-transform space: the offset (tx, ty) is mapped through
    /// the linear part of the matrix before being added. A `pre_translate` of
    /// one glyph advance on a transform scaled by the font size moves the pen
    /// by the advance *at that size*.
    pub fn pre_translate(self, tx: f32, ty: f32) -> Self {
        Transform {
            e: self.e + tx * self.a + ty * self.c,
            f: self.f + tx * self.b + ty * self.d,
            ..self
        }
    }
}
