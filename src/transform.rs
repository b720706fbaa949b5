//! 2D transformation matrices for PDF content positioning.

use crate::units::*;
use pdf_writer::Content;

/// A PDF transformation matrix, where (0,0) is at the bottom-left.
///
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
/// Points are treated as row vectors, so `[x y 1] × M` maps a point.
///
/// # Composing transforms
///
/// `t.then(u)` applies `t` first and `u` second. This is also how a `cm` operator
/// composes with the current transformation matrix: the new CTM is `op.then(ctm)`.
///
/// ```
/// use graph_paper::{Transform, Pt};
///
/// // rotate a quarter turn, then move 72 points right
/// let transform = Transform::rotate_degrees(90.0).then(Transform::translate(Pt(72.0), Pt(0.0)));
/// let (x, y) = transform.apply(Pt(10.0), Pt(0.0));
/// assert!((*x - 72.0).abs() < 1e-4 && (*y - 10.0).abs() < 1e-4);
/// ```
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
            e: *x,
            f: *y,
            ..Self::identity()
        }
    }

    /// Create a counter-clockwise rotation transform (angle in radians)
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Transform {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a counter-clockwise rotation transform (angle in degrees)
    pub fn rotate_degrees(degrees: f32) -> Self {
        Self::rotate(degrees.to_radians())
    }

    /// Combine this transform with another (self * other): `self` applies first
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

    /// Map a point through this transform
    pub fn apply(&self, x: Pt, y: Pt) -> (Pt, Pt) {
        (
            Pt(self.a * *x + self.c * *y + self.e),
            Pt(self.b * *x + self.d * *y + self.f),
        )
    }

    /// Write the transform to a PDF content stream
    pub fn write_to_content(&self, content: &mut Content) {
        content.transform([self.a, self.b, self.c, self.d, self.e, self.f]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (Pt, Pt), b: (f32, f32)) -> bool {
        (*a.0 - b.0).abs() < 1e-4 && (*a.1 - b.1).abs() < 1e-4
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let t = Transform::rotate_degrees(90.0);
        assert!(close(t.apply(Pt(1.0), Pt(0.0)), (0.0, 1.0)));
        assert!(close(t.apply(Pt(0.0), Pt(1.0)), (-1.0, 0.0)));
    }

    #[test]
    fn then_applies_left_operand_first() {
        let t = Transform::translate(Pt(5.0), Pt(0.0)).then(Transform::rotate_degrees(90.0));
        // translated to (5, 0), then rotated onto the y axis
        assert!(close(t.apply(Pt(0.0), Pt(0.0)), (0.0, 5.0)));
    }

    #[test]
    fn identity_is_neutral() {
        let t = Transform::rotate(0.3).then(Transform::translate(Pt(2.0), Pt(-1.0)));
        assert_eq!(Transform::identity().then(t), t);
        assert_eq!(t.then(Transform::identity()), t);
    }
}
