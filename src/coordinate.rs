use crate::units::*;
use derive_more::{Add, Sub};
use std::ops::Mul;

/// A point on the page, in millimetres from the bottom-left corner.
///
/// Coordinates are plain values: they are never mutated, only combined with
/// `+`, `-` and scalar `*` to derive new positions.
///
/// ```
/// use graph_paper::Coordinate;
///
/// let page = Coordinate::new(210.0, 297.0);
/// let margin = Coordinate::new(10.0, 10.0);
/// assert_eq!(page - margin, Coordinate::new(200.0, 287.0));
/// assert_eq!(2.0 * margin, Coordinate::new(20.0, 20.0));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Add, Sub)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Convert to PDF user space
    pub fn to_points(self) -> (Pt, Pt) {
        (Mm(self.x).into(), Mm(self.y).into())
    }
}

impl Mul<f32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, k: f32) -> Coordinate {
        Coordinate::new(self.x * k, self.y * k)
    }
}

impl Mul<Coordinate> for f32 {
    type Output = Coordinate;

    fn mul(self, c: Coordinate) -> Coordinate {
        c * self
    }
}

impl From<(f32, f32)> for Coordinate {
    fn from((x, y): (f32, f32)) -> Coordinate {
        Coordinate::new(x, y)
    }
}

impl From<(Mm, Mm)> for Coordinate {
    fn from((x, y): (Mm, Mm)) -> Coordinate {
        Coordinate::new(*x, *y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // small integers and halves keep every sum exact in f32
    const A: Coordinate = Coordinate::new(1.5, -2.0);
    const B: Coordinate = Coordinate::new(4.0, 8.5);
    const C: Coordinate = Coordinate::new(-3.0, 0.25);

    #[test]
    fn addition_is_associative_and_commutative() {
        assert_eq!((A + B) + C, A + (B + C));
        assert_eq!(A + B, B + A);
        assert_eq!(A + Coordinate::ORIGIN, A);
    }

    #[test]
    fn subtraction_undoes_addition() {
        assert_eq!((A + B) - B, A);
        assert_eq!(A - A, Coordinate::ORIGIN);
    }

    #[test]
    fn scalar_multiplication_distributes() {
        assert_eq!(2.0 * (A + B), 2.0 * A + 2.0 * B);
        assert_eq!((2.0 + 0.5) * C, 2.0 * C + 0.5 * C);
        assert_eq!(3.0 * (4.0 * A), (3.0 * 4.0) * A);
        assert_eq!(1.0 * B, B);
        assert_eq!(A * 2.0, 2.0 * A);
    }

    #[test]
    fn converts_to_points_at_72_per_inch() {
        let (x, y) = Coordinate::new(25.4, 0.0).to_points();
        assert!((*x - 72.0).abs() < 1e-4);
        assert_eq!(y, Pt(0.0));
    }
}
