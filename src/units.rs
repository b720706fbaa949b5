//! Units of length used when laying out a page.
//!
//! PDF content is always written in PostScript points ([`Pt`], 1/72 of an inch).
//! Geometry is easier to reason about in millimetres ([`Mm`]), which convert
//! into points with [`From`] / [`Into`].
//!
//! ```
//! use graph_paper::{Mm, Pt};
//!
//! let width: Pt = Mm(25.4).into();
//! assert!((*width - 72.0).abs() < 1e-4);
//! ```

use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, MulAssign, Sub, SubAssign};
use std::ops::{Div, Mul, Neg};

/// Points per millimetre
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// A length in PostScript points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    MulAssign,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

/// A length in millimetres
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    MulAssign,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct Mm(pub f32);

macro_rules! scalar_ops {
    ($unit:ident) => {
        impl Mul<f32> for $unit {
            type Output = $unit;

            fn mul(self, rhs: f32) -> $unit {
                $unit(self.0 * rhs)
            }
        }

        impl Mul<$unit> for f32 {
            type Output = $unit;

            fn mul(self, rhs: $unit) -> $unit {
                $unit(self * rhs.0)
            }
        }

        impl Div<f32> for $unit {
            type Output = $unit;

            fn div(self, rhs: f32) -> $unit {
                $unit(self.0 / rhs)
            }
        }

        impl Neg for $unit {
            type Output = $unit;

            fn neg(self) -> $unit {
                $unit(-self.0)
            }
        }
    };
}

scalar_ops!(Pt);
scalar_ops!(Mm);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * PT_PER_MM)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Mm {
        Mm(pt.0 / PT_PER_MM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_inch_of_millimetres_is_72_points() {
        assert!((*Pt::from(Mm(25.4)) - 72.0).abs() < 1e-4);
        assert!((*Mm::from(Pt(72.0)) - 25.4).abs() < 1e-4);
    }

    #[test]
    fn millimetres_survive_a_trip_through_points() {
        let mm = Mm(297.0);
        let back: Mm = Pt::from(mm).into();
        assert!((*back - *mm).abs() < 1e-3);
    }

    #[test]
    fn scalar_arithmetic_keeps_the_unit() {
        assert_eq!(Mm(0.1) * 3.0, 3.0 * Mm(0.1));
        assert_eq!(Pt(10.0) / 4.0, Pt(2.5));
        assert_eq!(Mm(3.0) - Mm(1.0) + Mm(0.5), Mm(2.5));
        assert_eq!(-Pt(1.0), Pt(-1.0));
    }
}
