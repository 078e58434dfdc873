use geo::{Coord, GeoFloat};

use crate::{
    utils::{default_eps, to_f64},
    Border, Error, Result,
};

/// A closed half-plane `a·x + b·y <= c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane<T: GeoFloat> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: GeoFloat> HalfPlane<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        HalfPlane { a, b, c }
    }

    /// Checked constructor: all coefficients must be finite.
    pub fn try_new(a: T, b: T, c: T) -> Result<Self> {
        if a.is_finite() && b.is_finite() && c.is_finite() {
            Ok(HalfPlane { a, b, c })
        } else {
            Err(Error::NonFiniteCoefficients {
                a: to_f64(a),
                b: to_f64(b),
                c: to_f64(c),
            })
        }
    }

    /// The bounding line `a·x + b·y = c`.
    #[inline]
    pub fn border(&self) -> Border<T> {
        Border::new(self.a, self.b, self.c)
    }

    /// Tolerant containment: points on the border are inside.
    #[inline]
    pub fn contains(&self, p: Coord<T>) -> bool {
        self.contains_eps(p, default_eps())
    }

    /// Containment with an explicit slack; `a·x + b·y <= c + eps`.
    #[inline]
    pub fn contains_eps(&self, p: Coord<T>, eps: T) -> bool {
        self.a * p.x + self.b * p.y <= self.c + eps
    }
}

impl<T: GeoFloat> From<[T; 3]> for HalfPlane<T> {
    fn from([a, b, c]: [T; 3]) -> Self {
        HalfPlane::new(a, b, c)
    }
}
