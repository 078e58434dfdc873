use geo::{Coord, GeoFloat};
use log::trace;

use crate::utils::default_eps;

/// An infinite line `a·x + b·y = c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border<T: GeoFloat> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: GeoFloat> Border<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Border { a, b, c }
    }

    /// Intersect with the directed segment from `p1` to `p2`.
    ///
    /// The segment is half-open: it includes `p1` but not `p2`, i.e. it
    /// is the set `p1 + t·(p2 - p1)` for `t` in `[0, 1)`. Walking the
    /// edges of a closed ring thus reports every crossing exactly once,
    /// even when the line passes through a shared vertex.
    ///
    /// Returns `None` if the segment is parallel to the line (within the
    /// default tolerance) or does not reach it.
    #[inline]
    pub fn cross_point(&self, p1: Coord<T>, p2: Coord<T>) -> Option<Coord<T>> {
        self.cross_point_eps(p1, p2, default_eps())
    }

    /// Same as [`Border::cross_point`] with an explicit parallelism
    /// tolerance.
    pub fn cross_point_eps(&self, p1: Coord<T>, p2: Coord<T>, eps: T) -> Option<Coord<T>> {
        // Substituting p1 + t·d into the line equation gives
        //   t·(a·dx + b·dy) = c - a·x1 - b·y1
        let d = p2 - p1;
        let denom = self.a * d.x + self.b * d.y;
        let nom = self.c - self.a * p1.x - self.b * p1.y;

        if denom.abs() < eps {
            return None;
        }

        let t = nom / denom;
        if t >= T::zero() && t < T::one() {
            let pt = p1 + d * t;
            trace!("segment {p1:?} -> {p2:?} crosses at t = {t:?}: {pt:?}");
            Some(pt)
        } else {
            None
        }
    }

    /// Signed residual `a·x + b·y - c` of a point.
    #[inline]
    pub fn residual(&self, p: Coord<T>) -> T {
        self.a * p.x + self.b * p.y - self.c
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::coord;

    use super::*;

    #[test]
    fn test_cross_point_interior() {
        // x = 1
        let line = Border::new(1., 0., 1.);
        let pt = line
            .cross_point(coord! { x: 0., y: 0. }, coord! { x: 4., y: 2. })
            .expect("segment crosses x = 1");
        assert_relative_eq!(pt.x, 1.);
        assert_relative_eq!(pt.y, 0.5);
    }

    #[test]
    fn test_cross_point_half_open() {
        let line = Border::new(1., 0., 1.);
        let start = coord! { x: 1., y: 0. };
        let end = coord! { x: 1., y: 5. };
        let other = coord! { x: 3., y: 0. };

        // Start point is included.
        assert_eq!(line.cross_point(start, other), Some(start));
        // End point is excluded.
        assert_eq!(line.cross_point(other, start), None);
        // Lying on the line: parallel.
        assert_eq!(line.cross_point(start, end), None);
    }

    #[test]
    fn test_cross_point_misses() {
        let line = Border::new(0., 1., 10.);
        assert_eq!(
            line.cross_point(coord! { x: 0., y: 0. }, coord! { x: 0., y: 5. }),
            None
        );
        assert_eq!(
            line.cross_point(coord! { x: 0., y: 5. }, coord! { x: 0., y: 0. }),
            None
        );
    }

    #[test]
    fn test_shared_vertex_reported_once() {
        // A ring whose vertex (1, 0) lies on x = 1 sees the crossing
        // only on the edge leaving that vertex.
        let line = Border::new(1., 0., 1.);
        let ring = [
            coord! { x: 0., y: 0. },
            coord! { x: 1., y: 0. },
            coord! { x: 2., y: 1. },
            coord! { x: 0., y: 1. },
        ];
        let crossings: Vec<_> = (0..ring.len())
            .filter_map(|i| line.cross_point(ring[i], ring[(i + 1) % ring.len()]))
            .collect();
        assert_eq!(crossings.len(), 2);
        assert_eq!(crossings[0], coord! { x: 1., y: 0. });
        assert_relative_eq!(crossings[1].x, 1.);
        assert_relative_eq!(crossings[1].y, 1.);
    }

    #[test]
    fn test_eps_controls_parallelism() {
        let line = Border::new(1e-6, 1., 1e-7);
        let p1 = coord! { x: 0., y: 0. };
        let p2 = coord! { x: 1., y: 0. };
        // denom = 1e-6: parallel for a coarse tolerance only.
        assert!(line.cross_point_eps(p1, p2, 1e-3).is_none());
        let pt = line.cross_point_eps(p1, p2, 1e-12).expect("crosses at t = 0.1");
        assert_relative_eq!(pt.x, 0.1, epsilon = 1e-9);
        assert_relative_eq!(line.residual(p1), -1e-7);
    }
}
