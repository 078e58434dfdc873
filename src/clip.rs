//! Convex region construction from half-plane constraints.
//!
//! A convex polygon is intersected with one half-plane at a time using
//! a Sutherland–Hodgman sweep over its edges. Starting from a very large
//! square standing in for the whole plane, folding every constraint in
//! yields the (bounded) feasible region.
use geo::{coord, Coord, GeoFloat, Polygon};
use log::{debug, trace};

use crate::{
    geometry::polygon_from_vertices,
    utils::{default_bound, default_eps},
    HalfPlane,
};

/// Clip a convex polygon against a half-plane.
///
/// `poly` is a cyclic vertex list (not explicitly closed) describing a
/// convex region. The result is the vertex list of the intersection,
/// and is empty if the polygon lies entirely outside the half-plane.
/// Vertices on the border (within `eps`) are kept; such a vertex may
/// appear twice in a row, once as a crossing and once as an inside
/// vertex.
///
/// Non-convex input is not supported: the output is only guaranteed to
/// be correct when `poly` is convex.
pub fn clip_convex<T: GeoFloat>(poly: &[Coord<T>], hp: &HalfPlane<T>, eps: T) -> Vec<Coord<T>> {
    let n = poly.len();
    let mut output = Vec::with_capacity(n + 1);

    let border = hp.border();
    for i in 0..n {
        let p1 = poly[i];
        let p2 = poly[(i + 1) % n];

        // [p1, p2) crosses the border
        if let Some(cp) = border.cross_point_eps(p1, p2, eps) {
            output.push(cp);
        }
        // p2 is inside
        if hp.contains_eps(p2, eps) {
            output.push(p2);
        }
    }
    trace!("clip against {hp:?}: {n} -> {m} vertices", m = output.len());
    output
}

/// Builds convex regions as intersections of half-planes.
///
/// The unbounded plane is approximated by the square `[-bound, bound]²`,
/// so every result is bounded by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clipper<T: GeoFloat> {
    bound: T,
    eps: T,
}

impl<T: GeoFloat> Default for Clipper<T> {
    fn default() -> Self {
        Clipper {
            bound: default_bound(),
            eps: default_eps(),
        }
    }
}

impl<T: GeoFloat> Clipper<T> {
    pub fn new(bound: T, eps: T) -> Self {
        Clipper { bound, eps }
    }

    /// Replace the half side of the starting square.
    #[must_use]
    pub fn with_bound(self, bound: T) -> Self {
        Clipper { bound, ..self }
    }

    /// Replace the tolerance used for containment and crossings.
    #[must_use]
    pub fn with_eps(self, eps: T) -> Self {
        Clipper { eps, ..self }
    }

    #[inline]
    pub fn bound(&self) -> T {
        self.bound
    }

    #[inline]
    pub fn eps(&self) -> T {
        self.eps
    }

    /// The counter-clockwise square the fold starts from.
    pub fn bounding_square(&self) -> Vec<Coord<T>> {
        let b = self.bound;
        vec![
            coord! { x: -b, y: -b },
            coord! { x: b, y: -b },
            coord! { x: b, y: b },
            coord! { x: -b, y: b },
        ]
    }

    /// Vertices of the intersection of all `constraints`.
    ///
    /// Accepts plain half-planes as well as `Option<HalfPlane>` items. The
    /// result is `None` when there is no solution: some constraint is
    /// absent, or the running intersection becomes empty. With no
    /// constraints at all, the bounding square is returned.
    pub fn vertices<I, C>(&self, constraints: I) -> Option<Vec<Coord<T>>>
    where
        I: IntoIterator<Item = C>,
        C: Into<Option<HalfPlane<T>>>,
    {
        let mut poly = self.bounding_square();
        for (idx, constraint) in constraints.into_iter().enumerate() {
            let hp = match constraint.into() {
                Some(hp) => hp,
                None => {
                    debug!("constraint #{idx} is absent: no solution");
                    return None;
                }
            };
            poly = clip_convex(&poly, &hp, self.eps);
            if poly.is_empty() {
                debug!("constraint #{idx} ({hp:?}) excludes the region: no solution");
                return None;
            }
        }
        Some(poly)
    }

    /// Same as [`Clipper::vertices`], closed into a [`Polygon`].
    pub fn polygon<I, C>(&self, constraints: I) -> Option<Polygon<T>>
    where
        I: IntoIterator<Item = C>,
        C: Into<Option<HalfPlane<T>>>,
    {
        self.vertices(constraints)
            .map(|verts| polygon_from_vertices(&verts))
    }
}

/// Convex polygon of the intersection of `constraints`, using the
/// default [`Clipper`].
pub fn convex_polygon<T, I, C>(constraints: I) -> Option<Polygon<T>>
where
    T: GeoFloat,
    I: IntoIterator<Item = C>,
    C: Into<Option<HalfPlane<T>>>,
{
    Clipper::default().polygon(constraints)
}
