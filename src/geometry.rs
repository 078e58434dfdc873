//! Glue between the core algorithms and `geo` geometries.
//!
//! Polygon boolean operations and bounding boxes are delegated to `geo`;
//! the functions here only build polygons from vertex lists, fold
//! collections of polygons, and walk geometry trees.
use geo::{
    BooleanOps, BoundingRect, Coord, GeoFloat, Geometry, LineString, MultiPolygon, Polygon, Rect,
};
use log::{debug, trace};

use crate::{Interval, IntervalSet, Result};

/// Close a vertex list into a [`Polygon`] without holes.
///
/// The vertices must trace the boundary in order; the first vertex
/// need not be repeated at the end. An empty list gives an empty
/// polygon.
pub fn polygon_from_vertices<T: GeoFloat>(vertices: &[Coord<T>]) -> Polygon<T> {
    // `Polygon::new` closes the exterior ring.
    Polygon::new(LineString::from(vertices.to_vec()), vec![])
}

/// Union of all the input polygons.
///
/// Folds from the empty multi-polygon, so an empty input gives an empty
/// result.
pub fn union_all<T, I, G>(geoms: I) -> MultiPolygon<T>
where
    T: GeoFloat,
    I: IntoIterator<Item = G>,
    G: Into<MultiPolygon<T>>,
{
    geoms
        .into_iter()
        .enumerate()
        .fold(MultiPolygon::new(vec![]), |acc, (idx, geom)| {
            let acc = acc.union(&geom.into());
            trace!("union #{idx}: {n} polygons", n = acc.0.len());
            acc
        })
}

/// Region common to all the input polygons.
///
/// An empty input gives an empty result. Stops early once the running
/// intersection is empty.
pub fn intersection_all<T, I, G>(geoms: I) -> MultiPolygon<T>
where
    T: GeoFloat,
    I: IntoIterator<Item = G>,
    G: Into<MultiPolygon<T>>,
{
    let mut iter = geoms.into_iter();
    let mut acc: MultiPolygon<T> = match iter.next() {
        Some(geom) => geom.into(),
        None => return MultiPolygon::new(vec![]),
    };
    for (idx, geom) in iter.enumerate() {
        if acc.0.is_empty() {
            debug!("intersection empty after {n} inputs", n = idx + 1);
            break;
        }
        acc = acc.intersection(&geom.into());
    }
    acc
}

/// Coordinates of every polygon ring in a geometry tree.
///
/// For each polygon (including those inside multi-polygons, nested
/// collections, rects and triangles) yields the exterior ring followed
/// by its interior rings. Rings are closed: the last coordinate repeats
/// the first. Non-areal geometries and empty rings are skipped.
pub fn rings<T: GeoFloat>(geometry: &Geometry<T>) -> Vec<Vec<Coord<T>>> {
    fn push_polygon<T: GeoFloat>(poly: &Polygon<T>, out: &mut Vec<Vec<Coord<T>>>) {
        std::iter::once(poly.exterior())
            .chain(poly.interiors())
            .filter(|ring| !ring.0.is_empty())
            .for_each(|ring| out.push(ring.0.clone()));
    }

    let mut out = vec![];
    let mut stack = vec![geometry];
    while let Some(geom) = stack.pop() {
        match geom {
            Geometry::Polygon(poly) => push_polygon(poly, &mut out),
            Geometry::MultiPolygon(mp) => mp.0.iter().for_each(|p| push_polygon(p, &mut out)),
            Geometry::Rect(rect) => push_polygon(&rect.to_polygon(), &mut out),
            Geometry::Triangle(tri) => push_polygon(&tri.to_polygon(), &mut out),
            // Reversed so that children are visited in order.
            Geometry::GeometryCollection(gc) => stack.extend(gc.0.iter().rev()),
            _ => {}
        }
    }
    out
}

/// Union of the x-extents of every part of a geometry tree.
///
/// Collections and multi-geometries are broken into their parts, and
/// each non-empty part contributes the x-range of its bounding box. The
/// result is the projection of the parts' boxes on the x-axis.
///
/// Fails with [`crate::Error::InvalidInterval`] if a part has NaN
/// coordinates.
pub fn x_domain<T: GeoFloat>(geometry: &Geometry<T>) -> Result<IntervalSet<T>> {
    let mut rects: Vec<Rect<T>> = vec![];
    let mut stack = vec![geometry];
    while let Some(geom) = stack.pop() {
        match geom {
            Geometry::GeometryCollection(gc) => stack.extend(gc.0.iter()),
            Geometry::MultiPolygon(mp) => {
                rects.extend(mp.0.iter().filter_map(|p| p.bounding_rect()))
            }
            Geometry::MultiLineString(mls) => {
                rects.extend(mls.0.iter().filter_map(|ls| ls.bounding_rect()))
            }
            Geometry::MultiPoint(mp) => rects.extend(mp.0.iter().map(|p| p.bounding_rect())),
            _ => rects.extend(geom.bounding_rect()),
        }
    }

    let mut domain = IntervalSet::empty();
    for rect in rects {
        let range = Interval::new(rect.min().x, rect.max().x)?;
        domain = domain.union(&range.into());
    }
    debug!("x-domain: {n} intervals", n = domain.len());
    Ok(domain)
}
