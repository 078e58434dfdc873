use std::fmt::Display;

use geo::{BoundingRect, Coord, GeoFloat, Geometry};
use itertools::Itertools;

use crate::geometry::rings;

/// Render the polygon rings of a geometry as a minimal SVG document.
///
/// The view box matches the bounding box of the geometry. Coordinates
/// are shifted so the box starts at the origin and the y-axis is flipped
/// (positive y points up). Rings are drawn as black outlines without
/// fill.
///
/// Returns an empty string for empty geometries and for geometries whose
/// bounding box has zero width or height.
pub fn to_svg<T: GeoFloat + Display>(geometry: &Geometry<T>) -> String {
    let rect = match geometry.bounding_rect() {
        Some(rect) => rect,
        None => return String::new(),
    };
    let (min, max) = (rect.min(), rect.max());
    let (width, height) = (rect.width(), rect.height());
    if width == T::zero() || height == T::zero() {
        return String::new();
    }

    let paths: String = rings(geometry)
        .iter()
        .filter_map(|ring| path_for_ring(ring, min.x, max.y))
        .collect();
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {width} {height}'>\n\
         \x20 <g stroke='black' fill='none'>\n\
         {paths}\
         \x20 </g>\n\
         </svg>"
    )
}

/// A `<path>` element tracing `coords` in the flipped frame with
/// origin `(min_x, max_y)`; `None` for rings of fewer than 2 points.
fn path_for_ring<T: GeoFloat + Display>(coords: &[Coord<T>], min_x: T, max_y: T) -> Option<String> {
    if coords.len() < 2 {
        return None;
    }
    let d = coords
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{x} {y}", x = c.x - min_x, y = max_y - c.y)
        })
        .join(" ");
    Some(format!("    <path d='{d} z' />\n"))
}

#[cfg(test)]
mod tests {
    use geo::{coord, Line, Polygon};
    use wkt::TryFromWkt;

    use super::*;
    use crate::geometry::polygon_from_vertices;

    #[test]
    fn test_triangle_svg() {
        let tri: Geometry<f64> = Polygon::<f64>::try_from_wkt_str("POLYGON((0 0,10 0,0 10,0 0))")
            .expect("valid wkt")
            .into();
        let svg = to_svg(&tri);
        assert_eq!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 10 10'>\n\
             \x20 <g stroke='black' fill='none'>\n\
             \x20   <path d='M0 10 L10 10 L0 0 L0 10 z' />\n\
             \x20 </g>\n\
             </svg>"
        );
    }

    #[test]
    fn test_holes_get_paths() {
        let holed: Geometry<f64> = Polygon::<f64>::try_from_wkt_str(
            "POLYGON((1 1,5 1,5 5,1 5,1 1),(2 2,3 2,3 3,2 3,2 2))",
        )
        .expect("valid wkt")
        .into();
        let svg = to_svg(&holed);
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("viewBox='0 0 4 4'"));
        // The hole starts at (2, 2): shifted by min_x = 1, flipped at max_y = 5.
        assert!(svg.contains("<path d='M1 3 "));
    }

    #[test]
    fn test_degenerate_is_empty() {
        let empty: Geometry<f64> = polygon_from_vertices::<f64>(&[]).into();
        assert_eq!(to_svg(&empty), "");

        let flat: Geometry<f64> =
            Line::new(coord! { x: 0., y: 1. }, coord! { x: 5., y: 1. }).into();
        assert_eq!(to_svg(&flat), "");
    }
}
