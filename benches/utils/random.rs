#![allow(dead_code)]

use std::f64::consts::PI;

use geo::{Coord, Rect};

use rand::{distributions::Uniform, Rng};
use rand_distr::Standard;

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coord<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coord {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

/// `n` points on a random circle, in counter-clockwise order.
pub fn random_convex_polygon<R: Rng>(rng: &mut R, n: usize) -> Vec<Coord<f64>> {
    let center = uniform_point(rng, Rect::new([-50., -50.], [50., 50.]));
    let radius = 1. + 49. * rng.sample::<f64, _>(Standard);

    let mut angles: Vec<f64> = (0..n)
        .map(|_| rng.sample::<f64, _>(Standard) * 2. * PI)
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    angles
        .into_iter()
        .map(|t| Coord {
            x: center.x + radius * t.cos(),
            y: center.y + radius * t.sin(),
        })
        .collect()
}

/// Coefficients `[a, b, c]` of a half-plane with unit normal.
pub fn random_half_plane<R: Rng>(rng: &mut R) -> [f64; 3] {
    let angle = rng.sample::<f64, _>(Standard) * 2. * PI;
    let c = rng.sample(Uniform::new(-100., 100.));
    [angle.cos(), angle.sin(), c]
}

/// Half-planes tangent to a circle of radius `r` at the origin; their
/// intersection is a polygon with `n` sides.
pub fn tangent_half_planes<R: Rng>(rng: &mut R, n: usize, r: f64) -> Vec<[f64; 3]> {
    (0..n)
        .map(|_| {
            let angle = rng.sample::<f64, _>(Standard) * 2. * PI;
            [angle.cos(), angle.sin(), r]
        })
        .collect()
}

/// `n` random `(min, max)` pairs within `[0, span]`.
pub fn random_intervals<R: Rng>(rng: &mut R, n: usize, span: f64) -> Vec<(f64, f64)> {
    let max_len = span / n.max(1) as f64;
    (0..n)
        .map(|_| {
            let min = span * rng.sample::<f64, _>(Standard);
            let len = max_len * rng.sample::<f64, _>(Standard);
            (min, (min + len).min(span))
        })
        .collect()
}
