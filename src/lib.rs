//! Half-plane clipping and interval algebra on top of `geo`.
//!
//! 1. [Convex Regions](#convex-regions)
//! 1. [Interval Sets](#interval-sets)
//! 1. [Geometry Helpers](#geometry-helpers)
//!
//! # Convex Regions
//!
//! A [`HalfPlane`] is a linear constraint `a·x + b·y <= c`. The
//! intersection of a list of half-planes is a convex region, computed by
//! clipping a huge square (standing in for the whole plane) against each
//! constraint in turn with a Sutherland–Hodgman sweep. See
//! [`clip_convex`] for the single step and [`Clipper`] for the fold.
//!
//! ```rust
//! use geo::Area;
//! use geo_halfplanes::{convex_polygon, HalfPlane};
//!
//! // x >= 0, y >= 0, x + y <= 10
//! let constraints: Vec<HalfPlane<f64>> = vec![
//!     HalfPlane::new(-1., 0., 0.),
//!     HalfPlane::new(0., -1., 0.),
//!     HalfPlane::new(1., 1., 10.),
//! ];
//! let triangle = convex_polygon(constraints).unwrap();
//! assert!((triangle.unsigned_area() - 50.).abs() < 1e-5);
//!
//! // x <= 0 and x >= 1 have no solution.
//! let none = convex_polygon(vec![HalfPlane::new(1., 0., 0.), HalfPlane::new(-1., 0., -1.)]);
//! assert!(none.is_none());
//! ```
//!
//! # Interval Sets
//!
//! An [`IntervalSet`] is a canonical (sorted, merged, disjoint) union of
//! closed intervals supporting union, intersection and difference in
//! linear time.
//!
//! ```rust
//! use geo_halfplanes::IntervalSet;
//!
//! let a = IntervalSet::try_from_pairs(vec![(1., 3.), (2., 5.), (8., 10.)]).unwrap();
//! assert_eq!(a.to_vec(), vec![(1., 5.), (8., 10.)]);
//!
//! let b = IntervalSet::of(2., 9.).unwrap();
//! assert_eq!((&a & &b).to_vec(), vec![(2., 5.), (8., 9.)]);
//! assert_eq!((&a - &b).to_vec(), vec![(1., 2.), (9., 10.)]);
//! ```
//!
//! # Geometry Helpers
//!
//! Thin wrappers over `geo`: [`polygon_from_vertices`], the folds
//! [`union_all`] and [`intersection_all`], ring extraction with
//! [`rings`], the x-axis projection [`x_domain`], and [`to_svg`].
//!
//! Tolerance-dependent operations use [`DEFAULT_EPS`]; each has an
//! `_eps` variant (or a builder setting) taking the tolerance explicitly.

mod utils;
pub use utils::{default_eps, DEFAULT_BOUND, DEFAULT_EPS};

mod error;
pub use error::{Error, Result};

mod border;
pub use border::Border;

mod half_plane;
pub use half_plane::HalfPlane;

pub mod clip;
pub use clip::{clip_convex, convex_polygon, Clipper};

pub mod intervals;
pub use intervals::{Interval, IntervalSet};

pub mod geometry;
pub use geometry::{intersection_all, polygon_from_vertices, rings, union_all, x_domain};

mod svg;
pub use svg::to_svg;

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;
