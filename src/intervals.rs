//! Canonical sets of closed intervals on the real line.
//!
//! An [`IntervalSet`] is kept sorted by lower bound with no two
//! intervals overlapping or touching (within a tolerance), so every
//! point set has a single representation. Set operations are linear
//! scans over the two operands and always return canonical sets.
use std::{
    iter::FromIterator,
    ops::{BitAnd, BitOr, Sub},
    slice,
};

use geo::GeoFloat;

use crate::{
    utils::{default_eps, to_f64},
    Error, Result,
};

mod ops;

/// A closed interval `[min, max]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: GeoFloat> {
    min: T,
    max: T,
}

impl<T: GeoFloat> Interval<T> {
    /// Fails with [`Error::InvalidInterval`] if either bound is NaN or
    /// `min > max`.
    pub fn new(min: T, max: T) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(Error::InvalidInterval {
                min: to_f64(min),
                max: to_f64(max),
            });
        }
        Ok(Interval { min, max })
    }

    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    #[inline]
    pub fn length(&self) -> T {
        self.max - self.min
    }

    #[inline]
    pub fn contains_eps(&self, x: T, eps: T) -> bool {
        self.min - eps <= x && x <= self.max + eps
    }
}

impl<T: GeoFloat> From<Interval<T>> for (T, T) {
    fn from(iv: Interval<T>) -> Self {
        (iv.min, iv.max)
    }
}

/// Immutable canonical union of closed intervals.
///
/// Invariants:
/// - sorted ascending by `min`;
/// - consecutive intervals are separated: `next.min > prev.max + eps`.
///
/// The empty sequence is the empty set. Equality is structural.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSet<T: GeoFloat> {
    intervals: Vec<Interval<T>>,
}

impl<T: GeoFloat> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: GeoFloat> IntervalSet<T> {
    pub fn empty() -> Self {
        IntervalSet { intervals: vec![] }
    }

    /// The set containing the single interval `[min, max]`.
    pub fn of(min: T, max: T) -> Result<Self> {
        Ok(Interval::new(min, max)?.into())
    }

    /// Normalize arbitrary (possibly overlapping, unsorted) intervals.
    pub fn from_intervals<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_intervals_eps(iter, default_eps())
    }

    /// As [`IntervalSet::from_intervals`], merging gaps up to `eps`.
    pub fn from_intervals_eps<I: IntoIterator<Item = Interval<T>>>(iter: I, eps: T) -> Self {
        IntervalSet {
            intervals: ops::normalize(iter.into_iter().collect(), eps),
        }
    }

    /// Normalize `(min, max)` pairs, failing on the first invalid one.
    pub fn try_from_pairs<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Result<Self> {
        let intervals = pairs
            .into_iter()
            .map(|(min, max)| Interval::new(min, max))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_intervals(intervals))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of disjoint intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    /// The intervals as `(min, max)` pairs.
    pub fn to_vec(&self) -> Vec<(T, T)> {
        self.intervals.iter().map(|&iv| iv.into()).collect()
    }

    /// Smallest interval covering the set, `None` if empty.
    pub fn bounds(&self) -> Option<Interval<T>> {
        let first = self.intervals.first()?;
        let last = self.intervals.last()?;
        Some(Interval {
            min: first.min,
            max: last.max,
        })
    }

    /// Sum of the lengths of the intervals.
    pub fn total_length(&self) -> T {
        self.intervals
            .iter()
            .fold(T::zero(), |acc, iv| acc + iv.length())
    }

    /// Point membership, with the default tolerance.
    pub fn contains(&self, x: T) -> bool {
        self.contains_eps(x, default_eps())
    }

    pub fn contains_eps(&self, x: T, eps: T) -> bool {
        // First interval whose upper end reaches x.
        let idx = self.intervals.partition_point(|iv| iv.max + eps < x);
        self.intervals
            .get(idx)
            .map_or(false, |iv| iv.contains_eps(x, eps))
    }

    pub fn union(&self, other: &Self) -> Self {
        self.union_eps(other, default_eps())
    }

    pub fn union_eps(&self, other: &Self, eps: T) -> Self {
        let mut all = Vec::with_capacity(self.len() + other.len());
        all.extend_from_slice(&self.intervals);
        all.extend_from_slice(&other.intervals);
        IntervalSet {
            intervals: ops::normalize(all, eps),
        }
    }

    pub fn intersect(&self, other: &Self) -> Self {
        self.intersect_eps(other, default_eps())
    }

    pub fn intersect_eps(&self, other: &Self, eps: T) -> Self {
        IntervalSet {
            intervals: ops::intersect(&self.intervals, &other.intervals, eps),
        }
    }

    /// Points of `self` not in `other`; the result is closed, so it
    /// keeps the endpoints it shares with `other`.
    ///
    /// Intervals of `self` no longer than the tolerance are dropped,
    /// even when `other` is empty.
    pub fn subtract(&self, other: &Self) -> Self {
        self.subtract_eps(other, default_eps())
    }

    pub fn subtract_eps(&self, other: &Self, eps: T) -> Self {
        IntervalSet {
            intervals: ops::subtract(&self.intervals, &other.intervals, eps),
        }
    }

    /// Union of many sets, folded left to right.
    pub fn union_all<I: IntoIterator<Item = Self>>(sets: I) -> Self {
        sets.into_iter()
            .fold(Self::empty(), |acc, set| acc.union(&set))
    }
}

impl<T: GeoFloat> From<Interval<T>> for IntervalSet<T> {
    fn from(iv: Interval<T>) -> Self {
        IntervalSet {
            intervals: vec![iv],
        }
    }
}

impl<T: GeoFloat> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_intervals(iter)
    }
}

impl<T: GeoFloat> FromIterator<IntervalSet<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = IntervalSet<T>>>(iter: I) -> Self {
        Self::union_all(iter)
    }
}

impl<'a, T: GeoFloat> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: GeoFloat> BitOr for &'a IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<'a, T: GeoFloat> BitAnd for &'a IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<'a, T: GeoFloat> Sub for &'a IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}
