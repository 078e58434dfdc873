use std::cmp::Ordering;

use geo::GeoFloat;
use itertools::Itertools;
use log::trace;

use super::Interval;

/// Sort by `min` and merge intervals that overlap or touch within `eps`.
pub(super) fn normalize<T: GeoFloat>(input: Vec<Interval<T>>, eps: T) -> Vec<Interval<T>> {
    // Bounds are never NaN, so the ordering is total.
    let sorted = input
        .into_iter()
        .sorted_by(|a, b| a.min.partial_cmp(&b.min).unwrap_or(Ordering::Equal));
    merge_sorted(sorted, eps)
}

/// Merge step of [`normalize`] on input already sorted by `min`.
pub(super) fn merge_sorted<T, I>(sorted: I, eps: T) -> Vec<Interval<T>>
where
    T: GeoFloat,
    I: IntoIterator<Item = Interval<T>>,
{
    debug_assert!(eps >= T::zero(), "negative tolerance");
    sorted
        .into_iter()
        .coalesce(|cur, nxt| {
            if nxt.min <= cur.max + eps {
                Ok(Interval {
                    min: cur.min,
                    max: cur.max.max(nxt.max),
                })
            } else {
                Err((cur, nxt))
            }
        })
        .collect()
}

/// Two-pointer intersection of canonical sequences.
pub(super) fn intersect<T: GeoFloat>(
    a: &[Interval<T>],
    b: &[Interval<T>],
    eps: T,
) -> Vec<Interval<T>> {
    let mut out = Vec::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let (ra, rb) = (a[i], b[j]);

        let lo = ra.min.max(rb.min);
        let hi = ra.max.min(rb.max);
        if lo <= hi + eps {
            // `lo` may exceed `hi` by less than eps.
            out.push(Interval { min: lo, max: hi.max(lo) });
        }

        if ra.max < rb.max {
            i += 1;
        } else {
            j += 1;
        }
    }
    trace!("intersect: {n} x {m} -> {k}", n = a.len(), m = b.len(), k = out.len());
    merge_sorted(out, eps)
}

/// Set difference `a \ b` of canonical sequences.
pub(super) fn subtract<T: GeoFloat>(
    a: &[Interval<T>],
    b: &[Interval<T>],
    eps: T,
) -> Vec<Interval<T>> {
    let mut out = vec![];
    let mut j = 0;
    for ra in a {
        // Skip parts of b entirely to the left of ra.
        while j < b.len() && b[j].max < ra.min - eps {
            j += 1;
        }

        let mut cur = ra.min;
        for rb in b[j..].iter().take_while(|rb| rb.min <= ra.max + eps) {
            // Gap between cur and the start of rb survives.
            if rb.min > cur + eps {
                out.push(Interval {
                    min: cur,
                    max: ra.max.min(rb.min),
                });
            }
            cur = cur.max(rb.max);
            if cur >= ra.max - eps {
                break;
            }
        }

        if cur < ra.max - eps {
            out.push(Interval { min: cur, max: ra.max });
        }
    }
    trace!("subtract: {n} \\ {m} -> {k}", n = a.len(), m = b.len(), k = out.len());
    merge_sorted(out, eps)
}
