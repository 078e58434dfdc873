use geo::GeoFloat;

/// Default tolerance for containment, crossing and interval merging.
pub const DEFAULT_EPS: f64 = 1e-12;

/// Half the side of the square that stands in for the unbounded plane.
pub const DEFAULT_BOUND: f64 = 1e9;

/// The default tolerance in the scalar type `T`.
#[inline]
pub fn default_eps<T: GeoFloat>() -> T {
    T::from(DEFAULT_EPS).unwrap_or_else(T::epsilon)
}

#[inline]
pub(crate) fn default_bound<T: GeoFloat>() -> T {
    T::from(DEFAULT_BOUND).unwrap_or_else(T::infinity)
}

/// Lossy conversion used for error reporting.
#[inline]
pub(crate) fn to_f64<T: GeoFloat>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
