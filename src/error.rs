use thiserror::Error;

/// Errors raised for malformed input.
///
/// Geometric emptiness is never an error: an infeasible set of
/// constraints yields `None`, and the interval algebra is total over
/// canonical sets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Interval bounds are NaN or out of order.
    #[error("invalid interval [{min}, {max}]: bounds must be ordered and not NaN")]
    InvalidInterval { min: f64, max: f64 },

    /// A half-plane coefficient is infinite or NaN.
    #[error("half-plane coefficients must be finite: {a}·x + {b}·y <= {c}")]
    NonFiniteCoefficients { a: f64, b: f64, c: f64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
