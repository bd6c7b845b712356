use num::cast;

use crate::RealScalar;

/// Cast with loss of precision, explicitly clamping out of bounds values
/// instead of panicking.
pub(crate) fn usize_to_scalar<T: RealScalar>(x: usize) -> T {
    cast(x).unwrap_or_else(T::infinity)
}

/// Convert an `f64` constant to a scalar, falling back to machine epsilon
/// when the value is not representable.
pub(crate) fn f64_to_scalar<T: RealScalar>(x: f64) -> T {
    cast(x).unwrap_or_else(T::epsilon)
}
