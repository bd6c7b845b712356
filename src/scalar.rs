use std::fmt;

use num::traits::{Float, FloatConst, NumAssign};

/// The scalar types that can back a [`Poly`](crate::Poly).
///
/// This collects everything the solvers need from the underlying real type:
/// field operations and elementary functions ([`Float`]), the circle
/// constants used by the seeding heuristic ([`FloatConst`]) and compound
/// assignment ([`NumAssign`]). Adding support for another float type means
/// implementing these, the algorithms themselves never branch on the
/// concrete type.
pub trait RealScalar: Float + FloatConst + NumAssign + fmt::Debug + fmt::Display {}

impl<T> RealScalar for T where T: Float + FloatConst + NumAssign + fmt::Debug + fmt::Display {}
