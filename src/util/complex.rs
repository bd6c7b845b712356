// internal utilities for dealing with Complex annoyances

use num::{Complex, Zero};

use crate::RealScalar;

/// formatting for Complex, because the derived implementation is not good
/// enough for rendering polynomials
pub(crate) fn complex_fmt<T: RealScalar>(c: &Complex<T>) -> String {
    let r = &c.re;
    let i = &c.im;
    if i.is_zero() {
        format!("{r}")
    } else if *i == T::one() {
        format!("({r}+i)")
    } else if *i < T::zero() {
        format!("({r}-i{})", -*i)
    } else {
        format!("({r}+i{i})")
    }
}
