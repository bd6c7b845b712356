use std::fmt::Display;

use num::{Complex, One, Zero};

use crate::{util::complex::complex_fmt, Poly, RealScalar};

/// A degree-one factor `scale * x + offset` with a real leading coefficient.
///
/// This is the building block [`Poly::factorize`](crate::Poly::factorize)
/// produces and [`Poly::from_factors`] consumes. Note that the stored
/// `offset` is the constant term, the root of the factor is `-offset/scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Linear<T: RealScalar> {
    pub scale: T,
    pub offset: Complex<T>,
}

impl<T: RealScalar> Linear<T> {
    #[must_use]
    pub const fn new(scale: T, offset: Complex<T>) -> Self {
        Self { scale, offset }
    }

    /// The value of `x` at which this factor evaluates to zero.
    ///
    /// ```
    /// use poly_factor::{complex, Linear};
    ///
    /// let f = Linear::new(2.0, complex!(-3.0));
    /// assert_eq!(f.root(), complex!(1.5));
    /// ```
    #[must_use]
    pub fn root(&self) -> Complex<T> {
        -self.offset / self.scale
    }

    /// Evaluate the factor at `x`.
    #[must_use]
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        x * self.scale + self.offset
    }
}

impl<T: RealScalar> Display for Linear<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        if self.scale != T::one() {
            write!(f, "{}", self.scale)?;
        }
        write!(f, "x")?;
        if !self.offset.is_zero() {
            if self.offset.im.is_zero() && self.offset.re < T::zero() {
                write!(f, " - {}", -self.offset.re)?;
            } else {
                write!(f, " + {}", complex_fmt(&self.offset))?;
            }
        }
        write!(f, ")")
    }
}

impl<T: RealScalar> Poly<T> {
    /// Expand a list of degree-one factors into the polynomial
    /// `(scale_0*x + offset_0) * (scale_1*x + offset_1) * ...`.
    ///
    /// This is the algebraic inverse of [`Poly::factorize`](Self::factorize):
    /// the result has one more coefficient than there are factors, the
    /// constant term is the product of all offsets and the leading
    /// coefficient the product of all scales. The factor list is taken in
    /// the order given, no sorting is applied.
    ///
    /// ```
    /// use poly_factor::{complex, poly, Linear, Poly};
    ///
    /// // (x - 3)(x + 2) == x^2 - x - 6
    /// let factors = [
    ///     Linear::new(1.0, complex!(-3.0)),
    ///     Linear::new(1.0, complex!(2.0)),
    /// ];
    /// assert_eq!(Poly::from_factors(&factors), poly![-6.0, -1.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_factors(factors: &[Linear<T>]) -> Self {
        factors
            .iter()
            .map(|f| Self::new(&[f.offset, Complex::from(f.scale)]))
            .fold(Self::one(), |acc, f| acc * f)
    }
}
