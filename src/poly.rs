use std::fmt::Display;

use num::{Complex, One, Zero};

use crate::{util::complex::complex_fmt, RealScalar};

/// A polynomial as a list of complex coefficients of ascending degree.
///
/// The coefficient at index `k` multiplies `x^k`, so index 0 is the constant
/// term and the last coefficient is the leading one. Polynomials are stored
/// in normalized form: high-order zero coefficients are trimmed on
/// construction. The zero polynomial keeps a single zero coefficient and has
/// degree -1 by convention.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<Complex<T>>);

impl<T: RealScalar> Poly<T> {
    /// Create a new polynomial from a slice of complex coefficients of
    /// ascending degree.
    #[must_use]
    pub fn new(coeffs: &[Complex<T>]) -> Self {
        Self(coeffs.to_vec()).normalize()
    }

    /// Create a new polynomial from a slice of real coefficients of
    /// ascending degree.
    ///
    /// ```
    /// # use poly_factor::{poly, Poly};
    /// let p = Poly::from_real_slice(&[1.0, 2.0]);
    /// assert_eq!(p, poly![1.0, 2.0]);
    /// ```
    #[must_use]
    pub fn from_real_slice(coeffs: &[T]) -> Self {
        Self(coeffs.iter().map(|&c| Complex::from(c)).collect()).normalize()
    }

    /// The number of stored coefficients, without checking pre-conditions.
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions.
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw() - 1
    }

    /// The degree of the polynomial (the highest exponent).
    ///
    /// Returns `-1` for the zero polynomial, whose degree is undefined; this
    /// follows the convention adopted by some authors.
    #[must_use]
    pub fn degree(&self) -> i64 {
        debug_assert!(self.is_normalized());
        if self.is_zero() {
            return -1;
        }
        self.degree_raw() as i64
    }

    pub(crate) fn is_normalized(&self) -> bool {
        let n = self.len_raw();
        if n == 0 {
            // empty coefficient lists are never stored
            return false;
        }
        // a constant is always normalized, as it may be just a constant zero
        if n == 1 {
            return true;
        }
        !self.0[n - 1].is_zero()
    }

    pub(crate) fn normalize(mut self) -> Self {
        while self.0.len() > 1 && self.0[self.0.len() - 1].is_zero() {
            self.0.pop();
        }
        if self.0.is_empty() {
            self.0.push(Complex::zero());
        }

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
        self
    }

    /// The leading coefficient.
    pub(crate) fn leading(&self) -> Complex<T> {
        self.0[self.len_raw() - 1]
    }

    /// Scale the polynomial in-place so the leading coefficient is 1.
    ///
    /// The roots are preserved.
    pub(crate) fn make_monic(&mut self) {
        debug_assert!(self.is_normalized());
        let lead = self.leading();
        if lead.is_one() {
            return;
        }
        for c in &mut self.0 {
            *c /= lead;
        }
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// Uses Horner's method, which is close to optimal for serial evaluation
    /// and avoids raising `x` to each power separately.
    ///
    /// ```
    /// use poly_factor::poly;
    /// use num::Complex;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(Complex::from(1.0)), Complex::from(6.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        debug_assert!(self.is_normalized());
        self.0
            .iter()
            .rev()
            .fold(Complex::zero(), |acc, &c| acc * x + c)
    }

    /// The coefficients of ascending degree, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.0
    }

    /// The coefficients of ascending degree, as a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Complex<T>> {
        self.0.clone()
    }
}

impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.0.iter().enumerate();
        if let Some((_, c)) = iter.next() {
            write!(f, "{}", complex_fmt(c))?;
        }
        for (i, c) in iter {
            write!(f, " + {}*x^{}", complex_fmt(c), i)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use num::{complex::Complex64, Complex, Zero};

    use crate::{poly, Poly, Poly64};

    #[test]
    fn normalize_trims_leading_zeros() {
        let p = Poly64::new(&[Complex::from(1.0), Complex::from(2.0), Complex::zero()]);
        assert_eq!(p, poly![1.0, 2.0]);
        assert_eq!(p.degree(), 1);
    }

    #[test]
    fn zero_poly_keeps_one_coefficient() {
        let p = Poly64::new(&[]);
        assert_eq!(p.as_slice(), &[Complex64::zero()]);
        assert_eq!(p.degree(), -1);
        assert!(p.is_normalized());
    }

    #[test]
    fn make_monic_scales_all_coefficients() {
        let mut p = poly![-32.0, 0.0, 8.0];
        p.make_monic();
        assert_eq!(p, poly![-4.0, 0.0, 1.0]);
    }

    #[test]
    fn eval_complex_poly_at_complex_points() {
        // (2+i)x^2 + 2i
        let p = poly![(0.0, 2.0), (0.0, 0.0), (2.0, 1.0)];
        assert_eq!(p.eval(Complex64::new(1.0, 0.0)), Complex64::new(2.0, 3.0));
        assert_eq!(p.eval(Complex64::new(0.0, 1.0)), Complex64::new(-2.0, 1.0));
    }

    #[test]
    fn eval_at_zero_is_constant_term() {
        let p = poly![4.0, 0.0, 1.0];
        assert_eq!(p.eval(Complex64::zero()), Complex64::from(4.0));
    }

    #[test]
    fn display() {
        let p = poly![(2.0, 0.0), (4.5, 0.0), (5.0, 1.0), (6.0, 1.5), (7.0, 2.0)];
        assert_eq!(
            p.to_string(),
            "2 + 4.5*x^1 + (5+i)*x^2 + (6+i1.5)*x^3 + (7+i2)*x^4".to_string()
        );
    }
}
