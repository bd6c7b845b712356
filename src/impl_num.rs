// Implementation of numeric operator traits for polynomials

use std::ops::{Add, Mul, Neg, Sub};

use itertools::{EitherOrBoth, Itertools};
use num::{Complex, One, Zero};

use crate::{util::linalg::convolve_1d, Poly, RealScalar};

impl<T: RealScalar> Zero for Poly<T> {
    fn zero() -> Self {
        Self(vec![Complex::zero()])
    }

    fn is_zero(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_zero()
    }
}

impl<T: RealScalar> One for Poly<T> {
    fn one() -> Self {
        Self(vec![Complex::one()])
    }
}

impl<T: RealScalar> Add<&Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        // missing high-order terms of the shorter operand are implicit zeros
        let coeffs = self
            .0
            .iter()
            .zip_longest(rhs.0.iter())
            .map(|p| match p {
                EitherOrBoth::Both(&l, &r) => l + r,
                EitherOrBoth::Left(&l) => l,
                EitherOrBoth::Right(&r) => r,
            })
            .collect();
        Self(coeffs).normalize()
    }
}

impl<T: RealScalar> Add for Poly<T> {
    type Output = Self;

    /// ```
    /// use poly_factor::poly;
    ///
    /// let c1 = poly![1.0, 2.0, 3.0];
    /// let c2 = poly![3.0, 2.0, 1.0];
    /// assert_eq!(c1 + c2, poly![4.0; 3]);
    /// ```
    fn add(self, rhs: Self) -> Self::Output {
        self + &rhs
    }
}

impl<T: RealScalar> Sub<&Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let coeffs = self
            .0
            .iter()
            .zip_longest(rhs.0.iter())
            .map(|p| match p {
                EitherOrBoth::Both(&l, &r) => l - r,
                EitherOrBoth::Left(&l) => l,
                EitherOrBoth::Right(&r) => -r,
            })
            .collect();
        Self(coeffs).normalize()
    }
}

impl<T: RealScalar> Sub for Poly<T> {
    type Output = Self;

    /// ```
    /// use poly_factor::poly;
    ///
    /// let c1 = poly![1.0, 2.0, 3.0];
    /// let c2 = poly![3.0, 2.0, 1.0];
    /// assert_eq!(c1.clone() - c2.clone(), poly![-2.0, 0.0, 2.0]);
    /// assert_eq!(c2 - c1, poly![2.0, 0.0, -2.0]);
    /// ```
    fn sub(self, rhs: Self) -> Self::Output {
        self - &rhs
    }
}

impl<T: RealScalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        Self(convolve_1d(&self.0, &rhs.0)).normalize()
    }
}

impl<T: RealScalar> Mul for Poly<T> {
    type Output = Self;

    /// ```
    /// use poly_factor::poly;
    ///
    /// let p1 = poly![1.0, 2.0, 3.0];
    /// let p2 = poly![3.0, 2.0, 1.0];
    /// assert_eq!(p1 * p2, poly![3.0, 8.0, 14.0, 8.0, 3.0]);
    /// ```
    fn mul(self, rhs: Self) -> Self::Output {
        self * &rhs
    }
}

impl<T: RealScalar> Mul<&Complex<T>> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Complex<T>) -> Self::Output {
        Self(self.0.iter().map(|&c| c * rhs).collect()).normalize()
    }
}

impl<T: RealScalar> Mul<Complex<T>> for Poly<T> {
    type Output = Self;

    /// ```
    /// use poly_factor::poly;
    /// use num::Complex;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p * Complex::from(2.0), poly![2.0, 4.0, 6.0]);
    /// ```
    fn mul(self, rhs: Complex<T>) -> Self::Output {
        self.mul(&rhs)
    }
}

impl<T: RealScalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.iter().map(|&c| -c).collect())
    }
}
