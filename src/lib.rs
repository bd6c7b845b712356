#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
//! Numeric factorization of real and complex polynomials.
//!
//! A polynomial is stored as a list of complex coefficients of ascending
//! degree ([`Poly`]). Factoring is done with the Durand-Kerner (Weierstrass)
//! method, which approximates all roots simultaneously, see the [`roots`]
//! module for the details and the tuning knobs.
//!
//! ```
//! use poly_factor::poly;
//!
//! // x^2 - x - 6 == (x - 3)(x + 2)
//! let p = poly![-6.0, -1.0, 1.0];
//! let factors = p.factorize(None, None).unwrap();
//! assert_eq!(factors.len(), 2);
//! for f in &factors {
//!     assert!(p.eval(f.root()).norm() < 1e-9);
//! }
//! ```

pub use num::Complex;

mod scalar;
pub use scalar::RealScalar;

mod error;
pub use error::{Error, Result};

mod poly;
pub use poly::Poly;

mod factor;
pub use factor::Linear;

mod impl_num;

pub mod roots;

mod util;

#[doc(hidden)]
pub mod __testing {
    //! Testing utilities, do not depend on any of these in production!
    pub use crate::util::testing::{
        check_roots, test_case_factors, RandStreamC64Cartesian, RandStreamR64,
    };
}

/// A polynomial with 64-bit floating point coefficients
pub type Poly64 = Poly<f64>;

/// A polynomial with 32-bit floating point coefficients
pub type Poly32 = Poly<f32>;

/// Shorthand for [`Complex::new`], with a real-only single argument form.
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::Complex::from($re)
    };
    ($re:expr, $im:expr) => {
        $crate::Complex::new($re, $im)
    };
}

/// Shorthand for creating a [`Poly`] from real or `(re, im)` coefficients
/// of ascending degree.
#[macro_export]
macro_rules! poly {
    ($elem:expr; $n:expr) => {
        $crate::Poly::new(&vec![$crate::Complex::from($elem); $n])
    };
    ($(($re:expr, $im:expr)),+ $(,)?) => {
        $crate::Poly::new(&[$($crate::Complex::new($re, $im)),+])
    };
    ($($coeff:expr),+ $(,)?) => {
        $crate::Poly::new(&[$($crate::Complex::from($coeff)),+])
    };
}
