//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use num::{complex::Complex64, Complex};

use crate::Linear;

/// Deterministic stream of uniform `f64` values in `[min, max)`.
pub struct RandStreamR64 {
    state: Rng,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64().mul_add(self.max - self.min, self.min))
    }
}

/// Deterministic stream of complex values uniform over a rectangle.
pub struct RandStreamC64Cartesian {
    state: Rng,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            state: Rng::with_seed(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = self.state.f64().mul_add(self.max_re - self.min_re, self.min_re);
        let im = self.state.f64().mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex::new(re, im))
    }
}

/// Generate one test case with known well separated roots.
///
/// Draws `degree` roots from `roots_stream`, redrawing any root that lands
/// within 0.5 of an earlier one so that matching found roots back to the
/// expected ones stays unambiguous, and pairs each with a scale from
/// `scale_stream`. Returns the factor list and the expected roots.
pub fn test_case_factors(
    roots_stream: &mut impl Iterator<Item = Complex64>,
    scale_stream: &mut impl Iterator<Item = f64>,
    degree: usize,
) -> (Vec<Linear<f64>>, Vec<Complex64>) {
    const SEPARATION: f64 = 0.5;

    let mut roots: Vec<Complex64> = Vec::with_capacity(degree);
    while roots.len() < degree {
        let candidate = roots_stream
            .next()
            .expect("rng stream should be infinite");
        if roots
            .iter()
            .all(|r| (r - candidate).norm() >= SEPARATION)
        {
            roots.push(candidate);
        }
    }

    let factors = roots
        .iter()
        .zip(scale_stream)
        .map(|(&root, scale)| Linear::new(scale, -root * scale))
        .collect();
    (factors, roots)
}

/// Check that all roots have been found, order independently.
///
/// Each expected root is matched with the nearest remaining found root and
/// the pair must be within `tol` of each other.
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}
