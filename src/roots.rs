//! Simultaneous root finding with the Durand-Kerner (Weierstrass) method.
//!
//! All roots of the polynomial are refined at once: each guess is updated
//! with the Weierstrass correction, which divides the residual by the
//! product of the pairwise differences with every other guess. The update
//! for a pass only ever reads the previous pass's guesses, never the ones
//! computed within the same pass.
//!
//! The method converges fast for simple, well separated roots, but it is
//! not guaranteed to converge for every coefficient distribution (notably
//! polynomials whose leading coefficient dwarfs the others, and roots of
//! high multiplicity). Running out of iterations is therefore reported as a
//! best-effort result rather than an error, callers that need guaranteed
//! accuracy should check residuals with [`Poly::eval`].

use num::{Complex, One, Zero};

use crate::{
    util::casting::{f64_to_scalar, usize_to_scalar},
    Error, Linear, Poly, RealScalar, Result,
};

/// Default convergence tolerance, see [`durand_kerner`].
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Default iteration budget, see [`durand_kerner`].
pub const DEFAULT_MAX_ITER: usize = 1024;

/// Seed coordinates with a magnitude below this are flushed to exactly zero,
/// as near-subnormal components upset the elementary functions downstream.
const SEED_SNAP_EPSILON: f64 = 1e-10;

/// Guesses closer to each other than this are considered colliding.
const PROXIMITY_LIMIT: f64 = 1e-9;

/// Fixed offset applied to a colliding guess.
const NUDGE_RE: f64 = 1e-6;
const NUDGE_IM: f64 = 1e-6;

/// Place one initial guess per slot of `out`, evenly spaced on a circle.
///
/// The radius `(|c_first| / |c_last|)^(1/n)` estimates the geometric mean of
/// the root magnitudes from the first nonzero and the leading coefficient.
/// The angles are offset by half a step so that no guess starts exactly on
/// the positive real axis, where iterates of real polynomials tend to get
/// stuck.
pub fn initial_guesses_circle<T: RealScalar>(poly: &Poly<T>, out: &mut [Complex<T>]) {
    debug_assert!(poly.is_normalized());

    let first_nonzero = poly
        .as_slice()
        .iter()
        .find(|c| !c.is_zero())
        .copied()
        .unwrap_or_else(Complex::one);
    let n = usize_to_scalar::<T>(out.len());
    let radius = (first_nonzero.norm() / poly.leading().norm()).powf(n.recip());
    let base_angle = T::TAU() / n;
    let offset = T::PI() / (n + n);
    let snap = f64_to_scalar::<T>(SEED_SNAP_EPSILON);

    for (k, guess) in out.iter_mut().enumerate() {
        let angle = usize_to_scalar::<T>(k) * base_angle + offset;
        let mut z = Complex::from_polar(radius, angle);
        if z.re.abs() < snap {
            z.re = T::zero();
        }
        if z.im.abs() < snap {
            z.im = T::zero();
        }
        *guess = z;
    }
}

/// The fixed perturbation for colliding guesses.
fn nudge<T: RealScalar>() -> Complex<T> {
    Complex::new(f64_to_scalar(NUDGE_RE), f64_to_scalar(NUDGE_IM))
}

/// Push apart guesses that are within `limit` of an earlier guess.
///
/// The Weierstrass correction divides by the pairwise differences of the
/// guesses; identical guesses would divide by zero. The perturbation is a
/// fixed offset so that runs stay deterministic. A guess colliding with
/// several others accumulates one nudge per collision, which also separates
/// groups of three or more.
fn separate_guesses<T: RealScalar>(guesses: &mut [Complex<T>], limit: T) {
    for i in 0..guesses.len() {
        for j in (i + 1)..guesses.len() {
            if (guesses[i] - guesses[j]).norm() < limit {
                log::debug!("nudging guess {j}, too close to guess {i}");
                guesses[j] += nudge();
            }
        }
    }
}

/// Find all roots of a polynomial of degree 2 or higher with the
/// Durand-Kerner method.
///
/// `epsilon` is the convergence tolerance: iteration stops once no guess
/// changed in magnitude by more than this during a pass. Defaults to
/// [`DEFAULT_EPSILON`]. `max_iter` is the iteration budget and defaults to
/// [`DEFAULT_MAX_ITER`].
///
/// Seeds are taken from `initial_guesses` as far as it goes, remaining slots
/// are filled by [`initial_guesses_circle`]; pass `&[]` for the default
/// seeding. Roots are returned in seeding order, and coincident roots are
/// reported as many times as their multiplicity, without deduplication.
///
/// Exhausting the iteration budget is *not* an error: the most recent
/// approximations are returned and a warning is logged.
///
/// # Errors
/// - [`Error::InvalidDegree`] if the degree is below 2. Constant and linear
///   polynomials have trivial solutions and are left to the caller.
pub fn durand_kerner<T: RealScalar>(
    poly: &Poly<T>,
    epsilon: Option<T>,
    max_iter: Option<usize>,
    initial_guesses: &[Complex<T>],
) -> Result<Vec<Complex<T>>> {
    debug_assert!(poly.is_normalized());

    let degree = poly.degree();
    if degree < 2 {
        return Err(Error::InvalidDegree { degree });
    }
    let n = poly.degree_raw();

    // the Weierstrass correction below assumes a monic polynomial, scaling
    // the coefficients preserves the roots
    let mut poly = poly.clone();
    poly.make_monic();

    let epsilon = epsilon.unwrap_or_else(|| f64_to_scalar(DEFAULT_EPSILON));
    let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);
    let limit = f64_to_scalar::<T>(PROXIMITY_LIMIT);

    let mut current = vec![Complex::<T>::zero(); n];
    initial_guesses_circle(&poly, &mut current);
    for (slot, &given) in current.iter_mut().zip(initial_guesses) {
        *slot = given;
    }

    let mut next = current.clone();
    let mut iterations = 0usize;
    let mut converged = false;

    while iterations < max_iter && !converged {
        iterations += 1;

        // collisions make the correction denominator vanish, so they are
        // resolved before every pass, including the first (i.e. at seed time)
        separate_guesses(&mut current, limit);

        for i in 0..n {
            let guess = current[i];
            let denom: Complex<T> = current
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &other)| guess - other)
                .product();
            let correction = poly.eval(guess) / denom;
            if correction.re.is_finite() && correction.im.is_finite() {
                next[i] = guess - correction;
            } else {
                // a blown-up correction is kept out of the estimates
                next[i] = guess + nudge();
            }
        }

        let delta = current
            .iter()
            .zip(next.iter())
            .map(|(cur, nxt)| (cur.norm() - nxt.norm()).abs())
            .fold(T::zero(), T::max);
        converged = delta < epsilon;
        log::trace!("pass {iterations}: max magnitude change {delta}");

        std::mem::swap(&mut current, &mut next);
    }

    if converged {
        log::debug!("converged after {iterations} passes");
    } else {
        log::warn!(
            "no convergence within {max_iter} passes, returning the best approximations so far"
        );
    }
    Ok(current)
}

impl<T: RealScalar> Poly<T> {
    /// Find all roots of the polynomial, see [`durand_kerner`].
    ///
    /// # Errors
    /// - [`Error::InvalidDegree`] if the degree is below 2.
    pub fn roots(&self, epsilon: Option<T>, max_iter: Option<usize>) -> Result<Vec<Complex<T>>> {
        durand_kerner(self, epsilon, max_iter, &[])
    }

    /// Factor the polynomial into monic degree-one terms, one per root.
    ///
    /// Each factor is `x - root`, stored as a [`Linear`] with scale 1 and
    /// offset `-root`. See [`durand_kerner`] for the `epsilon` and
    /// `max_iter` parameters and the accuracy caveats.
    ///
    /// ```
    /// use poly_factor::poly;
    ///
    /// // 4x^4 - 16
    /// let p = poly![-16.0, 0.0, 0.0, 0.0, 4.0];
    /// let factors = p.factorize(None, None).unwrap();
    /// assert_eq!(factors.len(), 4);
    /// ```
    ///
    /// # Errors
    /// - [`Error::InvalidDegree`] if the degree is below 2.
    pub fn factorize(
        &self,
        epsilon: Option<T>,
        max_iter: Option<usize>,
    ) -> Result<Vec<Linear<T>>> {
        Ok(self
            .roots(epsilon, max_iter)?
            .into_iter()
            .map(|root| Linear::new(T::one(), -root))
            .collect())
    }
}
