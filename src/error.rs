use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The iterative factorizer needs at least a quadratic to work with.
    /// Degree 0 and 1 polynomials have trivial solutions and are left to the
    /// caller; the degree of the zero polynomial is -1 by convention.
    #[error("cannot factor a polynomial of degree {degree}, degree 2 or higher is required")]
    InvalidDegree { degree: i64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias for results with the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
