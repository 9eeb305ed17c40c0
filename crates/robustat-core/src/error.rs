//! Crate-wide error type.

use core::fmt;

use crate::assumptions::AssumptionError;

/// Errors returned by estimators and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An input broke an estimator's assumptions.
    Assumption(AssumptionError),

    /// The cross-sample quantile search hit its iteration cap.
    ///
    /// Every step lands a bracket end on an actual pairwise difference, so this
    /// only happens on pathological input.
    Convergence {
        /// 1-based rank being searched for.
        rank: usize,
        /// Iterations spent before giving up.
        iterations: usize,
    },
}

impl Error {
    /// The assumption violation, if this is one.
    pub fn assumption(&self) -> Option<&AssumptionError> {
        match self {
            Self::Assumption(err) => Some(err),
            Self::Convergence { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assumption(err) => write!(f, "assumption violated: {}", err),
            Self::Convergence { rank, iterations } => write!(
                f,
                "quantile search for rank {} did not converge in {} iterations",
                rank, iterations
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Assumption(err) => Some(err),
            Self::Convergence { .. } => None,
        }
    }
}

impl From<AssumptionError> for Error {
    fn from(err: AssumptionError) -> Self {
        Self::Assumption(err)
    }
}

/// Result type for estimators and bounds.
pub type Result<T> = core::result::Result<T, Error>;
