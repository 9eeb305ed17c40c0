//! Input assumptions and the violations they raise.
//!
//! Every estimator states what it needs from its inputs. When a requirement
//! fails, the caller receives a [`Violation`] naming which assumption broke and
//! for which argument. When several hold at once, the reported one follows a
//! fixed priority: [`AssumptionId`] order first, then `x` before `y`.

use core::fmt;

use crate::estimators;

/// Kind of broken assumption, in reporting priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum AssumptionId {
    /// Sample is empty or contains NaN / infinite values.
    Validity,
    /// A parameter lies outside its legal range, or below its achievable floor.
    Domain,
    /// A value that must be strictly positive is not.
    Positivity,
    /// Spread is zero: the sample is tie-dominant.
    Sparity,
}

impl AssumptionId {
    /// Canonical lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validity => "validity",
            Self::Domain => "domain",
            Self::Positivity => "positivity",
            Self::Sparity => "sparity",
        }
    }
}

impl fmt::Display for AssumptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Subject {
    /// First sample.
    X,
    /// Second sample.
    Y,
    /// Requested misrate of a bounds procedure.
    Misrate,
    /// Requested quantile probability.
    Probability,
}

impl Subject {
    /// Canonical lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Misrate => "misrate",
            Self::Probability => "probability",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broken assumption together with the argument it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    pub id: AssumptionId,
    pub subject: Subject,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.id, self.subject)
    }
}

/// Error raised when an input does not satisfy an estimator's assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssumptionError {
    violation: Violation,
}

impl AssumptionError {
    pub fn new(id: AssumptionId, subject: Subject) -> Self {
        Self {
            violation: Violation { id, subject },
        }
    }

    pub fn validity(subject: Subject) -> Self {
        Self::new(AssumptionId::Validity, subject)
    }

    pub fn domain(subject: Subject) -> Self {
        Self::new(AssumptionId::Domain, subject)
    }

    pub fn positivity(subject: Subject) -> Self {
        Self::new(AssumptionId::Positivity, subject)
    }

    pub fn sparity(subject: Subject) -> Self {
        Self::new(AssumptionId::Sparity, subject)
    }

    pub fn violation(&self) -> Violation {
        self.violation
    }

    pub fn id(&self) -> AssumptionId {
        self.violation.id
    }

    pub fn subject(&self) -> Subject {
        self.violation.subject
    }
}

impl fmt::Display for AssumptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.violation)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AssumptionError {}

// =============================================================================
// Checks
// =============================================================================

/// Validity: non-empty and every value finite.
pub fn check_validity(values: &[f64], subject: Subject) -> Result<(), AssumptionError> {
    if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
        return Err(AssumptionError::validity(subject));
    }
    Ok(())
}

/// Positivity: every value strictly greater than zero.
pub fn check_positivity(values: &[f64], subject: Subject) -> Result<(), AssumptionError> {
    if values.iter().any(|&v| v <= 0.0) {
        return Err(AssumptionError::positivity(subject));
    }
    Ok(())
}

/// Sparity: at least two values and a strictly positive Spread.
///
/// Assumes `values` already passed [`check_validity`].
pub fn check_sparity(values: &[f64], subject: Subject) -> Result<(), AssumptionError> {
    if values.len() < 2 {
        return Err(AssumptionError::sparity(subject));
    }
    if estimators::raw_spread(values) <= 0.0 {
        return Err(AssumptionError::sparity(subject));
    }
    Ok(())
}

/// Misrate must be a number in `[0, 1]`.
pub fn check_misrate(misrate: f64) -> Result<(), AssumptionError> {
    if misrate.is_nan() || !(0.0..=1.0).contains(&misrate) {
        return Err(AssumptionError::domain(Subject::Misrate));
    }
    Ok(())
}

/// Quantile probability must be a number in `[0, 1]`.
pub fn check_probability(p: f64) -> Result<(), AssumptionError> {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return Err(AssumptionError::domain(Subject::Probability));
    }
    Ok(())
}
