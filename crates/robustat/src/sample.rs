//! Validated sample container.

use std::cell::OnceCell;
use std::fmt;

use robustat_core::assumptions::{check_positivity, check_validity};
use robustat_core::math;
use robustat_core::selection::sorted_copy;
use robustat_core::{AssumptionError, Subject};

/// An immutable, non-empty sample of finite values.
///
/// Construction checks validity once, so estimators never see NaN, infinities,
/// or an empty input. The ascending copy is built on first use and cached.
#[derive(Clone)]
pub struct Sample {
    values: Vec<f64>,
    sorted: OnceCell<Vec<f64>>,
}

impl Sample {
    /// Wrap `values`, reporting `validity(x)` if they are empty or not finite.
    ///
    /// Build the second sample of a comparison with [`Sample::y`] so a bad
    /// value there is reported against `y`.
    pub fn new(values: Vec<f64>) -> Result<Self, AssumptionError> {
        Self::with_subject(values, Subject::X)
    }

    /// Wrap the second sample of a comparison, reporting `validity(y)`.
    pub fn y(values: Vec<f64>) -> Result<Self, AssumptionError> {
        Self::with_subject(values, Subject::Y)
    }

    /// Like [`Sample::new`], naming `subject` in the violation.
    pub fn with_subject(values: Vec<f64>, subject: Subject) -> Result<Self, AssumptionError> {
        check_validity(&values, subject)?;
        Ok(Self {
            values,
            sorted: OnceCell::new(),
        })
    }

    /// Values in their original order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Values in ascending order.
    pub fn sorted(&self) -> &[f64] {
        self.sorted.get_or_init(|| sorted_copy(&self.values))
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for the `len`/`is_empty` convention.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value.
    pub fn min(&self) -> f64 {
        self.sorted()[0]
    }

    /// Largest value.
    pub fn max(&self) -> f64 {
        self.sorted()[self.len() - 1]
    }

    /// Whether every value is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.min() > 0.0
    }

    /// Natural logarithm of every value.
    ///
    /// Fails with `positivity(subject)` if any value is zero or negative.
    pub fn ln(&self, subject: Subject) -> Result<Self, AssumptionError> {
        check_positivity(&self.values, subject)?;
        Ok(Self {
            values: self.values.iter().map(|&v| math::ln(v)).collect(),
            sorted: OnceCell::new(),
        })
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = AssumptionError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = AssumptionError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl fmt::Debug for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sample")
            .field("len", &self.values.len())
            .field("values", &self.values)
            .finish()
    }
}
