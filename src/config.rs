//! Training hyperparameters.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// The smallest number of iterations a run can be limited to.
pub const MIN_ITERATIONS: usize = 1;

/// The largest number of iterations a run can be limited to.
pub const MAX_ITERATIONS: usize = 50_000;

/// A closed range from which a weight or bias is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    /// The lower bound.
    pub min: f64,
    /// The upper bound.
    pub max: f64,
}

impl WeightRange {
    /// Create a range, without validating it.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check that both bounds are finite and ordered, and that the width of the range is finite.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidRange`] naming the range otherwise.
    pub fn validate(&self, name: &'static str) -> Result<()> {
        if self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && (self.max - self.min).is_finite()
        {
            Ok(())
        } else {
            Err(NetworkError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Check whether the value lies within the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

impl From<RangeInclusive<f64>> for WeightRange {
    fn from(range: RangeInclusive<f64>) -> Self {
        let (min, max) = range.into_inner();
        Self::new(min, max)
    }
}

/// How the starting weights of the units are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSeeding {
    /// Draw one set of weights and start every unit from it.
    ///
    /// Units that start equal receive equal gradients, so they stay equal for the whole run and
    /// a network with several units behaves like one unit with a scaled output weight.
    #[default]
    Shared,
    /// Draw a separate set of weights for every unit.
    PerUnit,
}

/// Hyperparameters of a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Step size of the gradient descent.
    pub learning_rate: f64,
    /// Number of hidden units.
    pub unit_count: usize,
    /// Upper limit on the number of iterations of a run.
    pub max_iterations: usize,
    /// A run stops once the error is at or below this value.
    pub max_error: f64,
    /// Range of the starting output weights.
    pub output_weight_range: WeightRange,
    /// Range of the starting input weights.
    pub input_weight_range: WeightRange,
    /// Range of the starting biases.
    pub bias_range: WeightRange,
    /// How starting weights are shared between units.
    pub seeding: UnitSeeding,
    /// Emit a progress event every this many iterations, 0 disables it.
    pub log_interval: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            unit_count: 1,
            max_iterations: 1000,
            max_error: 1e-4,
            output_weight_range: WeightRange::default(),
            input_weight_range: WeightRange::default(),
            bias_range: WeightRange::default(),
            seeding: UnitSeeding::default(),
            log_interval: 0,
        }
    }
}

impl TrainingConfig {
    /// Check every hyperparameter, returning the first invalid one.
    ///
    /// `max_iterations` is not checked since it is clamped, see [`clamp_iterations`].
    ///
    /// # Errors
    ///
    /// Returns the error for the first hyperparameter that is out of its domain.
    pub fn validate(&self) -> Result<()> {
        validate_learning_rate(self.learning_rate)?;
        validate_unit_count(self.unit_count)?;
        validate_max_error(self.max_error)?;
        self.output_weight_range.validate("output weight")?;
        self.input_weight_range.validate("input weight")?;
        self.bias_range.validate("bias")
    }
}

pub(crate) fn validate_learning_rate(rate: f64) -> Result<()> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidLearningRate(rate))
    }
}

pub(crate) fn validate_unit_count(count: usize) -> Result<()> {
    if count > 0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidUnitCount(count))
    }
}

pub(crate) fn validate_max_error(error: f64) -> Result<()> {
    if error.is_finite() && error >= 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidMaxError(error))
    }
}

/// Pull an iteration limit into `[MIN_ITERATIONS, MAX_ITERATIONS]`.
#[must_use]
pub fn clamp_iterations(iterations: usize) -> usize {
    iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS)
}
