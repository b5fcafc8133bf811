//! Defines network errors.

use thiserror::Error;

/// An alias for results returned by the network and its configuration.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// An error type for configuring and training a network.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum NetworkError {
    /// The number of hidden units must be at least one.
    #[error("Invalid unit count {0}, expected at least 1.")]
    InvalidUnitCount(usize),
    /// The learning rate must be a finite positive number.
    #[error("Invalid learning rate {0}, expected a finite value greater than 0.")]
    InvalidLearningRate(f64),
    /// The error threshold must be a finite non-negative number.
    #[error("Invalid maximum error {0}, expected a finite value of at least 0.")]
    InvalidMaxError(f64),
    /// A weight or bias range is not finite or has its bounds swapped.
    #[error("Invalid {name} range [{min}, {max}].")]
    InvalidRange {
        /// Which range was rejected.
        name: &'static str,
        /// The lower bound.
        min: f64,
        /// The upper bound.
        max: f64,
    },
    /// Training was requested before both the activation and its derivative were set.
    #[error("The activation function and its derivative must be set before training.")]
    MissingActivation,
    /// Training was requested before the units were created.
    #[error("The network has no units, call initialize before training.")]
    NotInitialized,
    /// Training was requested on a table without samples.
    #[error("The network has no samples to train on.")]
    EmptyData,
    /// The error stopped being a finite number.
    #[error("Training diverged at iteration {iteration}.")]
    Diverged {
        /// The iteration at which the error became non-finite.
        iteration: usize,
    },
}
