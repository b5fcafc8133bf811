//! Fits a scalar function with a single layer of hidden units trained by batch gradient descent.
//!
//! A [`Network`] owns a [`SampleTable`] of `(input, expected output)` samples and a set of
//! [`Unit`]s sharing one [`Activation`]. Each unit computes `w_out * f(w_in * x + b)` and the
//! network predicts the sum over all units.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use unitfit::{Activation, Network, SampleTable, TrainingConfig};
//!
//! let mut network = Network::from_config(TrainingConfig::default()).unwrap();
//! network.set_network_functions(Activation::IDENTITY);
//! network.set_data(&SampleTable::linspace(|x| 2.0 * x, 0.0, 1.0, 5));
//! network.initialize(&mut StdRng::seed_from_u64(7));
//! let summary = network.run().unwrap();
//! assert!(summary.iterations <= network.max_iterations());
//! ```

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod activation;
pub mod config;
pub mod dataset;
pub mod error;
pub mod network;
pub mod unit;

pub use activation::{Activation, ScalarFn};
pub use config::{TrainingConfig, UnitSeeding, WeightRange};
pub use dataset::{Sample, SampleTable};
pub use error::{NetworkError, Result};
pub use network::{Network, NetworkState, TrainingSummary};
pub use unit::Unit;
