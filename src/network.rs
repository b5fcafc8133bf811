//! A network of independent hidden units whose outputs are summed.

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::{debug, info, warn};

use crate::{
    activation::{Activation, ScalarFn},
    config::{self, TrainingConfig, UnitSeeding, WeightRange},
    dataset::{Sample, SampleTable},
    error::{NetworkError, Result},
    unit::Unit,
};

/// The stage a network is in.
///
/// The stage only records the last transition, it does not gate any operation. Units can be
/// created before any data is assigned, which moves an `Unconfigured` network straight to
/// `Initialized`. Assigning data keeps the current units, so a `Configured` network that already
/// has units can be run and continues training them on the new data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// No data has been assigned yet.
    Unconfigured,
    /// Data has been assigned since the units were last created, or no units exist yet.
    Configured,
    /// The units were created and have not been trained yet.
    Initialized,
    /// At least one run has completed since the units were created.
    Trained,
}

/// The outcome of a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSummary {
    /// Number of iterations performed.
    pub iterations: usize,
    /// The error of the last iteration.
    pub last_error: f64,
    /// Whether the run stopped because the error reached the threshold.
    pub converged: bool,
}

/// A network mapping a scalar input to a scalar output through a single layer of hidden units.
///
/// The network owns its table of samples. Data handed to it is always copied, and the predicted
/// output of every sample is updated on each training iteration.
#[derive(Debug, Clone)]
pub struct Network {
    units: Vec<Unit>,
    data: SampleTable,
    function: Option<ScalarFn>,
    derivative: Option<ScalarFn>,
    config: TrainingConfig,
    last_error: f64,
    state: NetworkState,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            units: Vec::new(),
            data: SampleTable::default(),
            function: None,
            derivative: None,
            config: TrainingConfig::default(),
            last_error: 0.0,
            state: NetworkState::Unconfigured,
        }
    }
}

impl Network {
    /// Create a network with the default hyperparameters and no activation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network with the given hyperparameters. The iteration limit is clamped.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the other hyperparameters is invalid.
    pub fn from_config(mut config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        config.max_iterations = config::clamp_iterations(config.max_iterations);
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Replace the samples with a copy of the given table.
    pub fn set_data(&mut self, data: &SampleTable) {
        self.data = data.clone();
        self.state = NetworkState::Configured;
    }

    /// Replace the samples with a copy of the given ones.
    pub fn set_samples(&mut self, samples: &[Sample]) {
        self.set_data(&SampleTable::from_samples(samples));
    }

    /// The samples along with the outputs predicted by the last iteration.
    #[must_use]
    pub fn data(&self) -> &SampleTable {
        &self.data
    }

    /// Append a copy of the sample, see [`SampleTable::add`].
    pub fn add_data(&mut self, sample: &Sample) -> bool {
        self.data.add(sample)
    }

    /// Remove the first sample equal to the given one, see [`SampleTable::remove_sample`].
    pub fn remove_sample(&mut self, sample: &Sample) -> bool {
        self.data.remove_sample(sample)
    }

    /// Remove the sample at the given position, see [`SampleTable::remove_at`].
    pub fn remove_data_at(&mut self, index: usize) -> bool {
        self.data.remove_at(index)
    }

    /// Set the activation function, keeping the derivative.
    pub fn set_neural_function(&mut self, function: ScalarFn) {
        self.function = Some(function);
    }

    /// Set the derivative of the activation function, keeping the function.
    pub fn set_derived_function(&mut self, derivative: ScalarFn) {
        self.derivative = Some(derivative);
    }

    /// Set both the activation function and its derivative.
    pub fn set_network_functions(&mut self, activation: Activation) {
        self.function = Some(activation.function());
        self.derivative = Some(activation.derivative());
    }

    /// The activation shared by all units, if both of its parts are set.
    #[must_use]
    pub fn activation(&self) -> Option<Activation> {
        match (self.function, self.derivative) {
            (Some(function), Some(derivative)) => Some(Activation::new(function, derivative)),
            _ => None,
        }
    }

    /// Set the learning rate.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidLearningRate`] unless the rate is finite and positive.
    pub fn set_learning_rate(&mut self, rate: f64) -> Result<()> {
        config::validate_learning_rate(rate)?;
        self.config.learning_rate = rate;
        Ok(())
    }

    /// Set the number of units created by the next [`Network::initialize`].
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUnitCount`] if the count is zero.
    pub fn set_unit_count(&mut self, count: usize) -> Result<()> {
        config::validate_unit_count(count)?;
        self.config.unit_count = count;
        Ok(())
    }

    /// Set the error at or below which a run stops.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidMaxError`] unless the error is finite and not negative.
    pub fn set_max_error(&mut self, error: f64) -> Result<()> {
        config::validate_max_error(error)?;
        self.config.max_error = error;
        Ok(())
    }

    /// Set the iteration limit of a run. Values outside of
    /// [`MIN_ITERATIONS`](config::MIN_ITERATIONS)..=[`MAX_ITERATIONS`](config::MAX_ITERATIONS)
    /// are clamped into that range.
    pub fn set_max_iterations(&mut self, iterations: usize) {
        let clamped = config::clamp_iterations(iterations);
        if clamped != iterations {
            warn!(requested = iterations, clamped, "iteration limit out of range");
        }
        self.config.max_iterations = clamped;
    }

    /// Set the ranges from which starting weights and biases are drawn. Nothing is changed unless
    /// all three ranges are valid.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidRange`] for the first range that is not finite and ordered.
    pub fn set_weight_and_bias_ranges(
        &mut self,
        output_weight: WeightRange,
        input_weight: WeightRange,
        bias: WeightRange,
    ) -> Result<()> {
        output_weight.validate("output weight")?;
        input_weight.validate("input weight")?;
        bias.validate("bias")?;
        self.config.output_weight_range = output_weight;
        self.config.input_weight_range = input_weight;
        self.config.bias_range = bias;
        Ok(())
    }

    /// Choose whether units start from shared or separately drawn weights.
    pub fn set_seeding(&mut self, seeding: UnitSeeding) {
        self.config.seeding = seeding;
    }

    /// The learning rate.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    /// The iteration limit of a run.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations
    }

    /// The current hyperparameters.
    #[must_use]
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// The hidden units.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The error of the last training iteration.
    ///
    /// It is computed from the outputs predicted before that iteration's weight update.
    #[must_use]
    pub fn last_error(&self) -> f64 {
        self.last_error
    }

    /// The stage the network is in.
    #[must_use]
    pub fn state(&self) -> NetworkState {
        self.state
    }

    /// Discard the units and create new ones with weights drawn from the configured ranges.
    pub fn initialize<R>(&mut self, rng: &mut R)
    where
        R: Rng,
    {
        let output = uniform(self.config.output_weight_range);
        let input = uniform(self.config.input_weight_range);
        let bias = uniform(self.config.bias_range);
        let mut draw = || Unit::new(output.sample(rng), input.sample(rng), bias.sample(rng));
        self.units = match self.config.seeding {
            UnitSeeding::Shared => vec![draw(); self.config.unit_count],
            UnitSeeding::PerUnit => (0..self.config.unit_count).map(|_| draw()).collect(),
        };
        self.last_error = 0.0;
        self.state = NetworkState::Initialized;
        debug!(
            units = self.units.len(),
            seeding = ?self.config.seeding,
            "created units"
        );
    }

    /// Applies the network to the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the activation is not set or there are no units.
    pub fn predict(&self, x: f64) -> Result<f64> {
        let activation = self.ready()?;
        Ok(sum_outputs(&self.units, &activation, x))
    }

    /// Recompute the predicted output of every sample with the current weights.
    ///
    /// # Errors
    ///
    /// Returns an error if the activation is not set or there are no units.
    pub fn forward(&mut self) -> Result<()> {
        let activation = self.ready()?;
        predict_table(&self.units, &activation, &mut self.data);
        Ok(())
    }

    /// Half the sum of squared errors of the current weights over the samples. Nothing is
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the activation is not set or there are no units.
    pub fn current_error(&self) -> Result<f64> {
        let activation = self.ready()?;
        let mut table = self.data.clone();
        predict_table(&self.units, &activation, &mut table);
        Ok(table.half_squared_error())
    }

    /// Train the units until the error reaches the threshold or the iteration limit is hit.
    ///
    /// Every iteration first predicts all samples, then updates every unit from those
    /// predictions, and finally records the error of the predictions. The recorded error thus
    /// lags the weights by one update.
    ///
    /// # Errors
    ///
    /// Fails before training if the activation is not set, there are no units, or there are no
    /// samples. Fails with [`NetworkError::Diverged`] if the error stops being finite.
    pub fn run(&mut self) -> Result<TrainingSummary> {
        let activation = self.ready()?;
        if self.data.is_empty() {
            return Err(NetworkError::EmptyData);
        }
        let rate = self.config.learning_rate;
        let max_iterations = self.config.max_iterations;
        let log_interval = self.config.log_interval;
        for iteration in 1..=max_iterations {
            predict_table(&self.units, &activation, &mut self.data);
            for unit in &mut self.units {
                unit.update_weights(&activation, &self.data, rate);
            }
            self.last_error = self.data.half_squared_error();
            self.state = NetworkState::Trained;

            if !self.last_error.is_finite() {
                warn!(iteration, error = self.last_error, "training diverged");
                return Err(NetworkError::Diverged { iteration });
            }
            if log_interval != 0 && iteration % log_interval == 0 {
                debug!(iteration, error = self.last_error, "training progress");
            }
            if self.last_error <= self.config.max_error {
                info!(iteration, error = self.last_error, "training converged");
                return Ok(TrainingSummary {
                    iterations: iteration,
                    last_error: self.last_error,
                    converged: true,
                });
            }
        }
        info!(
            iterations = max_iterations,
            error = self.last_error,
            "iteration limit reached"
        );
        Ok(TrainingSummary {
            iterations: max_iterations,
            last_error: self.last_error,
            converged: false,
        })
    }

    fn ready(&self) -> Result<Activation> {
        let activation = self.activation().ok_or(NetworkError::MissingActivation)?;
        if self.units.is_empty() {
            return Err(NetworkError::NotInitialized);
        }
        Ok(activation)
    }
}

fn uniform(range: WeightRange) -> Uniform<f64> {
    Uniform::new_inclusive(range.min, range.max)
}

fn sum_outputs(units: &[Unit], activation: &Activation, x: f64) -> f64 {
    units.iter().map(|unit| unit.output(activation, x)).sum()
}

fn predict_table(units: &[Unit], activation: &Activation, table: &mut SampleTable) {
    for sample in table {
        sample.actual_output = sum_outputs(units, activation, sample.input);
    }
}
