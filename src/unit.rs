//! A hidden unit of the network.

use crate::{activation::Activation, dataset::SampleTable};

/// A hidden unit holding an input weight, a bias and an output weight around an activation.
///
/// The weights the unit was created with are kept, such that the unit can be reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    output_weight: f64,
    input_weight: f64,
    bias: f64,
    start_output_weight: f64,
    start_input_weight: f64,
    start_bias: f64,
}

impl Unit {
    /// Create a new unit with the given weights and bias.
    #[must_use]
    pub fn new(output_weight: f64, input_weight: f64, bias: f64) -> Self {
        Self {
            output_weight,
            input_weight,
            bias,
            start_output_weight: output_weight,
            start_input_weight: input_weight,
            start_bias: bias,
        }
    }

    /// Applies the unit to the given input, `w_out * f(w_in * x + b)`.
    #[must_use]
    pub fn output(&self, activation: &Activation, x: f64) -> f64 {
        self.output_weight * activation.apply(self.activation_input(x))
    }

    /// Take a single gradient step using every sample of the table.
    ///
    /// The gradients are summed over the table rather than averaged, and are computed from the
    /// `actual_output` of each sample, which must hold the prediction of the whole network.
    pub fn update_weights(&mut self, activation: &Activation, table: &SampleTable, rate: f64) {
        let mut grad_output = 0.0;
        let mut grad_input = 0.0;
        let mut grad_bias = 0.0;
        for sample in table {
            let z = self.activation_input(sample.input);
            let diff = sample.diff();
            let delta = self.output_weight * diff * activation.derive(z);
            grad_output += diff * activation.apply(z);
            grad_input += delta * sample.input;
            grad_bias += delta;
        }
        self.output_weight -= rate * grad_output;
        self.input_weight -= rate * grad_input;
        self.bias -= rate * grad_bias;
    }

    /// Restore the weights and bias the unit was created with.
    pub fn reset(&mut self) {
        self.output_weight = self.start_output_weight;
        self.input_weight = self.start_input_weight;
        self.bias = self.start_bias;
    }

    /// The current output weight.
    #[must_use]
    pub fn output_weight(&self) -> f64 {
        self.output_weight
    }

    /// The current input weight.
    #[must_use]
    pub fn input_weight(&self) -> f64 {
        self.input_weight
    }

    /// The current bias.
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// The output weight the unit was created with.
    #[must_use]
    pub fn start_output_weight(&self) -> f64 {
        self.start_output_weight
    }

    /// The input weight the unit was created with.
    #[must_use]
    pub fn start_input_weight(&self) -> f64 {
        self.start_input_weight
    }

    /// The bias the unit was created with.
    #[must_use]
    pub fn start_bias(&self) -> f64 {
        self.start_bias
    }

    fn activation_input(&self, x: f64) -> f64 {
        self.input_weight * x + self.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Sample;

    #[test]
    fn output_is_pure() {
        let unit = Unit::new(0.3, -1.2, 0.7);
        let a = unit.output(&Activation::SIGMOID, 0.42);
        let b = unit.output(&Activation::SIGMOID, 0.42);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn output_matches_formula() {
        let unit = Unit::new(2.0, 3.0, -1.0);
        assert_eq!(unit.output(&Activation::IDENTITY, 0.5), 2.0 * (3.0 * 0.5 - 1.0));
    }

    #[test]
    fn update_uses_summed_gradients() {
        // With identity activation: g_out = sum(d * z), g_in = sum(w_out * d * x),
        // g_b = sum(w_out * d), z = w_in * x + b.
        let mut unit = Unit::new(1.0, 1.0, 0.0);
        let mut table = SampleTable::from_samples(&[Sample::new(1.0, 0.0), Sample::new(2.0, 1.0)]);
        for sample in &mut table {
            sample.actual_output = unit.output(&Activation::IDENTITY, sample.input);
        }
        // diffs are 1 and 1, z are 1 and 2.
        unit.update_weights(&Activation::IDENTITY, &table, 0.1);
        assert!((unit.output_weight() - (1.0 - 0.1 * 3.0)).abs() < 1e-12);
        assert!((unit.input_weight() - (1.0 - 0.1 * 3.0)).abs() < 1e-12);
        assert!((unit.bias() - (0.0 - 0.1 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn reset_restores_start_weights() {
        let mut unit = Unit::new(0.5, 0.25, -0.5);
        let table = SampleTable::from_samples(&[Sample::new(1.0, 4.0)]);
        unit.update_weights(&Activation::TANH, &table, 0.5);
        assert_ne!(unit.output_weight(), unit.start_output_weight());
        unit.reset();
        assert_eq!(unit, Unit::new(0.5, 0.25, -0.5));
    }
}
