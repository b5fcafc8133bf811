//! Activation functions shared by the units of a network.

/// A scalar function.
pub type ScalarFn = fn(f64) -> f64;

/// An activation function paired with its derivative.
///
/// A network holds a single pair and hands it to every unit on each call, so swapping it takes
/// effect for all units at once.
#[derive(Debug, Clone, Copy)]
pub struct Activation {
    function: ScalarFn,
    derivative: ScalarFn,
}

impl Activation {
    /// `f(x) = x`.
    pub const IDENTITY: Self = Self::new(identity, |_| 1.0);

    /// `f(x) = 1 / (1 + e^-x)`.
    pub const SIGMOID: Self = Self::new(sigmoid, |x| {
        let s = sigmoid(x);
        s * (1.0 - s)
    });

    /// `f(x) = tanh(x)`.
    pub const TANH: Self = Self::new(f64::tanh, |x| 1.0 - x.tanh().powi(2));

    /// `f(x) = max(0, x)`.
    pub const RELU: Self = Self::new(|x| x.max(0.0), |x| if x > 0.0 { 1.0 } else { 0.0 });

    /// `f(x) = ln(1 + e^x)`, a smooth version of [`Activation::RELU`].
    pub const SOFTPLUS: Self = Self::new(softplus, sigmoid);

    /// Create a pair from a function and its derivative.
    #[must_use]
    pub const fn new(function: ScalarFn, derivative: ScalarFn) -> Self {
        Self {
            function,
            derivative,
        }
    }

    /// Evaluate the function.
    #[inline]
    #[must_use]
    pub fn apply(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// Evaluate the derivative.
    #[inline]
    #[must_use]
    pub fn derive(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }

    /// The function part of the pair.
    #[must_use]
    pub fn function(&self) -> ScalarFn {
        self.function
    }

    /// The derivative part of the pair.
    #[must_use]
    pub fn derivative(&self) -> ScalarFn {
        self.derivative
    }
}

fn identity(x: f64) -> f64 {
    x
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn softplus(x: f64) -> f64 {
    // ln(1 + e^x) overflows for large x where it is already x.
    if x > 30.0 {
        x
    } else {
        x.exp().ln_1p()
    }
}
