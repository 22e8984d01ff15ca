use super::*;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// A single unit of a feedforward network.
///
/// A neuron owns a weight vector and a parallel weight-gradient vector whose length is the
/// neuron's input width, a scalar bias and bias gradient, the most recently computed output,
/// and an optional activation function pair. Its forward computation is
/// `output = activation(bias + Σ weights[i] * input[i])`.
///
/// The input width is fixed at construction. Gradients are plain storage for an external
/// training procedure; this type never computes them.
///
/// # Fields
///
/// - `weights` - Weight vector with length `input_width`
/// - `weight_gradients` - Gradient accumulators, same length as `weights`
/// - `bias` - Scalar bias
/// - `bias_gradient` - Gradient accumulator for the bias
/// - `output` - Cached result of the last call to `activate`
/// - `activation` - Activation function pair, `None` until configured
///
/// # Equality
///
/// Two neurons are equal when their widths, weights, weight gradients, bias, bias gradient
/// and activation functions match. `output` is a cache and is ignored.
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use neuronet::prelude::*;
///
/// let mut neuron = Neuron::new(4);
/// for i in 0..4 {
///     neuron.set_weight(i, (i + 1) as f64).unwrap();
/// }
/// neuron.set_bias(0.2);
/// neuron.set_activation_functions(identity, identity_derivative, "identity");
///
/// let output = neuron.activate(&array![0.1, 0.2, 0.3, 0.4]).unwrap();
/// assert!((output - 3.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Neuron {
    weights: Vector,
    weight_gradients: Vector,
    bias: f64,
    bias_gradient: f64,
    output: f64,
    activation: Option<ActivationFunction>,
}

impl Neuron {
    /// Creates a neuron with `input_width` zero weights and zero gradients.
    ///
    /// A width of 0 is legal and yields a neuron without weights.
    ///
    /// # Parameters
    ///
    /// * `input_width` - Number of incoming signals
    ///
    /// # Returns
    ///
    /// * `Self` - A zero-initialized neuron with no activation function
    pub fn new(input_width: usize) -> Self {
        Self {
            weights: Vector::zeros(input_width),
            weight_gradients: Vector::zeros(input_width),
            bias: 0.0,
            bias_gradient: 0.0,
            output: 0.0,
            activation: None,
        }
    }

    pub fn get_input_width(&self) -> usize {
        self.weights.len()
    }

    fn check_index(&self, index: usize) -> Result<(), NetworkError> {
        if index >= self.weights.len() {
            return Err(NetworkError::IndexOutOfRange {
                index,
                len: self.weights.len(),
            });
        }
        Ok(())
    }

    /// Sets the weight at `index`
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the weight was written
    /// - `Err(NetworkError::IndexOutOfRange)` - If `index >= input_width`
    pub fn set_weight(&mut self, index: usize, value: f64) -> Result<(), NetworkError> {
        self.check_index(index)?;
        self.weights[index] = value;
        Ok(())
    }

    /// Returns the weight at `index`, or `IndexOutOfRange`
    pub fn get_weight(&self, index: usize) -> Result<f64, NetworkError> {
        self.check_index(index)?;
        Ok(self.weights[index])
    }

    /// Sets the weight gradient at `index`, or returns `IndexOutOfRange`
    pub fn set_weight_gradient(&mut self, index: usize, value: f64) -> Result<(), NetworkError> {
        self.check_index(index)?;
        self.weight_gradients[index] = value;
        Ok(())
    }

    pub fn get_weight_gradient(&self, index: usize) -> Result<f64, NetworkError> {
        self.check_index(index)?;
        Ok(self.weight_gradients[index])
    }

    pub fn get_weights(&self) -> &Vector {
        &self.weights
    }

    pub fn get_weight_gradients(&self) -> &Vector {
        &self.weight_gradients
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    pub fn get_bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias_gradient(&mut self, bias_gradient: f64) {
        self.bias_gradient = bias_gradient;
    }

    pub fn get_bias_gradient(&self) -> f64 {
        self.bias_gradient
    }

    /// Returns the output of the last `activate` call (0.0 before the first one)
    pub fn get_output(&self) -> f64 {
        self.output
    }

    /// Stores an activation function and its derivative.
    ///
    /// # Parameters
    ///
    /// - `function` - Activation function applied to the weighted sum
    /// - `derivative` - Derivative of `function`
    /// - `name` - Display name, purely cosmetic
    pub fn set_activation_functions(&mut self, function: ScalarFn, derivative: ScalarFn, name: &str) {
        self.activation = Some(ActivationFunction::new(function, derivative).with_name(name));
    }

    pub fn set_activation(&mut self, activation: ActivationFunction) {
        self.activation = Some(activation);
    }

    pub fn get_activation(&self) -> Option<&ActivationFunction> {
        self.activation.as_ref()
    }

    pub fn set_weights_to_ones(&mut self) {
        self.weights.fill(1.0);
    }

    pub fn set_weight_gradients_to_zero(&mut self) {
        self.weight_gradients.fill(0.0);
    }

    /// Fills the weights with independent draws from the standard normal distribution,
    /// using the thread-local generator
    pub fn set_weights_random(&mut self) {
        self.set_weights_random_with(&mut rand::rng());
    }

    /// Fills the weights with independent standard normal draws from `rng`.
    ///
    /// Passing a seeded generator makes the initialization reproducible.
    pub fn set_weights_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.weights
            .mapv_inplace(|_| Distribution::<f64>::sample(&StandardNormal, &mut *rng));
    }

    /// Computes `activation(bias + weights · input)`, caches it as the output and returns it.
    ///
    /// # Parameters
    ///
    /// * `input` - Input vector, its length must equal the input width
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The neuron's new output
    /// - `Err(NetworkError::DimensionMismatch)` - If `input` has the wrong length
    /// - `Err(NetworkError::UnconfiguredFunction)` - If no activation function is set
    pub fn activate(&mut self, input: &Vector) -> Result<f64, NetworkError> {
        if input.len() != self.weights.len() {
            return Err(NetworkError::DimensionMismatch {
                expected: self.weights.len(),
                found: input.len(),
            });
        }
        let activation = self
            .activation
            .as_ref()
            .ok_or(NetworkError::UnconfiguredFunction)?;

        let z = self.bias + self.weights.dot(input);
        self.output = activation.evaluate(z);
        Ok(self.output)
    }

    /// Applies the activation function to `x` without touching the cached output
    pub fn evaluate_function(&self, x: f64) -> Result<f64, NetworkError> {
        self.activation
            .as_ref()
            .map(|activation| activation.evaluate(x))
            .ok_or(NetworkError::UnconfiguredFunction)
    }

    /// Applies the activation derivative to `x` without touching the cached output
    pub fn evaluate_function_derivative(&self, x: f64) -> Result<f64, NetworkError> {
        self.activation
            .as_ref()
            .map(|activation| activation.evaluate_derivative(x))
            .ok_or(NetworkError::UnconfiguredFunction)
    }
}

impl PartialEq for Neuron {
    fn eq(&self, other: &Self) -> bool {
        // output is a cache, not part of the neuron's identity
        self.weights == other.weights
            && self.weight_gradients == other.weight_gradients
            && self.bias == other.bias
            && self.bias_gradient == other.bias_gradient
            && self.activation == other.activation
    }
}

/// Mutable access to a neuron owned by a [`Layer`].
///
/// Every setter of [`Neuron`] is available, and reads go through `Deref`, but the neuron itself
/// cannot be replaced, so its input width always stays the width of its layer.
///
/// ```compile_fail
/// use neuronet::prelude::*;
///
/// let mut layer = Layer::new(2, 2);
/// *layer.get_neuron_mut(0).unwrap() = Neuron::new(9);
/// ```
#[derive(Debug)]
pub struct NeuronMut<'a> {
    neuron: &'a mut Neuron,
}

impl<'a> NeuronMut<'a> {
    pub(crate) fn new(neuron: &'a mut Neuron) -> Self {
        Self { neuron }
    }

    pub fn set_weight(&mut self, index: usize, value: f64) -> Result<(), NetworkError> {
        self.neuron.set_weight(index, value)
    }

    pub fn set_weight_gradient(&mut self, index: usize, value: f64) -> Result<(), NetworkError> {
        self.neuron.set_weight_gradient(index, value)
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.neuron.set_bias(bias);
    }

    pub fn set_bias_gradient(&mut self, bias_gradient: f64) {
        self.neuron.set_bias_gradient(bias_gradient);
    }

    pub fn set_activation_functions(
        &mut self,
        function: ScalarFn,
        derivative: ScalarFn,
        name: &str,
    ) {
        self.neuron
            .set_activation_functions(function, derivative, name);
    }

    pub fn set_activation(&mut self, activation: ActivationFunction) {
        self.neuron.set_activation(activation);
    }

    pub fn set_weights_to_ones(&mut self) {
        self.neuron.set_weights_to_ones();
    }

    pub fn set_weight_gradients_to_zero(&mut self) {
        self.neuron.set_weight_gradients_to_zero();
    }

    pub fn set_weights_random(&mut self) {
        self.neuron.set_weights_random();
    }

    pub fn set_weights_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.neuron.set_weights_random_with(rng);
    }

    pub fn activate(&mut self, input: &Vector) -> Result<f64, NetworkError> {
        self.neuron.activate(input)
    }
}

impl std::ops::Deref for NeuronMut<'_> {
    type Target = Neuron;

    fn deref(&self) -> &Neuron {
        self.neuron
    }
}
