use super::*;
use rayon::prelude::*;

/// Threshold for evaluating neurons in parallel (number of neurons)
const LAYER_PARALLEL_THRESHOLD: usize = 64;

/// A fixed collection of neurons that all read the same input vector.
///
/// Every neuron in a layer has the same input width, and the neuron count never changes
/// after construction. A forward pass feeds the identical input to each neuron and collects
/// their outputs in neuron index order.
///
/// # Dimensions
///
/// - Input shape: (input_width,)
/// - Output shape: (neuron_count,)
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    input_width: usize,
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `neuron_count` zero-initialized neurons of width `input_width`
    pub fn new(input_width: usize, neuron_count: usize) -> Self {
        Self {
            input_width,
            neurons: (0..neuron_count).map(|_| Neuron::new(input_width)).collect(),
        }
    }

    pub fn get_input_width(&self) -> usize {
        self.input_width
    }

    pub fn get_neuron_count(&self) -> usize {
        self.neurons.len()
    }

    /// Returns the neuron at `index`, or `IndexOutOfRange`
    pub fn get_neuron(&self, index: usize) -> Result<&Neuron, NetworkError> {
        let len = self.neurons.len();
        self.neurons
            .get(index)
            .ok_or(NetworkError::IndexOutOfRange { index, len })
    }

    /// Returns mutable access to the neuron at `index`, or `IndexOutOfRange`
    pub fn get_neuron_mut(&mut self, index: usize) -> Result<NeuronMut<'_>, NetworkError> {
        let len = self.neurons.len();
        self.neurons
            .get_mut(index)
            .map(NeuronMut::new)
            .ok_or(NetworkError::IndexOutOfRange { index, len })
    }

    pub fn neurons(&self) -> impl Iterator<Item = &Neuron> {
        self.neurons.iter()
    }

    pub fn neurons_mut(&mut self) -> impl Iterator<Item = NeuronMut<'_>> {
        self.neurons.iter_mut().map(NeuronMut::new)
    }

    /// True when every neuron has an activation function
    pub fn is_configured(&self) -> bool {
        self.neurons.iter().all(|neuron| neuron.get_activation().is_some())
    }

    /// Sets the activation pair of the neuron at `neuron_index`
    pub fn set_activation_functions(
        &mut self,
        function: ScalarFn,
        derivative: ScalarFn,
        neuron_index: usize,
        name: &str,
    ) -> Result<(), NetworkError> {
        self.get_neuron_mut(neuron_index)?
            .set_activation_functions(function, derivative, name);
        Ok(())
    }

    /// Gives every neuron of the layer a clone of `activation`
    pub fn set_activation(&mut self, activation: &ActivationFunction) {
        for neuron in &mut self.neurons {
            neuron.set_activation(activation.clone());
        }
    }

    pub fn set_weights_random(&mut self) {
        for neuron in &mut self.neurons {
            neuron.set_weights_random();
        }
    }

    /// Number of weights in the layer, `neuron_count * input_width`
    pub fn get_weight_count(&self) -> usize {
        self.neurons.len() * self.input_width
    }

    /// Number of weights plus one bias per neuron
    pub fn get_param_count(&self) -> usize {
        self.get_weight_count() + self.neurons.len()
    }

    /// Outputs cached by the last forward pass, in neuron order
    pub fn get_outputs(&self) -> Vector {
        self.neurons.iter().map(Neuron::get_output).collect()
    }

    /// Activates every neuron against the same input.
    ///
    /// Neurons are independent of one another, so large layers are evaluated in parallel.
    /// The output order always matches the neuron order. All checks run before any neuron is
    /// activated, so a failed call leaves every cached output untouched.
    ///
    /// # Parameters
    ///
    /// * `input` - Input vector of length `input_width`
    ///
    /// # Returns
    ///
    /// - `Ok(Vector)` - The outputs of all neurons, length `neuron_count`
    /// - `Err(NetworkError)` - If the input width is wrong or a neuron has no activation function
    pub fn forward(&mut self, input: &Vector) -> Result<Vector, NetworkError> {
        if input.len() != self.input_width {
            return Err(NetworkError::DimensionMismatch {
                expected: self.input_width,
                found: input.len(),
            });
        }
        if !self.is_configured() {
            return Err(NetworkError::UnconfiguredFunction);
        }

        let outputs = if self.neurons.len() > LAYER_PARALLEL_THRESHOLD {
            self.neurons
                .par_iter_mut()
                .map(|neuron| neuron.activate(input))
                .collect::<Result<Vec<f64>, NetworkError>>()?
        } else {
            self.neurons
                .iter_mut()
                .map(|neuron| neuron.activate(input))
                .collect::<Result<Vec<f64>, NetworkError>>()?
        };

        Ok(Vector::from(outputs))
    }
}

/// Mutable access to a layer owned by a [`Network`].
///
/// Neurons can be configured through it, and reads go through `Deref`, but the layer cannot be
/// replaced, so the network's wiring never changes after construction.
///
/// ```compile_fail
/// use neuronet::prelude::*;
///
/// let mut network = Network::new(2, 1, 1).unwrap();
/// *network.get_layer_mut(0).unwrap() = Layer::new(9, 9);
/// ```
#[derive(Debug)]
pub struct LayerMut<'a> {
    layer: &'a mut Layer,
}

impl<'a> LayerMut<'a> {
    pub(crate) fn new(layer: &'a mut Layer) -> Self {
        Self { layer }
    }

    pub fn get_neuron_mut(&mut self, index: usize) -> Result<NeuronMut<'_>, NetworkError> {
        self.layer.get_neuron_mut(index)
    }

    /// Consumes the handle, keeping the borrow of the network for the returned neuron
    pub fn into_neuron_mut(self, index: usize) -> Result<NeuronMut<'a>, NetworkError> {
        let layer = self.layer;
        layer.get_neuron_mut(index)
    }

    pub fn neurons_mut(&mut self) -> impl Iterator<Item = NeuronMut<'_>> {
        self.layer.neurons_mut()
    }

    pub fn set_activation_functions(
        &mut self,
        function: ScalarFn,
        derivative: ScalarFn,
        neuron_index: usize,
        name: &str,
    ) -> Result<(), NetworkError> {
        self.layer
            .set_activation_functions(function, derivative, neuron_index, name)
    }

    pub fn set_activation(&mut self, activation: &ActivationFunction) {
        self.layer.set_activation(activation);
    }

    pub fn set_weights_random(&mut self) {
        self.layer.set_weights_random();
    }
}

impl std::ops::Deref for LayerMut<'_> {
    type Target = Layer;

    fn deref(&self) -> &Layer {
        self.layer
    }
}
