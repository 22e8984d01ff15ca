use super::*;
use log::debug;
use std::ops::{Deref, DerefMut};

/// A [`Network`] with bulk activation-function setters.
///
/// Dereferences to the wrapped network, so every network operation is available directly.
///
/// # Example
/// ```rust
/// use neuronet::prelude::*;
///
/// let mut mlp = MultilayerPerceptron::new(4, 2, 1).unwrap();
/// mlp.set_all_activation_functions(sigmoid, sigmoid_derivative, "sigmoid");
/// mlp.set_layer_activation_functions(identity, identity_derivative, 1, "identity")
///     .unwrap();
///
/// let neuron = mlp.get_layer(1).unwrap().get_neuron(0).unwrap();
/// assert_eq!(neuron.evaluate_function(2.2).unwrap(), 2.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MultilayerPerceptron {
    network: Network,
}

impl MultilayerPerceptron {
    /// Creates a perceptron with `hidden_layer_count` hidden layers of the default width
    pub fn new(
        input_width: usize,
        output_width: usize,
        hidden_layer_count: usize,
    ) -> Result<Self, NetworkError> {
        Ok(Self::from_network(Network::new(
            input_width,
            output_width,
            hidden_layer_count,
        )?))
    }

    pub fn from_config(config: &NetworkConfig) -> Result<Self, NetworkError> {
        Ok(Self::from_network(Network::from_config(config)?))
    }

    pub fn from_network(network: Network) -> Self {
        Self { network }
    }

    pub fn into_inner(self) -> Network {
        self.network
    }

    /// Sets the same activation pair on every neuron of every layer
    pub fn set_all_activation_functions(
        &mut self,
        function: ScalarFn,
        derivative: ScalarFn,
        name: &str,
    ) {
        let activation = ActivationFunction::new(function, derivative).with_name(name);
        for mut layer in self.network.layers_mut() {
            layer.set_activation(&activation);
        }
        debug!("Activation '{}' set on all layers", name);
    }

    /// Sets the same activation pair on every neuron of the layer at `layer_index`.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the layer exists
    /// - `Err(NetworkError::IndexOutOfRange)` - If `layer_index >= layer_count`
    pub fn set_layer_activation_functions(
        &mut self,
        function: ScalarFn,
        derivative: ScalarFn,
        layer_index: usize,
        name: &str,
    ) -> Result<(), NetworkError> {
        let activation = ActivationFunction::new(function, derivative).with_name(name);
        self.network
            .get_layer_mut(layer_index)?
            .set_activation(&activation);
        debug!("Activation '{}' set on layer {}", name, layer_index);
        Ok(())
    }
}

impl Deref for MultilayerPerceptron {
    type Target = Network;

    fn deref(&self) -> &Network {
        &self.network
    }
}

impl DerefMut for MultilayerPerceptron {
    fn deref_mut(&mut self) -> &mut Network {
        &mut self.network
    }
}

impl From<Network> for MultilayerPerceptron {
    fn from(network: Network) -> Self {
        Self::from_network(network)
    }
}
