use super::*;
use log::{debug, trace};
use std::fmt;

/// A feedforward network: an ordered stack of layers evaluated one after another.
///
/// The shape of a network is fixed when it is built. For a configuration with `n` hidden
/// layers the network holds `n + 1` layers wired so that:
///
/// - layer 0 reads `input_width` values,
/// - layer `i` reads the outputs of layer `i - 1`,
/// - the last layer has `output_width` neurons.
///
/// The network owns its layers, which own their neurons. Mutable access goes through
/// [`LayerMut`] and [`NeuronMut`], which expose every setter but never allow a layer or neuron
/// to be replaced, so the wiring holds for the whole life of the network. Cloning a network
/// deep-copies every layer and neuron, so a clone never shares state with its source.
///
/// # Fields
///
/// - `config` - The dimension configuration the network was built from
/// - `layers` - The layers, first to last
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use neuronet::prelude::*;
///
/// let config = NetworkConfig::new(3, 2, vec![4]);
/// let mut network = Network::from_config(&config).unwrap();
/// for i in 0..network.get_layer_count() {
///     network.get_layer_mut(i).unwrap().set_activation(&ActivationFunction::sigmoid());
/// }
///
/// let output = network.forward(&array![0.5, -1.0, 2.0]).unwrap();
/// assert_eq!(output.len(), 2);
/// // all weights are zero, so every output is sigmoid(0)
/// assert!(output.iter().all(|&v| v == 0.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    config: NetworkConfig,
    layers: Vec<Layer>,
}

impl Network {
    /// Creates a network with `hidden_layer_count` hidden layers of the default width.
    ///
    /// Each hidden layer has `max(input_width, output_width)` neurons. Use
    /// [`Network::from_config`] to choose hidden widths explicitly.
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - A zero-initialized network
    /// - `Err(NetworkError::InvalidConfiguration)` - If `input_width` or `output_width` is zero
    pub fn new(
        input_width: usize,
        output_width: usize,
        hidden_layer_count: usize,
    ) -> Result<Self, NetworkError> {
        Self::from_config(&NetworkConfig::with_hidden_layer_count(
            input_width,
            output_width,
            hidden_layer_count,
        ))
    }

    /// Builds a zero-initialized network from a dimension configuration
    ///
    /// # Parameters
    ///
    /// * `config` - Input width, output width and hidden layer widths
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - The network, every weight and bias set to zero and no activation functions
    /// - `Err(NetworkError::InvalidConfiguration)` - If any width in `config` is zero
    pub fn from_config(config: &NetworkConfig) -> Result<Self, NetworkError> {
        config.validate()?;

        let layers: Vec<Layer> = config
            .layer_shapes()
            .into_iter()
            .map(|(input_width, neuron_count)| Layer::new(input_width, neuron_count))
            .collect();
        let total_weight_count: usize = layers.iter().map(Layer::get_weight_count).sum();

        debug!(
            "Network built: {} layers, shapes {:?}, {} weights",
            layers.len(),
            config.layer_shapes(),
            total_weight_count
        );

        Ok(Self {
            config: config.clone(),
            layers,
        })
    }

    pub fn get_config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn get_input_width(&self) -> usize {
        self.config.input_width
    }

    pub fn get_output_width(&self) -> usize {
        self.config.output_width
    }

    pub fn get_hidden_layer_count(&self) -> usize {
        self.config.get_hidden_layer_count()
    }

    /// Number of layers, always `hidden_layer_count + 1`
    pub fn get_layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns the layer at `index`, or `IndexOutOfRange`
    pub fn get_layer(&self, index: usize) -> Result<&Layer, NetworkError> {
        let len = self.layers.len();
        self.layers
            .get(index)
            .ok_or(NetworkError::IndexOutOfRange { index, len })
    }

    /// Returns mutable access to the layer at `index`, or `IndexOutOfRange`
    pub fn get_layer_mut(&mut self, index: usize) -> Result<LayerMut<'_>, NetworkError> {
        let len = self.layers.len();
        self.layers
            .get_mut(index)
            .map(LayerMut::new)
            .ok_or(NetworkError::IndexOutOfRange { index, len })
    }

    /// Returns mutable access to neuron `neuron_index` of layer `layer_index`
    pub fn get_neuron_mut(
        &mut self,
        layer_index: usize,
        neuron_index: usize,
    ) -> Result<NeuronMut<'_>, NetworkError> {
        self.get_layer_mut(layer_index)?.into_neuron_mut(neuron_index)
    }

    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn layers_mut(&mut self) -> impl Iterator<Item = LayerMut<'_>> {
        self.layers.iter_mut().map(LayerMut::new)
    }

    /// Total number of weights, `Σ neuron_count * input_width` over all layers
    pub fn get_total_weight_count(&self) -> usize {
        self.layers.iter().map(Layer::get_weight_count).sum()
    }

    /// Number of weights plus biases
    pub fn get_param_count(&self) -> usize {
        self.layers.iter().map(Layer::get_param_count).sum()
    }

    /// Draws fresh random weights for every neuron of every layer
    pub fn set_weights_random(&mut self) {
        for layer in &mut self.layers {
            layer.set_weights_random();
        }
    }

    /// Runs a forward pass through every layer in order.
    ///
    /// The output of each layer becomes the input of the next one; the output of the last
    /// layer is returned. Every layer is checked before the first one runs, so a failed call
    /// leaves all cached outputs untouched.
    ///
    /// # Parameters
    ///
    /// * `input` - Input vector of length `input_width`
    ///
    /// # Returns
    ///
    /// - `Ok(Vector)` - The network output, length `output_width`
    /// - `Err(NetworkError)` - If the input width is wrong or a neuron has no activation function
    pub fn forward(&mut self, input: &Vector) -> Result<Vector, NetworkError> {
        if input.len() != self.config.input_width {
            return Err(NetworkError::DimensionMismatch {
                expected: self.config.input_width,
                found: input.len(),
            });
        }
        if !self.layers.iter().all(Layer::is_configured) {
            return Err(NetworkError::UnconfiguredFunction);
        }

        let mut output = input.clone();
        for (i, layer) in self.layers.iter_mut().enumerate() {
            output = layer.forward(&output)?;
            trace!("Layer {} forward: {} outputs", i, output.len());
        }
        Ok(output)
    }
}

impl fmt::Display for Network {
    /// Summary of the network structure in a tabular format
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col1_width = 33;
        let col2_width = 24;
        let col3_width = 15;
        writeln!(f, "Model: \"network\"")?;
        writeln!(
            f,
            "┏{}┳{}┳{}┓",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width)
        )?;
        writeln!(
            f,
            "┃ {:<31} ┃ {:<22} ┃ {:>13} ┃",
            "Layer (type)", "Output Shape", "Param #"
        )?;
        writeln!(
            f,
            "┡{}╇{}╇{}┩",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width)
        )?;

        let last = self.layers.len() - 1;
        for (i, layer) in self.layers.iter().enumerate() {
            let kind = if i == last { "Output" } else { "Hidden" };
            writeln!(
                f,
                "│ {:<31} │ {:<22} │ {:>13} │",
                format!("Layer_{} ({})", i, kind),
                format!("({},)", layer.get_neuron_count()),
                layer.get_param_count()
            )?;
        }
        writeln!(
            f,
            "└{}┴{}┴{}┘",
            "─".repeat(col1_width),
            "─".repeat(col2_width),
            "─".repeat(col3_width)
        )?;
        writeln!(f, " Input width: {}", self.config.input_width)?;
        writeln!(f, " Total weights: {}", self.get_total_weight_count())?;
        write!(f, " Total params: {}", self.get_param_count())
    }
}
