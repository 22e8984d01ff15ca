use crate::error::IoError;
use crate::NetworkError;
use serde::{Deserialize, Serialize};
use serde_json::from_reader;

/// Dimension configuration of a feedforward network.
///
/// A network built from this configuration has `hidden_layer_widths.len() + 1` layers:
/// one per hidden width, followed by an output layer of `output_width` neurons. The first
/// layer reads `input_width` values and every later layer reads the previous layer's outputs.
///
/// # Fields
///
/// - `input_width` - Required length of the network's input vector
/// - `output_width` - Neuron count of the last layer
/// - `hidden_layer_widths` - Neuron count of each intermediate layer, in order
///
/// # Example
/// ```rust
/// use neuronet::neural_network::NetworkConfig;
///
/// let config: NetworkConfig = serde_json::from_str(
///     r#"{ "input_width": 4, "output_width": 2, "hidden_layer_widths": [8, 6] }"#,
/// ).unwrap();
/// assert_eq!(config.layer_shapes(), vec![(4, 8), (8, 6), (6, 2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_width: usize,
    pub output_width: usize,
    #[serde(default)]
    pub hidden_layer_widths: Vec<usize>,
}

impl NetworkConfig {
    pub fn new(input_width: usize, output_width: usize, hidden_layer_widths: Vec<usize>) -> Self {
        Self {
            input_width,
            output_width,
            hidden_layer_widths,
        }
    }

    /// Creates a configuration with `hidden_layer_count` hidden layers of the default width.
    ///
    /// Every hidden layer gets `max(input_width, output_width)` neurons.
    pub fn with_hidden_layer_count(
        input_width: usize,
        output_width: usize,
        hidden_layer_count: usize,
    ) -> Self {
        let width = input_width.max(output_width);
        Self::new(input_width, output_width, vec![width; hidden_layer_count])
    }

    /// Loads a configuration from a JSON file
    pub fn load_from_path(path: &str) -> Result<Self, IoError> {
        let reader = IoError::load_in_buf_reader(path)?;
        from_reader(reader).map_err(IoError::JsonError)
    }

    pub fn get_hidden_layer_count(&self) -> usize {
        self.hidden_layer_widths.len()
    }

    /// Checks that every layer width is at least 1
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the configuration describes a valid network
    /// - `Err(NetworkError::InvalidConfiguration)` - If any width is zero
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.input_width == 0 {
            return Err(NetworkError::InvalidConfiguration(
                "input_width must be greater than 0".to_string(),
            ));
        }
        if self.output_width == 0 {
            return Err(NetworkError::InvalidConfiguration(
                "output_width must be greater than 0".to_string(),
            ));
        }
        if let Some(i) = self.hidden_layer_widths.iter().position(|&w| w == 0) {
            return Err(NetworkError::InvalidConfiguration(format!(
                "hidden layer {} must have at least one neuron",
                i
            )));
        }
        Ok(())
    }

    /// Returns `(input_width, neuron_count)` for each layer, first to last
    pub fn layer_shapes(&self) -> Vec<(usize, usize)> {
        let mut shapes = Vec::with_capacity(self.hidden_layer_widths.len() + 1);
        let mut fan_in = self.input_width;
        for &width in self.hidden_layer_widths.iter().chain(Some(&self.output_width)) {
            shapes.push((fan_in, width));
            fan_in = width;
        }
        shapes
    }
}
