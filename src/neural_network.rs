/// Module that contains activation functions and the activation function pair type
pub mod activation;
/// Module that contains the layer implementation
pub mod layer;
/// Module that contains the bulk-configurable network wrapper
pub mod multilayer_perceptron;
/// Module that contains the feedforward network
pub mod network;
/// Module that contains the network dimension configuration
pub mod network_config;
/// Module that contains the neuron implementation
pub mod neuron;

pub use activation::*;
pub use layer::*;
pub use multilayer_perceptron::*;
pub use network::*;
pub use network_config::*;
pub use neuron::*;

use crate::NetworkError;
use ndarray::Array1;

/// Type alias for the real-valued vectors flowing through the network
pub type Vector = Array1<f64>;
