pub use crate::error::{IoError, NetworkError};
pub use crate::neural_network::Vector;
pub use crate::neural_network::activation::*;
pub use crate::neural_network::{
    Layer, LayerMut, MultilayerPerceptron, Network, NetworkConfig, Neuron, NeuronMut,
};
