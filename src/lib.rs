/// Error types for network construction, evaluation and configuration loading.
pub mod error;

pub use error::{IoError, NetworkError};

/// Components for building and evaluating fixed-topology feedforward networks.
///
/// # Core Components
///
/// - **Neuron**: A weight vector, a bias and an activation function producing one scalar output
/// - **Layer**: A fixed collection of neurons that all read the same input vector
/// - **Network**: An ordered stack of layers forming a forward pipeline
/// - **MultilayerPerceptron**: A network with bulk activation-function setters
/// - **NetworkConfig**: Input width, output width and hidden layer widths
/// - **ActivationFunction**: An activation function paired with its derivative
///
/// Training is not part of this crate. Weight and bias gradients are plain storage that an
/// external training procedure can read and write.
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use neuronet::prelude::*;
///
/// // 2 inputs -> 3 hidden neurons -> 1 output
/// let mut mlp = MultilayerPerceptron::from_config(&NetworkConfig::new(2, 1, vec![3])).unwrap();
/// mlp.set_all_activation_functions(tanh, tanh_derivative, "tanh");
/// mlp.set_weights_random();
///
/// // Display network architecture
/// println!("{}", *mlp);
///
/// let output = mlp.forward(&array![0.5, -0.25]).unwrap();
/// assert_eq!(output.len(), 1);
/// ```
pub mod neural_network;

/// Convenience re-exports of the most used types and activation functions.
pub mod prelude;
