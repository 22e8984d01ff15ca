use std::fs::File;
use std::io::BufReader;

/// Error types that can occur while building or evaluating a network
///
/// # Variants
///
/// - `DimensionMismatch` - An input vector's length does not equal the width expected at a neuron, layer, or network boundary
/// - `IndexOutOfRange` - A weight, gradient, neuron or layer index is outside its valid bound
/// - `UnconfiguredFunction` - An activation function was invoked before one was set
/// - `InvalidConfiguration` - The dimension configuration cannot produce a valid network
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    DimensionMismatch { expected: usize, found: usize },
    IndexOutOfRange { index: usize, len: usize },
    UnconfiguredFunction,
    InvalidConfiguration(String),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::DimensionMismatch { expected, found } => write!(
                f,
                "Dimension mismatch: expected a vector of length {}, found {}",
                expected, found
            ),
            NetworkError::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: index {} with length {}", index, len)
            }
            NetworkError::UnconfiguredFunction => {
                write!(
                    f,
                    "Activation function is not set. Call set_activation_functions before evaluating."
                )
            }
            NetworkError::InvalidConfiguration(msg) => {
                write!(f, "Invalid network configuration: {}", msg)
            }
        }
    }
}

/// Implements the standard error trait for NetworkError
impl std::error::Error for NetworkError {}

/// Input/Output error types that can occur while loading a network configuration
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations
/// - `JsonError` - Wraps JSON deserialization errors
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl IoError {
    pub fn load_in_buf_reader(path: &str) -> Result<BufReader<File>, IoError> {
        let file = File::open(path).map_err(IoError::StdIoError)?;
        Ok(BufReader::new(file))
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for IoError {}
