/// Signature shared by every activation function and its derivative
pub type ScalarFn = fn(f64) -> f64;

/// Display name used when none is given
pub const UNNAMED_ACTIVATION: &str = "n/a";

/// Logistic sigmoid, `1 / (1 + e^(-x))`
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid evaluated at `x`, `s(x) * (1 - s(x))`
pub fn sigmoid_derivative(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

/// Hyperbolic tangent
pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

/// Derivative of the hyperbolic tangent evaluated at `x`, `1 - tanh(x)^2`
pub fn tanh_derivative(x: f64) -> f64 {
    let t = x.tanh();
    1.0 - t * t
}

/// Rectified linear unit
pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// Derivative of the rectified linear unit (0 at the origin)
pub fn relu_derivative(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

pub fn identity(x: f64) -> f64 {
    x
}

pub fn identity_derivative(_x: f64) -> f64 {
    1.0
}

/// Sign inversion, `x -> -x`
pub fn inverse(x: f64) -> f64 {
    -x
}

/// An activation function paired with its derivative.
///
/// The neuron treats both functions as opaque: it only invokes them with a scalar
/// and expects a scalar back. Two `ActivationFunction`s are equal when they refer
/// to the same function and the same derivative; the display name is cosmetic and
/// does not take part in the comparison.
///
/// # Fields
///
/// - `function` - The activation function applied to a neuron's weighted sum
/// - `derivative` - The derivative of `function`
/// - `name` - Display name, `"n/a"` when not provided
///
/// # Example
/// ```rust
/// use neuronet::neural_network::activation::*;
///
/// let act = ActivationFunction::new(sigmoid, sigmoid_derivative).with_name("sigmoid");
/// assert_eq!(act.evaluate(0.0), 0.5);
/// assert_eq!(act.get_name(), "sigmoid");
/// ```
#[derive(Debug, Clone)]
pub struct ActivationFunction {
    function: ScalarFn,
    derivative: ScalarFn,
    name: String,
}

impl ActivationFunction {
    /// Creates an unnamed activation function pair.
    ///
    /// # Parameters
    ///
    /// - `function` - The activation function
    /// - `derivative` - Its derivative
    ///
    /// # Returns
    ///
    /// * `Self` - A new pair named `"n/a"`
    pub fn new(function: ScalarFn, derivative: ScalarFn) -> Self {
        Self {
            function,
            derivative,
            name: UNNAMED_ACTIVATION.to_string(),
        }
    }

    /// Replaces the display name, supports method chaining
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn sigmoid() -> Self {
        Self::new(sigmoid, sigmoid_derivative).with_name("sigmoid")
    }

    pub fn tanh() -> Self {
        Self::new(tanh, tanh_derivative).with_name("tanh")
    }

    pub fn relu() -> Self {
        Self::new(relu, relu_derivative).with_name("relu")
    }

    pub fn identity() -> Self {
        Self::new(identity, identity_derivative).with_name("identity")
    }

    /// `x -> -x`, used as its own derivative stand-in
    pub fn inverse() -> Self {
        Self::new(inverse, inverse).with_name("inverse")
    }

    /// Applies the activation function to `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// Applies the derivative to `x`
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }

    pub fn get_function(&self) -> ScalarFn {
        self.function
    }

    pub fn get_derivative(&self) -> ScalarFn {
        self.derivative
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for ActivationFunction {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.function, other.function)
            && std::ptr::fn_addr_eq(self.derivative, other.derivative)
    }
}
