use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers,
/// containers).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// Takes one input `Value` per input feature and returns one output
    /// `Value` per output feature; a single neuron returns a vector of one.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns all learnable parameters of the module, including those of
    /// sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to 0.0.
    ///
    /// Training loops call this before each backward pass; the engine never
    /// resets gradients on its own.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock module for exercising the provided zero_grad.
    #[derive(Debug)]
    struct MockModule {
        param: Value,
    }

    impl Module for MockModule {
        fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
            Ok(input.to_vec())
        }

        fn parameters(&self) -> Vec<Value> {
            vec![self.param.clone()]
        }
    }

    #[test]
    fn test_zero_grad_resets_parameters() {
        let module = MockModule {
            param: Value::new(0.5),
        };
        let loss = &module.param * &module.param;
        loss.backward().unwrap();
        assert_eq!(module.param.grad(), 1.0);

        module.zero_grad();
        assert_eq!(module.param.grad(), 0.0);
    }
}
