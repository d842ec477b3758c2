use crate::error::ScalarGradError;
use crate::nn::init::{uniform_value, uniform_values};
use crate::nn::module::Module;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::Value;
use rand::rngs::StdRng;

/// A single tanh neuron: tanh(Σ wᵢxᵢ + b).
#[derive(Debug)]
pub struct Neuron {
    w: Vec<Value>,
    b: Value,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs; weights and bias are drawn
    /// uniformly from [-1, 1] using the provided generator.
    pub fn new(nin: usize, rng: &mut StdRng) -> Self {
        Neuron {
            w: uniform_values(rng, nin),
            b: uniform_value(rng),
        }
    }

    /// The neuron's scalar activation for the given input features.
    pub fn activate(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != self.w.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.w.len(),
                actual: input.len(),
            });
        }
        let mut act = self.b.clone();
        for (wi, xi) in self.w.iter().zip(input) {
            let term = mul_op(wi, xi)?;
            act = add_op(&act, &term)?;
        }
        tanh_op(&act)
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(input)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.w.clone();
        params.push(self.b.clone());
        params
    }
}
