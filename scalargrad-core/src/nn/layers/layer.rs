use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::rngs::StdRng;

/// A fully-connected layer of independent tanh neurons over the same input.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer mapping `nin` input features to `nout` outputs.
    pub fn new(nin: usize, nout: usize, rng: &mut StdRng) -> Self {
        Layer {
            neurons: (0..nout).map(|_| Neuron::new(nin, rng)).collect(),
        }
    }

    /// Number of output features.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(input))
            .collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_layer_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        let layer = Layer::new(3, 4, &mut rng);
        assert_eq!(layer.len(), 4);
        assert_eq!(layer.parameters().len(), 4 * (3 + 1));

        let input = [Value::new(1.0), Value::new(0.0), Value::new(-1.0)];
        let output = layer.forward(&input).unwrap();
        assert_eq!(output.len(), 4);
    }

    #[test]
    fn test_neurons_share_the_input_nodes() {
        let mut rng = StdRng::seed_from_u64(8);
        let layer = Layer::new(2, 3, &mut rng);
        let input = [Value::new(0.25), Value::new(-0.75)];
        let outputs = layer.forward(&input).unwrap();

        // Summing the outputs and backpropagating accumulates each input's
        // gradient across all three neurons.
        let total = outputs
            .into_iter()
            .reduce(|acc, out| &acc + &out)
            .unwrap();
        total.backward().unwrap();
        assert_ne!(input[0].grad(), 0.0);
        assert_ne!(input[1].grad(), 0.0);
    }
}
