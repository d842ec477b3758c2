use crate::error::ScalarGradError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::rngs::StdRng;

/// Multi-layer perceptron: tanh layers chained output-to-input.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP with `nin` input features and one layer per entry of
    /// `nouts` (e.g. `nin = 3`, `nouts = [4, 4, 1]`).
    pub fn new(nin: usize, nouts: &[usize], rng: &mut StdRng) -> Self {
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);
        Mlp {
            layers: sizes
                .windows(2)
                .map(|pair| Layer::new(pair[0], pair[1], rng))
                .collect(),
        }
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_mlp_shapes() {
        let mut rng = StdRng::seed_from_u64(11);
        let mlp = Mlp::new(3, &[4, 4, 1], &mut rng);
        // 4*(3+1) + 4*(4+1) + 1*(4+1)
        assert_eq!(mlp.parameters().len(), 41);

        let input = [Value::new(2.0), Value::new(3.0), Value::new(-1.0)];
        let output = mlp.forward(&input).unwrap();
        assert_eq!(output.len(), 1);
        assert!(output[0].data() > -1.0 && output[0].data() < 1.0);
    }

    #[test]
    fn test_training_step_reduces_loss() {
        let mut rng = StdRng::seed_from_u64(13);
        let mlp = Mlp::new(2, &[4, 1], &mut rng);
        let input = [Value::new(0.5), Value::new(-1.0)];
        let target = 1.0;

        let loss_at = |mlp: &Mlp| -> f64 {
            let out = mlp.forward(&input).unwrap();
            (out[0].data() - target).powi(2)
        };

        let before = loss_at(&mlp);
        for _ in 0..10 {
            let out = mlp.forward(&input).unwrap();
            let loss = (&out[0] - target).pow(2.0);
            mlp.zero_grad();
            loss.backward().unwrap();
            for param in mlp.parameters() {
                param.set_data(param.data() - 0.05 * param.grad());
            }
        }
        assert!(loss_at(&mlp) < before);
    }

    #[test]
    fn test_same_seed_builds_identical_networks() {
        let mut rng_a = StdRng::seed_from_u64(17);
        let mut rng_b = StdRng::seed_from_u64(17);
        let mlp_a = Mlp::new(3, &[4, 1], &mut rng_a);
        let mlp_b = Mlp::new(3, &[4, 1], &mut rng_b);

        let data = |mlp: &Mlp| -> Vec<f64> {
            mlp.parameters().iter().map(|p| p.data()).collect()
        };
        assert_eq!(data(&mlp_a), data(&mlp_b));
    }
}
