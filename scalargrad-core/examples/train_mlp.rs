//! Trains a tiny binary classifier MLP with plain gradient descent.
//!
//! Run with `cargo run --example train_mlp`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng);

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0]; // desired targets

    for step in 0..20 {
        // forward pass
        let mut loss = Value::new(0.0);
        for (x, &y) in xs.iter().zip(&ys) {
            let input: Vec<Value> = x.iter().map(|&f| Value::new(f)).collect();
            let pred = mlp.forward(&input)?;
            loss = &loss + &(&pred[0] - y).pow(2.0);
        }

        // gradients must be reset before each backward pass
        mlp.zero_grad();
        loss.backward()?;

        // gradient descent on the parameters
        for param in mlp.parameters() {
            param.set_data(param.data() - 0.05 * param.grad());
        }

        println!("{step} {}", loss.data());
    }

    Ok(())
}
