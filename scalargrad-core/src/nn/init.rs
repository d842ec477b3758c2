use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

/// Draws one parameter node uniformly from [-1, 1].
///
/// The generator is threaded in explicitly (seed it with
/// `StdRng::seed_from_u64`) so parameter initialization is reproducible and
/// never depends on ambient global state.
pub fn uniform_value(rng: &mut StdRng) -> Value {
    let dist = Uniform::new_inclusive(-1.0, 1.0);
    Value::new(dist.sample(rng))
}

/// Draws `n` parameter nodes uniformly from [-1, 1].
pub fn uniform_values(rng: &mut StdRng, n: usize) -> Vec<Value> {
    (0..n).map(|_| uniform_value(rng)).collect()
}
