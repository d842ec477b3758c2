// Neural-network construction on top of the engine: layer types consume the
// public Value contract (ops + data/grad access) and nothing else.

pub mod init;
pub mod layers;
pub mod module; // Trait Module

// Re-export common items
pub use layers::layer::Layer;
pub use layers::mlp::Mlp;
pub use layers::neuron::Neuron;
pub use module::Module;
