//! # scalargrad-core
//!
//! A minimal scalar-valued reverse-mode automatic differentiation engine.
//!
//! Arithmetic on [`Value`] nodes eagerly builds a computation DAG; calling
//! [`Value::backward`] on an output node computes the exact gradient of that
//! output with respect to every node reachable from it, summing
//! contributions correctly across shared subexpressions.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = Value::new(10.0);
//! let d = &(&a * &b) + &c;
//! let loss = &d * -2.0;
//!
//! loss.backward().unwrap();
//! assert_eq!(loss.data(), -8.0);
//! assert_eq!(a.grad(), 6.0);
//! ```
//!
//! Gradients are never reset automatically: call [`Value::zero_grad`] (or
//! [`nn::Module::zero_grad`]) before reusing nodes in a new backward pass.

pub mod autograd;
pub mod dot;
pub mod error;
pub mod nn;
pub mod ops;
pub mod value;
pub mod value_data;

pub use error::ScalarGradError;
pub use value::Value;
pub use value_data::Op;
