//! Operator sugar over the fallible `*_op` functions.
//!
//! Every combination of `Value`, `&Value`, and `f64` on either side is
//! supported; raw numbers are wrapped into leaf nodes, so `2.0 * &v` and
//! `&v * 2.0` build the same graph shape as the node-first forms. The
//! operators delegate to the `*_op` functions and panic on error; use the
//! `*_op` functions directly to propagate errors instead.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shallow on purpose: printing operands would walk the whole graph.
        write!(f, "Value(data={}, grad={})", self.data(), self.grad())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data())
    }
}

// --- Addition ---

impl Add for &Value {
    type Output = Value;
    fn add(self, rhs: Self) -> Value {
        add_op(self, rhs).expect("add_op failed")
    }
}

impl Add for Value {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        &self + &rhs
    }
}

impl Add<&Value> for Value {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        &self + rhs
    }
}

impl Add<Value> for &Value {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        self + &rhs
    }
}

impl Add<f64> for &Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        self + &Value::new(rhs)
    }
}

impl Add<f64> for Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        &self + &Value::new(rhs)
    }
}

impl Add<&Value> for f64 {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        &Value::new(self) + rhs
    }
}

impl Add<Value> for f64 {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        &Value::new(self) + &rhs
    }
}

// --- Subtraction ---

impl Sub for &Value {
    type Output = Value;
    fn sub(self, rhs: Self) -> Value {
        sub_op(self, rhs).expect("sub_op failed")
    }
}

impl Sub for Value {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        &self - &rhs
    }
}

impl Sub<&Value> for Value {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        &self - rhs
    }
}

impl Sub<Value> for &Value {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        self - &rhs
    }
}

impl Sub<f64> for &Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        self - &Value::new(rhs)
    }
}

impl Sub<f64> for Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        &self - &Value::new(rhs)
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        &Value::new(self) - rhs
    }
}

impl Sub<Value> for f64 {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        &Value::new(self) - &rhs
    }
}

// --- Multiplication ---

impl Mul for &Value {
    type Output = Value;
    fn mul(self, rhs: Self) -> Value {
        mul_op(self, rhs).expect("mul_op failed")
    }
}

impl Mul for Value {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        &self * &rhs
    }
}

impl Mul<&Value> for Value {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        &self * rhs
    }
}

impl Mul<Value> for &Value {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        self * &rhs
    }
}

impl Mul<f64> for &Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        self * &Value::new(rhs)
    }
}

impl Mul<f64> for Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        &self * &Value::new(rhs)
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        &Value::new(self) * rhs
    }
}

impl Mul<Value> for f64 {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        &Value::new(self) * &rhs
    }
}

// --- Division ---

impl Div for &Value {
    type Output = Value;
    fn div(self, rhs: Self) -> Value {
        div_op(self, rhs).expect("div_op failed")
    }
}

impl Div for Value {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        &self / &rhs
    }
}

impl Div<&Value> for Value {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        &self / rhs
    }
}

impl Div<Value> for &Value {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        self / &rhs
    }
}

impl Div<f64> for &Value {
    type Output = Value;
    fn div(self, rhs: f64) -> Value {
        self / &Value::new(rhs)
    }
}

impl Div<f64> for Value {
    type Output = Value;
    fn div(self, rhs: f64) -> Value {
        &self / &Value::new(rhs)
    }
}

impl Div<&Value> for f64 {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        &Value::new(self) / rhs
    }
}

impl Div<Value> for f64 {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        &Value::new(self) / &rhs
    }
}

// --- Negation ---

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self).expect("neg_op failed")
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        -&self
    }
}
