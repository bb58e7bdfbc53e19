//! Data structures shared by the evaluator and the built-ins.

pub mod error;
pub mod value;
