//! Core types for the evaluation engine.

use crate::runner::ds::error::ErrorType;
use crate::runner::ds::value::Value;

/// Completion record.
/// Every statement evaluation returns one; declarations complete without a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// The value, if any.
    pub value: Option<Value>,
}

impl Completion {
    /// Create a completion with no value.
    pub fn normal() -> Self {
        Completion { value: None }
    }

    /// Create a completion with a value.
    pub fn normal_with_value(value: Value) -> Self {
        Completion { value: Some(value) }
    }
}

/// Result of executing a statement.
pub type EvalResult = Result<Completion, ErrorType>;

/// Result of evaluating an expression.
pub type ValueResult = Result<Value, ErrorType>;
