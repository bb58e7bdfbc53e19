//! Evaluation module for executing snippet ASTs.

pub mod expression;
pub mod statement;
pub mod types;

pub use expression::evaluate_expression;
pub use statement::{execute_statement, run_program};
pub use types::{Completion, EvalResult, ValueResult};
