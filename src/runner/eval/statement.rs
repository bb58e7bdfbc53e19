//! Statement execution.

use tracing::debug;

use crate::parser::ast::{ProgramData, StatementType};
use crate::runner::ds::error::ErrorType;
use crate::runner::ds::value::Value;
use crate::runner::plugin::types::EvalContext;

use super::expression::evaluate_expression;
use super::types::{Completion, EvalResult};

/// Execute a statement and return its completion.
pub fn execute_statement(stmt: &StatementType, ctx: &mut EvalContext) -> EvalResult {
    match stmt {
        StatementType::ExpressionStatement { expression, .. } => {
            let value = evaluate_expression(expression, ctx)?;
            Ok(Completion::normal_with_value(value))
        }

        StatementType::VariableDeclaration {
            kind, name, init, ..
        } => {
            let value = evaluate_expression(init, ctx)?;
            debug!(%kind, %name, value = %value.inspect(), "declare");
            ctx.declare_binding(*kind, name, value)?;
            Ok(Completion::normal())
        }
    }
}

/// Execute every statement in order, stopping at the first error.
///
/// Returns the value of the last expression statement, if there was one.
pub fn run_program(program: &ProgramData, ctx: &mut EvalContext) -> Result<Option<Value>, ErrorType> {
    let mut last_value = None;
    for stmt in &program.body {
        let completion = execute_statement(stmt, ctx)?;
        if completion.value.is_some() {
            last_value = completion.value;
        }
    }
    Ok(last_value)
}
