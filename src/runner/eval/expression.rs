//! Expression evaluation.

use tracing::trace;

use crate::parser::ast::{ExpressionType, NumberLiteralType};
use crate::runner::ds::error::ErrorType;
use crate::runner::ds::value::{NumberType, Value};
use crate::runner::plugin::types::EvalContext;

use super::types::ValueResult;

/// Evaluate an expression and return its value.
pub fn evaluate_expression(expr: &ExpressionType, ctx: &mut EvalContext) -> ValueResult {
    match expr {
        ExpressionType::StringLiteral { value, .. } => Ok(Value::String(value.clone())),

        ExpressionType::NumberLiteral { value, .. } => Ok(Value::Number(match *value {
            NumberLiteralType::IntegerLiteral(i) => NumberType::Integer(i),
            NumberLiteralType::FloatLiteral(f) => NumberType::Float(f),
        })),

        ExpressionType::BooleanLiteral { value, .. } => Ok(Value::Boolean(*value)),

        ExpressionType::Array { elements, .. } => {
            let values = evaluate_arguments(elements, ctx)?;
            Ok(Value::Array(values))
        }

        ExpressionType::Identifier { name, .. } => ctx
            .get_binding(name)
            .ok_or_else(|| ErrorType::ReferenceError(format!("{} is not defined", name))),

        ExpressionType::Call {
            callee, arguments, ..
        } => evaluate_call_expression(callee, arguments, ctx),
    }
}

/// Evaluate expressions left to right.
fn evaluate_arguments(
    arguments: &[ExpressionType],
    ctx: &mut EvalContext,
) -> Result<Vec<Value>, ErrorType> {
    arguments
        .iter()
        .map(|arg| evaluate_expression(arg, ctx))
        .collect()
}

fn evaluate_call_expression(
    callee: &[String],
    arguments: &[ExpressionType],
    ctx: &mut EvalContext,
) -> ValueResult {
    let name = callee.join(".");
    let head = callee.first().map(String::as_str).unwrap_or_default();
    // Declared names shadow built-ins, and no binding holds a function.
    if ctx.has_binding(head) {
        return Err(ErrorType::TypeError(format!("{} is not a function", name)));
    }

    let registry = ctx.registry();
    let func = match registry.get_function(&name) {
        Some(func) => func,
        None if callee.len() > 1 && registry.has_object(head) => {
            return Err(ErrorType::TypeError(format!("{} is not a function", name)))
        }
        None => {
            return Err(ErrorType::ReferenceError(format!(
                "{} is not defined",
                head
            )))
        }
    };

    let args = evaluate_arguments(arguments, ctx)?;
    trace!(callee = %name, argc = args.len(), "calling built-in");
    func.call(ctx, args)
}
