//! Console built-in.
//!
//! `console.log` and `console.error` do not write to the process streams directly; lines are
//! captured on the [`EvalContext`] and the caller decides where they go.

use tracing::trace;

use crate::runner::ds::error::ErrorType;
use crate::runner::ds::value::Value;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::{ConsoleLine, EvalContext};

/// Register the console functions with the registry.
pub fn register(registry: &mut BuiltInRegistry) {
    registry.register_function("console.log", console_log);
    registry.register_function("console.error", console_error);
}

/// Format all arguments for console output.
pub fn format_args(args: &[Value]) -> String {
    args.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// console.log
fn console_log(ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ErrorType> {
    let line = format_args(&args);
    trace!(%line, "console.log");
    ctx.push_output(ConsoleLine::Log(line));
    Ok(Value::Undefined)
}

/// console.error
fn console_error(ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ErrorType> {
    let line = format_args(&args);
    trace!(%line, "console.error");
    ctx.push_output(ConsoleLine::Error(line));
    Ok(Value::Undefined)
}
