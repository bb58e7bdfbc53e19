//! Snippet execution: values, built-ins and the evaluator.
//!
//! - **[`ds`]** - values and error types
//! - **[`std_lib`]** - factorial, de-duplication, counting and `console`
//! - **[`plugin`]** - built-in registry, evaluation context and configuration
//! - **[`eval`]** - statement and expression evaluation

pub mod ds;
pub mod eval;
pub mod plugin;
pub mod std_lib;
