//! Built-in registry, evaluation context and configuration.
//!
//! Built-ins are plain functions registered under their call path, so `console.log` is a
//! single entry rather than a method on an object. The core set is built once and shared
//! between contexts through an `Arc`; a context that registers its own function gets a private
//! copy first, leaving every other context untouched.
//!
//! ```
//! use just_notes::runner::plugin::types::EvalContext;
//! use just_notes::runner::ds::value::Value;
//!
//! let mut ctx = EvalContext::with_core();
//! ctx.register_function("double", |_ctx, args| match args.first() {
//!     Some(Value::Number(n)) => Ok(Value::float(n.as_f64() * 2.0)),
//!     _ => Ok(Value::Undefined),
//! });
//! assert!(ctx.registry().has_function("double"));
//! assert!(!EvalContext::with_core().registry().has_function("double"));
//! ```

pub mod config;
pub mod registry;
pub mod types;

pub use config::EvalConfig;
pub use registry::{core_registry, BuiltInRegistry, RegistryError};
pub use types::{BuiltInFn, ConsoleLine, EvalContext, NativeFn};
