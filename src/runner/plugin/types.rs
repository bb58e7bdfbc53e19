//! Core types for built-ins and the evaluation context.

use std::collections::HashMap;
use std::sync::Arc;

use crate::parser::ast::DeclarationKind;
use crate::runner::ds::error::ErrorType;
use crate::runner::ds::value::Value;

use super::config::EvalConfig;
use super::registry::{core_registry, BuiltInRegistry};

/// A line written through `console`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleLine {
    Log(String),
    Error(String),
}

/// A declared name and the keyword it was declared with.
#[derive(Debug, Clone)]
pub struct Binding {
    pub kind: DeclarationKind,
    pub value: Value,
}

/// Execution context passed to built-in functions.
///
/// Every context owns its bindings and output, so two snippets never observe each other. The
/// registry is shared with other contexts until this one registers a function of its own.
pub struct EvalContext {
    bindings: HashMap<String, Binding>,
    registry: Arc<BuiltInRegistry>,
    config: EvalConfig,
    output: Vec<ConsoleLine>,
}

impl EvalContext {
    /// A context with no built-ins.
    pub fn new() -> Self {
        EvalContext {
            bindings: HashMap::new(),
            registry: Arc::new(BuiltInRegistry::new()),
            config: EvalConfig::default(),
            output: Vec::new(),
        }
    }

    /// A context with the core built-ins installed.
    pub fn with_core() -> Self {
        let mut ctx = Self::new();
        ctx.registry = core_registry();
        ctx
    }

    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the registry, e.g. with `BuiltInRegistry::with_core()`.
    pub fn install_core_builtins(&mut self, registry: BuiltInRegistry) {
        self.registry = Arc::new(registry);
    }

    pub fn registry(&self) -> Arc<BuiltInRegistry> {
        Arc::clone(&self.registry)
    }

    /// Register a native function visible only to this context.
    pub fn register_function(&mut self, name: impl Into<String>, func: NativeFn) {
        Arc::make_mut(&mut self.registry).register_function(name, func);
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn get_binding(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).map(|b| b.value.clone())
    }

    pub fn has_binding(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Declare `name`, following `var`/`let`/`const` redeclaration rules.
    pub fn declare_binding(
        &mut self,
        kind: DeclarationKind,
        name: &str,
        value: Value,
    ) -> Result<(), ErrorType> {
        if let Some(existing) = self.bindings.get(name) {
            if kind != DeclarationKind::Var || existing.kind != DeclarationKind::Var {
                return Err(ErrorType::SyntaxError(format!(
                    "Identifier '{}' has already been declared",
                    name
                )));
            }
        }
        self.bindings.insert(name.to_string(), Binding { kind, value });
        Ok(())
    }

    pub fn push_output(&mut self, line: ConsoleLine) {
        self.output.push(line);
    }

    /// Drain the console lines captured so far.
    pub fn take_output(&mut self) -> Vec<ConsoleLine> {
        std::mem::take(&mut self.output)
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Function signature for built-ins.
/// Native functions receive the evaluation context and the evaluated arguments.
pub type NativeFn = fn(ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ErrorType>;

/// Closure-backed built-in.
pub type PluginFn = dyn Fn(&mut EvalContext, Vec<Value>) -> Result<Value, ErrorType> + Send + Sync;

/// Built-in function - either compiled-in or supplied at runtime.
#[derive(Clone)]
pub enum BuiltInFn {
    /// Direct function pointer.
    Native(NativeFn),

    /// Closure registered by an embedder.
    Plugin(Arc<PluginFn>),
}

impl BuiltInFn {
    /// Execute this built-in function.
    pub fn call(&self, ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ErrorType> {
        match self {
            BuiltInFn::Native(f) => f(ctx, args),
            BuiltInFn::Plugin(f) => f(ctx, args),
        }
    }
}
