//! Built-in registry for managing built-in functions.

use std::collections::HashMap;
use std::sync::Arc;

use super::types::{BuiltInFn, EvalContext, NativeFn};
use crate::runner::ds::error::ErrorType;
use crate::runner::ds::value::Value;
use crate::runner::std_lib::register_core_builtins;

lazy_static! {
    static ref CORE_REGISTRY: Arc<BuiltInRegistry> = Arc::new(BuiltInRegistry::with_core());
}

/// The shared, immutable registry of core built-ins.
pub fn core_registry() -> Arc<BuiltInRegistry> {
    Arc::clone(&CORE_REGISTRY)
}

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No function registered under this name.
    FunctionNotFound(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::FunctionNotFound(name) => write!(f, "Function not found: {}", name),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Registry for built-in functions, keyed by their dotted call path (`factorial`,
/// `console.log`).
#[derive(Clone, Default)]
pub struct BuiltInRegistry {
    functions: HashMap<String, BuiltInFn>,

    /// Names that were replaced after registration, with the number of overrides.
    overrides: HashMap<String, usize>,
}

impl BuiltInRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        BuiltInRegistry {
            functions: HashMap::new(),
            overrides: HashMap::new(),
        }
    }

    /// Create a registry with the core built-ins.
    pub fn with_core() -> Self {
        let mut registry = Self::new();
        register_core_builtins(&mut registry);
        registry
    }

    /// Register a native function.
    pub fn register_function(&mut self, name: impl Into<String>, func: NativeFn) {
        self.functions.insert(name.into(), BuiltInFn::Native(func));
    }

    /// Register a closure.
    pub fn register_closure<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&mut EvalContext, Vec<Value>) -> Result<Value, ErrorType> + Send + Sync + 'static,
    {
        self.functions
            .insert(name.into(), BuiltInFn::Plugin(Arc::new(func)));
    }

    /// Replace an existing built-in.
    pub fn override_function(&mut self, name: &str, func: BuiltInFn) -> Result<(), RegistryError> {
        let slot = self
            .functions
            .get_mut(name)
            .ok_or_else(|| RegistryError::FunctionNotFound(name.to_string()))?;
        *slot = func;
        *self.overrides.entry(name.to_string()).or_insert(0) += 1;
        Ok(())
    }

    /// How many times `name` has been overridden.
    pub fn override_count(&self, name: &str) -> usize {
        self.overrides.get(name).copied().unwrap_or(0)
    }

    /// Get a built-in function for execution.
    pub fn get_function(&self, name: &str) -> Option<&BuiltInFn> {
        self.functions.get(name)
    }

    /// Check if a function exists in the registry.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Check if any function lives under the object `name` (e.g. `console`).
    pub fn has_object(&self, name: &str) -> bool {
        let prefix = format!("{}.", name);
        self.functions.keys().any(|k| k.starts_with(&prefix))
    }

    /// All registered names, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}
