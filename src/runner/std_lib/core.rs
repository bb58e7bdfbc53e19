//! Core built-ins registration.

use crate::runner::plugin::registry::BuiltInRegistry;

use super::array;
use super::console;
use super::math;

/// Register all core built-ins with the registry.
pub fn register_core_builtins(registry: &mut BuiltInRegistry) {
    math::register(registry);
    array::register(registry);
    console::register(registry);
}
