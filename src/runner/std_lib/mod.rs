//! Standard library built-ins.
//!
//! The pure utilities ([`factorial`], [`deduplicate`], [`count_occurrences`] and friends) are
//! plain generic functions; each module also registers snippet-facing wrappers.

pub mod array;
pub mod console;
pub mod core;
pub mod math;

pub use self::array::{
    count_occurrences, count_occurrences_ordered, deduplicate, deduplicate_by_index,
};
pub use self::core::register_core_builtins;
pub use self::math::{factorial, factorial_exact, MAX_U64_FACTORIAL_INPUT};
