//! # just-notes - runnable JavaScript interview notes
//!
//! The notes this crate grew out of are mostly commentary. The parts that compute something
//! are three small utilities, provided here as plain Rust functions:
//!
//! - [`factorial`](runner::std_lib::factorial) - recursive `n!`, with
//!   [`factorial_exact`](runner::std_lib::factorial_exact) for results beyond 64 bits
//! - [`deduplicate`](runner::std_lib::deduplicate) - distinct values in first-occurrence order
//! - [`count_occurrences`](runner::std_lib::count_occurrences) - value frequency mapping
//!
//! ```
//! use just_notes::runner::std_lib::{count_occurrences, deduplicate, factorial};
//!
//! assert_eq!(factorial(10).unwrap(), 3628800);
//! assert_eq!(deduplicate(&["2", "qwe", "2", "11"]), vec!["2", "qwe", "11"]);
//! assert_eq!(count_occurrences(&["uy", "qw", "uy"])["uy"], 2);
//! ```
//!
//! ## Running snippets
//!
//! The same utilities are exposed to a tiny snippet language (declarations, calls and
//! literals) so the notes' own examples can be executed:
//!
//! ```
//! use just_notes::parser::NotesParser;
//! use just_notes::runner::eval::run_program;
//! use just_notes::runner::plugin::types::{ConsoleLine, EvalContext};
//!
//! let code = "var arrayOfItemsToCheck = ['qw', 'ew', 'uy', '12', 'qw', '12', 'uy', 'uy'];
//!             console.log(countOccurrences(arrayOfItemsToCheck));";
//! let ast = NotesParser::parse_to_ast_from_str(code).unwrap();
//!
//! let mut ctx = EvalContext::with_core();
//! run_program(&ast, &mut ctx).unwrap();
//!
//! assert_eq!(
//!     ctx.take_output(),
//!     vec![ConsoleLine::Log("{ qw: 2, ew: 1, uy: 3, '12': 2 }".to_string())]
//! );
//! ```
//!
//! ## Architecture
//!
//! - **[`parser`]** - pest grammar and AST types
//! - **[`runner`]** - values, built-ins, evaluation context and evaluator

#[macro_use]
extern crate lazy_static;

pub mod parser;
pub mod runner;
