//! De-duplication and duplicate counting.
//!
//! The generic functions work on any slice and never touch their input. The `deduplicate` and
//! `countOccurrences` built-ins expose them to snippets.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::runner::ds::error::ErrorType;
use crate::runner::ds::value::Value;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::EvalContext;

/// Register the array built-ins with the registry.
pub fn register(registry: &mut BuiltInRegistry) {
    registry.register_function("deduplicate", deduplicate_builtin);
    registry.register_function("countOccurrences", count_occurrences_builtin);
}

/// Distinct values of `items` in order of first occurrence.
pub fn deduplicate<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Same result as [`deduplicate`], keeping element `i` only when the first index of its value
/// is `i`. Needs nothing beyond `PartialEq` but is quadratic.
pub fn deduplicate_by_index<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| items.iter().position(|other| other == *item) == Some(*index))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Number of occurrences of each distinct value in `items`.
pub fn count_occurrences<T: Eq + Hash + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

/// Like [`count_occurrences`], with the entries ordered by first occurrence.
pub fn count_occurrences_ordered<T: Eq + Hash + Clone>(items: &[T]) -> Vec<(T, usize)> {
    let mut slots: HashMap<&T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match slots.get(item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(item, counts.len());
                counts.push((item.clone(), 1));
            }
        }
    }
    counts
}

fn array_argument<'a>(name: &str, args: &'a [Value]) -> Result<&'a [Value], ErrorType> {
    match args.first() {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        other => Err(ErrorType::TypeError(format!(
            "{} expects an array, got {}",
            name,
            other.map(Value::type_name).unwrap_or("undefined")
        ))),
    }
}

/// deduplicate(array)
fn deduplicate_builtin(_ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ErrorType> {
    let items = array_argument("deduplicate", &args)?;
    Ok(Value::Array(deduplicate(items)))
}

/// countOccurrences(array)
fn count_occurrences_builtin(
    _ctx: &mut EvalContext,
    args: Vec<Value>,
) -> Result<Value, ErrorType> {
    let items = array_argument("countOccurrences", &args)?;
    let entries = count_occurrences_ordered(items)
        .into_iter()
        .map(|(value, count)| (value, Value::integer(count as i64)))
        .collect();
    Ok(Value::Map(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input() {
        let empty: Vec<String> = vec![];
        assert!(deduplicate(&empty).is_empty());
        assert!(deduplicate_by_index(&empty).is_empty());
        assert!(count_occurrences(&empty).is_empty());
        assert!(count_occurrences_ordered(&empty).is_empty());
    }

    #[test]
    fn deduplicate_keeps_first_occurrences() {
        let input = strings(&["2", "qwe", "2", "qwe", "2", "qwe", "11", "sth", "sth"]);
        assert_eq!(deduplicate(&input), strings(&["2", "qwe", "11", "sth"]));
        assert_eq!(input.len(), 9);
    }

    #[test]
    fn index_approach_agrees() {
        let input = vec![3, 1, 3, 2, 1, 5, 5, 3];
        assert_eq!(deduplicate_by_index(&input), deduplicate(&input));
        assert_eq!(deduplicate_by_index(&input), vec![3, 1, 2, 5]);
    }

    #[test]
    fn deduplicate_is_idempotent() {
        let input = strings(&["a", "b", "a", "c", "b"]);
        let once = deduplicate(&input);
        assert_eq!(deduplicate(&once), once);
    }

    #[test]
    fn counts_each_element_under_its_own_key() {
        let input = strings(&["qw", "ew", "uy", "12", "qw", "12", "uy", "uy"]);
        let counts = count_occurrences(&input);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts["qw"], 2);
        assert_eq!(counts["ew"], 1);
        assert_eq!(counts["uy"], 3);
        assert_eq!(counts["12"], 2);
        assert_eq!(counts.values().sum::<usize>(), input.len());
    }

    #[test]
    fn ordered_counts_follow_first_occurrence() {
        let input = vec!['b', 'a', 'b', 'c', 'a', 'b'];
        assert_eq!(
            count_occurrences_ordered(&input),
            vec![('b', 3), ('a', 2), ('c', 1)]
        );
    }

    #[test]
    fn mixed_values_use_value_equality() {
        let input = vec![
            Value::string("12"),
            Value::integer(12),
            Value::float(12.0),
            Value::float(f64::NAN),
            Value::float(f64::NAN),
        ];
        assert_eq!(
            deduplicate(&input),
            vec![Value::string("12"), Value::integer(12), Value::float(f64::NAN)]
        );
    }
}
