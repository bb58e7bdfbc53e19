//! Factorial.
//!
//! [`factorial`] follows the recursive definition with the base case `n <= 1`, so `0! = 1` and
//! negative input is rejected instead of recursing forever. Results are exact up to `20!`, the
//! largest factorial that fits in 64 bits; [`factorial_exact`] covers everything beyond.

use num_bigint::BigUint;
use tracing::debug;

use crate::runner::ds::error::ErrorType;
use crate::runner::ds::value::Value;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::EvalContext;

/// Largest `n` for which `n!` fits in a `u64`.
pub const MAX_U64_FACTORIAL_INPUT: i64 = 20;

/// Register `factorial` with the registry.
pub fn register(registry: &mut BuiltInRegistry) {
    registry.register_function("factorial", factorial_builtin);
}

/// Compute `n!`.
///
/// Fails with [`ErrorType::InvalidArgument`] for negative `n` and with
/// [`ErrorType::RangeError`] when the result would not fit in a `u64`.
pub fn factorial(n: i64) -> Result<u64, ErrorType> {
    if n < 0 {
        return Err(ErrorType::InvalidArgument(format!(
            "factorial is not defined for {}",
            n
        )));
    }
    if n > MAX_U64_FACTORIAL_INPUT {
        return Err(ErrorType::RangeError(format!(
            "{}! does not fit in 64 bits",
            n
        )));
    }
    Ok(factorial_recursive(n as u64))
}

fn factorial_recursive(n: u64) -> u64 {
    if n <= 1 {
        return 1;
    }
    n * factorial_recursive(n - 1)
}

/// Compute `n!` with arbitrary precision.
pub fn factorial_exact(n: u64) -> BigUint {
    (2..=n).fold(BigUint::from(1u32), |acc, k| acc * k)
}

/// factorial(n)
fn factorial_builtin(ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ErrorType> {
    let n = match args.first() {
        Some(Value::Number(num)) => match num.as_integer() {
            Some(i) if i >= 0 => i as u64,
            _ => {
                return Err(ErrorType::InvalidArgument(format!(
                    "factorial expects a non-negative integer, got {}",
                    num
                )))
            }
        },
        other => {
            return Err(ErrorType::InvalidArgument(format!(
                "factorial expects a non-negative integer, got {}",
                other.map(Value::type_name).unwrap_or("undefined")
            )))
        }
    };

    let config = ctx.config();
    if n > config.max_factorial_input {
        return Err(ErrorType::RangeError(format!(
            "factorial input {} exceeds the limit of {}",
            n, config.max_factorial_input
        )));
    }

    if n <= MAX_U64_FACTORIAL_INPUT as u64 {
        let result = factorial(n as i64)?;
        return Ok(Value::integer(result as i64));
    }

    if config.exact_integers {
        debug!(n = n, "factorial exceeds 64 bits, computing exactly");
        Ok(Value::BigInt(factorial_exact(n)))
    } else {
        Err(ErrorType::RangeError(format!(
            "{}! does not fit in 64 bits",
            n
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(10), Ok(3628800));
    }

    #[test]
    fn zero_is_one() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial_exact(0), BigUint::from(1u32));
    }

    #[test]
    fn satisfies_recurrence() {
        for n in 1..=MAX_U64_FACTORIAL_INPUT {
            assert_eq!(
                factorial(n).unwrap(),
                n as u64 * factorial(n - 1).unwrap(),
                "recurrence broken at {}",
                n
            );
        }
    }

    #[test]
    fn negative_is_invalid() {
        assert!(matches!(factorial(-1), Err(ErrorType::InvalidArgument(_))));
        assert!(matches!(factorial(i64::MIN), Err(ErrorType::InvalidArgument(_))));
    }

    #[test]
    fn overflow_is_range_error() {
        assert_eq!(factorial(20), Ok(2432902008176640000));
        assert!(matches!(factorial(21), Err(ErrorType::RangeError(_))));
        assert!(matches!(factorial(i64::MAX), Err(ErrorType::RangeError(_))));
    }

    #[test]
    fn exact_matches_fixed_width_and_goes_beyond() {
        for n in 0..=20u64 {
            assert_eq!(factorial_exact(n), BigUint::from(factorial(n as i64).unwrap()));
        }
        assert_eq!(
            factorial_exact(25).to_string(),
            "15511210043330985984000000"
        );
    }
}
