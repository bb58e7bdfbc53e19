use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use num_bigint::BigUint;

/// A snippet value.
///
/// Equality follows SameValueZero: `NaN` equals `NaN`, `-0` equals `0` and an integral float
/// equals the integer with the same value. Hashing agrees with that equality, so values can be
/// used as keys for de-duplication and counting.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Boolean(bool),
    String(String),
    Number(NumberType),
    BigInt(BigUint),
    Array(Vec<Value>),
    /// Key/value pairs in insertion order. Keys are unique.
    Map(Vec<(Value, Value)>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::Array(_) => "array",
            Value::Map(_) => "object",
        }
    }

    pub fn integer(i: i64) -> Self {
        Value::Number(NumberType::Integer(i))
    }

    pub fn float(f: f64) -> Self {
        Value::Number(NumberType::Float(f))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Look up a key in a `Map` value.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Render the value the way it appears nested inside an array or object.
    pub fn inspect(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::String(s) => quote(s),
            Value::Number(n) => n.to_string(),
            Value::BigInt(b) => format!("{}n", b),
            Value::Array(items) => {
                if items.is_empty() {
                    "[]".to_string()
                } else {
                    let parts: Vec<String> = items.iter().map(|v| v.inspect()).collect();
                    format!("[ {} ]", parts.join(", "))
                }
            }
            Value::Map(entries) => {
                if entries.is_empty() {
                    "{}".to_string()
                } else {
                    let parts: Vec<String> = entries
                        .iter()
                        .map(|(k, v)| format!("{}: {}", inspect_key(k), v.inspect()))
                        .collect();
                    format!("{{ {} }}", parts.join(", "))
                }
            }
        }
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Object keys are strings, so every key prints through its string form and is quoted unless it
/// reads as an identifier.
fn inspect_key(key: &Value) -> String {
    let name = key.to_string();
    if is_identifier(&name) {
        name
    } else {
        quote(&name)
    }
}

pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            _ => write!(f, "{}", self.inspect()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Undefined => {}
            Value::Boolean(b) => b.hash(state),
            Value::String(s) => s.hash(state),
            Value::Number(n) => n.hash(state),
            Value::BigInt(b) => b.hash(state),
            Value::Array(items) => items.hash(state),
            Value::Map(entries) => entries.hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<BigUint> for Value {
    fn from(b: BigUint) -> Self {
        Value::BigInt(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum NumberType {
    Integer(i64),
    Float(f64),
}

#[derive(PartialEq, Eq, Hash)]
enum NumberKey {
    Integer(i64),
    Bits(u64),
    NaN,
}

impl NumberType {
    fn key(&self) -> NumberKey {
        match *self {
            NumberType::Integer(i) => NumberKey::Integer(i),
            NumberType::Float(f) if f.is_nan() => NumberKey::NaN,
            NumberType::Float(f)
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
            {
                NumberKey::Integer(f as i64)
            }
            NumberType::Float(f) => NumberKey::Bits(f.to_bits()),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            NumberType::Integer(i) => i as f64,
            NumberType::Float(f) => f,
        }
    }

    /// The value as an exact integer, if it has no fractional part and fits `i64`.
    pub fn as_integer(&self) -> Option<i64> {
        match self.key() {
            NumberKey::Integer(i) => Some(i),
            _ => None,
        }
    }
}

impl PartialEq for NumberType {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for NumberType {}

impl Hash for NumberType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            NumberType::Integer(i) => write!(f, "{}", i),
            NumberType::Float(x) if x.is_nan() => write!(f, "NaN"),
            NumberType::Float(x) if x.is_infinite() => {
                write!(f, "{}", if x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            NumberType::Float(x) if x == 0.0 => {
                write!(f, "{}", if x.is_sign_negative() { "-0" } else { "0" })
            }
            NumberType::Float(x) => write_float(f, x),
        }
    }
}

/// Shortest round-trip digits, laid out as positional notation for magnitudes in
/// `[1e-6, 1e21)` and as `d.ddde±x` otherwise.
fn write_float(f: &mut Formatter<'_>, x: f64) -> fmt::Result {
    let scientific = format!("{:e}", x.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return write!(f, "{}", x),
    };
    let exponent: i32 = match exponent.parse() {
        Ok(e) => e,
        Err(_) => return write!(f, "{}", x),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    if x.is_sign_negative() {
        write!(f, "-")?;
    }
    if k <= n && n <= 21 {
        write!(f, "{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        write!(f, "{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        write!(f, "0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            write!(f, "{}e{}{}", first, sign, (n - 1).abs())
        } else {
            write!(f, "{}.{}e{}{}", first, rest, sign, (n - 1).abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn numbers_compare_by_same_value_zero() {
        assert_eq!(Value::integer(3), Value::float(3.0));
        assert_eq!(Value::float(-0.0), Value::integer(0));
        assert_eq!(Value::float(f64::NAN), Value::float(f64::NAN));
        assert_ne!(Value::float(0.5), Value::integer(0));
        assert_ne!(Value::string("12"), Value::integer(12));
    }

    #[test]
    fn hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Value::integer(7));
        assert!(set.contains(&Value::float(7.0)));
        set.insert(Value::float(f64::NAN));
        assert!(!set.insert(Value::float(f64::NAN)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn inspect_quotes_nested_strings() {
        let arr = Value::Array(vec![Value::string("2"), Value::string("it's"), Value::integer(3)]);
        assert_eq!(arr.inspect(), "[ '2', 'it\\'s', 3 ]");
        assert_eq!(Value::Array(vec![]).to_string(), "[]");
        assert_eq!(Value::string("plain").to_string(), "plain");
    }

    #[test]
    fn inspect_map_quotes_non_identifier_keys() {
        let map = Value::Map(vec![
            (Value::string("qw"), Value::integer(2)),
            (Value::string("12"), Value::integer(1)),
        ]);
        assert_eq!(map.to_string(), "{ qw: 2, '12': 1 }");
        assert_eq!(map.get(&Value::string("12")), Some(&Value::integer(1)));
        assert_eq!(Value::Map(vec![]).to_string(), "{}");
    }

    #[test]
    fn float_display() {
        assert_eq!(NumberType::Float(2.5).to_string(), "2.5");
        assert_eq!(NumberType::Float(4.0).to_string(), "4");
        assert_eq!(NumberType::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(NumberType::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(NumberType::Float(-1.5).to_string(), "-1.5");
        assert_eq!(NumberType::Float(123456.789).to_string(), "123456.789");
    }

    #[test]
    fn float_display_switches_to_exponent_outside_positional_range() {
        assert_eq!(NumberType::Float(1e21).to_string(), "1e+21");
        assert_eq!(NumberType::Float(1e20).to_string(), "100000000000000000000");
        assert_eq!(NumberType::Float(1.5e300).to_string(), "1.5e+300");
        assert_eq!(NumberType::Float(0.0000001).to_string(), "1e-7");
        assert_eq!(NumberType::Float(0.000001).to_string(), "0.000001");
        assert_eq!(NumberType::Float(-2.5e-8).to_string(), "-2.5e-8");
        assert_eq!(NumberType::Float(0.1).to_string(), "0.1");
    }

    #[test]
    fn negative_zero_keeps_its_sign_when_printed() {
        assert_eq!(NumberType::Float(-0.0).to_string(), "-0");
        assert_eq!(NumberType::Float(0.0).to_string(), "0");
        assert_eq!(Value::Array(vec![Value::float(-0.0)]).inspect(), "[ -0 ]");
        assert_eq!(Value::float(-0.0), Value::integer(0));
    }

    #[test]
    fn inspect_map_quotes_number_keys() {
        let map = Value::Map(vec![
            (Value::integer(1), Value::integer(2)),
            (Value::float(2.5), Value::integer(1)),
            (Value::Boolean(true), Value::integer(1)),
        ]);
        assert_eq!(map.inspect(), "{ '1': 2, '2.5': 1, true: 1 }");
    }
}
