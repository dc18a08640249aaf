use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Argument bindings supplied to a single evaluation call.
///
/// The engine never retains a binding set beyond the call it was passed to.
pub type Arguments = HashMap<String, Value>;

/// A runtime value bound to a message argument.
///
/// The `Value` enum provides a dynamic type system for message arguments,
/// allowing integers, floats, booleans, strings, and timestamps to be passed
/// interchangeably.
///
/// # Example
///
/// ```
/// use icumsg::Value;
///
/// // Integers become Value::Number
/// let count: Value = 42.into();
///
/// // Strings become Value::String
/// let name: Value = "Alice".into();
///
/// assert_eq!(count.as_number(), Some(42));
/// assert_eq!(name.as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number (used for plural selection and `#`).
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A boolean value.
    Bool(bool),

    /// A string value.
    String(String),

    /// A timestamp for `date`/`time` formatted arguments.
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as a timestamp, if it is one.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Get this value as a numeric value, if it is one.
    pub fn as_numeric(&self) -> Option<NumericValue> {
        match self {
            Value::Number(n) => Some(NumericValue::Int(*n)),
            Value::Float(f) => Some(NumericValue::Float(*f)),
            _ => None,
        }
    }

    /// Name of this value's runtime type, for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

/// A numeric binding value, kept in its original representation so integer
/// plural operands stay exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// An exact integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
}

impl NumericValue {
    /// Subtract a plural `offset:` from this value.
    ///
    /// Returns `None` when the subtraction overflows an integer value, so an
    /// extreme `offset:` becomes a reported error instead of an abort.
    pub fn minus(self, offset: i64) -> Option<NumericValue> {
        match self {
            NumericValue::Int(n) => n.checked_sub(offset).map(NumericValue::Int),
            NumericValue::Float(f) => Some(NumericValue::Float(f - offset as f64)),
        }
    }

    /// Whether this value exactly matches an `=N` selector.
    pub fn matches_exact(self, n: i64) -> bool {
        match self {
            NumericValue::Int(i) => i == n,
            NumericValue::Float(f) => f == n as f64,
        }
    }

    /// Canonical decimal string, used for plural operand construction and
    /// `select` key coercion. Integral floats render without a fraction.
    pub fn canonical_string(self) -> String {
        match self {
            NumericValue::Int(n) => n.to_string(),
            NumericValue::Float(f) => format!("{f}"),
        }
    }
}

impl std::fmt::Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_string())
    }
}
