//! Typed property values

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value type a field is edited as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    Number,
    String,
}

/// A field value read from or written to an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl Default for PropertyValue {
    fn default() -> Self {
        PropertyValue::String(String::new())
    }
}

impl PropertyValue {
    /// Default value for a value type (`false`, `0`, empty string)
    pub fn default_for(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Boolean => PropertyValue::Bool(false),
            ValueType::Number => PropertyValue::Number(0.0),
            ValueType::String => PropertyValue::String(String::new()),
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            PropertyValue::Bool(_) => ValueType::Boolean,
            PropertyValue::Number(_) => ValueType::Number,
            PropertyValue::String(_) => ValueType::String,
        }
    }

    /// Truthiness of the value. Numbers are true when non-zero, strings when non-empty.
    pub fn as_bool(&self) -> bool {
        match self {
            PropertyValue::Bool(b) => *b,
            PropertyValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropertyValue::String(s) => !s.is_empty(),
        }
    }

    /// Numeric view of the value. Unparseable strings, NaN and infinities read as `0`.
    pub fn as_number(&self) -> f64 {
        let value = match self {
            PropertyValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            PropertyValue::Number(n) => *n,
            PropertyValue::String(s) => s.trim().parse().unwrap_or(0.0),
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Convert into the given value type
    pub fn coerce(self, value_type: ValueType) -> Self {
        match value_type {
            ValueType::Boolean => PropertyValue::Bool(self.as_bool()),
            ValueType::Number => PropertyValue::Number(self.as_number()),
            ValueType::String => PropertyValue::String(self.to_string()),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<f32> for PropertyValue {
    /// Widens through the shortest decimal so `0.1f32` becomes `0.1`
    fn from(value: f32) -> Self {
        let widened = value.to_string().parse().unwrap_or(value as f64);
        PropertyValue::Number(widened)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(value as f64)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}
