//! Parsed values, value-type specs, and per-value dispatch.
//!
//! Every token that binds to a positional or switch runs through
//! [`parse_value`], which dispatches on the definition's [`ValueType`]:
//! built-in scalar types, an enumerated choice set, or a caller-supplied
//! closure. The result is always a [`Value`], the dynamic payload stored in
//! the flat parse-result mapping.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::ParseError;

/// Flat parse-result mapping from definition name to parsed value.
///
/// Built incrementally with a right-biased merge: inserting an existing key
/// overwrites it, so a switch supplied twice keeps its last occurrence.
pub type ParsedArgs = BTreeMap<String, Value>;

/// A parsed argument value.
///
/// Nested subcommand results appear as [`Value::Map`] entries under the
/// subcommand's own name. Serializes untagged, so a result dumps as plain
/// JSON scalars and objects.
///
/// # Examples
///
/// ```
/// use argline_core::Value;
///
/// let v = Value::from(42);
/// assert_eq!(v.as_i64(), Some(42));
/// assert_eq!(serde_json::to_string(&v).unwrap(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Map(ParsedArgs),
}

impl Value {
    /// Returns the string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested result mapping, if this is a `Map`.
    pub fn as_map(&self) -> Option<&ParsedArgs> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Custom value parser: `(token index, switch alias if any, raw value)`.
///
/// May fail with any [`ParseError`] variant; the error propagates unchanged
/// and aborts the parse.
pub type ValueParser =
    Arc<dyn Fn(usize, Option<&str>, &str) -> Result<Value, ParseError> + Send + Sync>;

/// Value type accepted by a positional or switch.
#[derive(Clone)]
pub enum ValueType {
    /// Raw string, passed through unchanged.
    String,
    /// Base-10 signed integer.
    Int,
    /// Base-10 float.
    Float,
    /// Boolean. The only type whose value may be omitted: a bare switch
    /// parses to `true`.
    Bool,
    /// One of an explicit set of literal strings, matched case-sensitively.
    Choice(Vec<String>),
    /// Caller-supplied parser.
    Custom(ValueParser),
}

impl ValueType {
    /// Builds a choice set from anything yielding string-likes.
    ///
    /// # Examples
    ///
    /// ```
    /// use argline_core::ValueType;
    ///
    /// let format = ValueType::choice(["json", "yaml"]);
    /// assert_eq!(format.hint().as_deref(), Some("json/yaml"));
    /// ```
    pub fn choice<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueType::Choice(values.into_iter().map(Into::into).collect())
    }

    /// Wraps a closure as a custom value parser.
    ///
    /// # Examples
    ///
    /// ```
    /// use argline_core::{ParseError, Value, ValueType};
    ///
    /// let duration = ValueType::custom(|index, _alias, raw| {
    ///     raw.strip_suffix('m')
    ///         .and_then(|n| n.parse::<i64>().ok())
    ///         .map(Value::Int)
    ///         .ok_or(ParseError::InvalidOption {
    ///             index,
    ///             expected: "minutes (e.g. 30m)".into(),
    ///             got: raw.into(),
    ///         })
    /// });
    /// assert!(duration.hint().is_none());
    /// ```
    pub fn custom<F>(parser: F) -> Self
    where
        F: Fn(usize, Option<&str>, &str) -> Result<Value, ParseError> + Send + Sync + 'static,
    {
        ValueType::Custom(Arc::new(parser))
    }

    /// Printable type hint for usage text. `None` for custom parsers, which
    /// have no describable shape.
    pub fn hint(&self) -> Option<String> {
        match self {
            ValueType::String => Some("str".to_string()),
            ValueType::Int => Some("int".to_string()),
            ValueType::Float => Some("float".to_string()),
            ValueType::Bool => Some("bool".to_string()),
            ValueType::Choice(values) => Some(values.join("/")),
            ValueType::Custom(_) => None,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, ValueType::Bool)
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => f.write_str("String"),
            ValueType::Int => f.write_str("Int"),
            ValueType::Float => f.write_str("Float"),
            ValueType::Bool => f.write_str("Bool"),
            ValueType::Choice(values) => f.debug_tuple("Choice").field(values).finish(),
            ValueType::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Parses one raw value against a value-type spec.
///
/// `raw` is `None` when a switch was given without `=value`; that is legal
/// only for booleans (and parses to `true`). `alias` is the switch alias the
/// token arrived under, or `None` for positionals; it is forwarded to custom
/// parsers only.
pub(crate) fn parse_value(
    index: usize,
    alias: Option<&str>,
    raw: Option<&str>,
    spec: &ValueType,
) -> Result<Value, ParseError> {
    let Some(raw) = raw else {
        return if spec.is_bool() {
            Ok(Value::Bool(true))
        } else {
            Err(ParseError::ValueNotProvided { index })
        };
    };

    match spec {
        ValueType::String => Ok(Value::Str(raw.to_string())),
        ValueType::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ParseError::InvalidOption {
                index,
                expected: "int".to_string(),
                got: raw.to_string(),
            }),
        ValueType::Float => raw
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ParseError::InvalidOption {
                index,
                expected: "float".to_string(),
                got: raw.to_string(),
            }),
        ValueType::Bool => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(Value::Bool(true)),
            "0" | "false" => Ok(Value::Bool(false)),
            _ => Err(ParseError::InvalidOption {
                index,
                expected: "bool switch".to_string(),
                got: raw.to_string(),
            }),
        },
        ValueType::Choice(values) => {
            if values.iter().any(|v| v == raw) {
                Ok(Value::Str(raw.to_string()))
            } else {
                Err(ParseError::InvalidOption {
                    index,
                    expected: values.join("/"),
                    got: raw.to_string(),
                })
            }
        }
        ValueType::Custom(parser) => parser(index, alias, raw),
    }
}
