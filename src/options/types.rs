//! Core types for the option system

use std::fmt;

use regex::Regex;

use crate::error::{OptionError, Result};
use crate::transport::TransferOpt;

/// A raw or validated option value.
///
/// Callers hand values in through the `From` conversions; validated values
/// come back out of the factory inside a [`TransferOption`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Insertion-ordered key/value pairs, used for cookie maps.
    Map(Vec<(String, String)>),
}

impl Value {
    /// Get as bool, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as integer. Accepts integral floats and numeric strings.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            Value::Str(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    /// Get as string slice, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Coerce any scalar to its text form. Maps have no text form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Bool(v) => Some(v.to_string()),
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::Str(v) => Some(v.clone()),
            Value::Map(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Map(_) => "map",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<(String, String)>> for Value {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Value::Map(pairs)
    }
}

impl From<Vec<(&str, &str)>> for Value {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Per-identifier validation and transformation function.
pub type Normalizer = fn(Value) -> Result<Value>;

/// Value-type classification with constraints for validation.
///
/// Each kind validates on its own; the factory only selects which kind an
/// identifier is classified as.
#[derive(Debug, Clone)]
pub enum OptionKind {
    /// Strict boolean. No numeric or string truthiness fallback.
    Bool,
    /// Numeric value within inclusive bounds. No upper bound when `max` is `None`.
    Int { min: i64, max: Option<i64> },
    /// Any scalar coercible to text.
    Text,
    /// Non-empty path-like string. Existence checks are the consumer's job.
    File,
    /// Stringified value must match `pattern`; `message` follows the quoted
    /// offending value in the error.
    Regex {
        pattern: &'static Regex,
        message: Option<&'static str>,
    },
    /// Validation and transformation delegated to a per-identifier function.
    Callback(Normalizer),
}

impl OptionKind {
    /// Validate a raw value against this kind, returning the accepted
    /// (possibly transformed) value.
    ///
    /// This is the single gate: no [`TransferOption`] exists unless this
    /// call succeeded.
    pub fn validate(&self, raw: Value) -> Result<Value> {
        match self {
            OptionKind::Bool => match raw {
                Value::Bool(_) => Ok(raw),
                other => Err(OptionError::new(format!(
                    "expected a boolean value, got a {} value",
                    other.type_name()
                ))),
            },
            OptionKind::Int { min, max } => {
                let n = raw.as_i64().ok_or_else(|| {
                    OptionError::new(match raw.as_text() {
                        Some(text) => format!("\"{text}\" is not a valid integer"),
                        None => format!(
                            "expected an integer value, got a {} value",
                            raw.type_name()
                        ),
                    })
                })?;
                if n < *min {
                    return Err(OptionError::new(format!(
                        "Value {n} is below minimum {min}"
                    )));
                }
                if let Some(max) = max {
                    if n > *max {
                        return Err(OptionError::new(format!(
                            "Value {n} is above maximum {max}"
                        )));
                    }
                }
                Ok(Value::Int(n))
            }
            OptionKind::Text => {
                let text = raw.as_text().ok_or_else(|| {
                    OptionError::new(format!(
                        "expected a text value, got a {} value",
                        raw.type_name()
                    ))
                })?;
                Ok(Value::Str(text))
            }
            OptionKind::File => {
                let path = raw.as_text().ok_or_else(|| {
                    OptionError::new(format!(
                        "expected a file path, got a {} value",
                        raw.type_name()
                    ))
                })?;
                if path.trim().is_empty() {
                    return Err(OptionError::new(format!(
                        "\"{path}\" is not a valid file path"
                    )));
                }
                Ok(Value::Str(path))
            }
            OptionKind::Regex { pattern, message } => {
                let text = raw.as_text().ok_or_else(|| {
                    OptionError::new(format!(
                        "expected a text value, got a {} value",
                        raw.type_name()
                    ))
                })?;
                if !pattern.is_match(&text) {
                    let message = message.unwrap_or("does not match expected format");
                    return Err(OptionError::new(format!("\"{text}\" {message}")));
                }
                Ok(Value::Str(text))
            }
            OptionKind::Callback(normalize) => normalize(raw),
        }
    }
}

/// A validated transfer option: canonical identifier plus accepted value.
///
/// Only the factory constructs these, and only after validation succeeded.
/// Immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOption {
    id: TransferOpt,
    value: Value,
}

impl TransferOption {
    pub(crate) fn new(id: TransferOpt, value: Value) -> Self {
        Self { id, value }
    }

    /// Canonical identifier this option configures.
    pub fn id(&self) -> TransferOpt {
        self.id
    }

    /// Numeric identifier as applied to the transfer handle.
    pub fn raw_id(&self) -> i64 {
        self.id.raw()
    }

    /// The validated value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl fmt::Display for TransferOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?}", self.id, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-6]$").unwrap());

    #[test]
    fn test_bool_kind_is_strict() {
        assert_eq!(
            OptionKind::Bool.validate(Value::Bool(true)).unwrap(),
            Value::Bool(true)
        );
        assert!(OptionKind::Bool.validate(Value::Int(1)).is_err());
        assert!(OptionKind::Bool.validate(Value::Str("true".into())).is_err());
    }

    #[test]
    fn test_int_kind_bounds() {
        let kind = OptionKind::Int {
            min: 0,
            max: Some(10),
        };
        assert_eq!(kind.validate(Value::Int(5)).unwrap(), Value::Int(5));

        let err = kind.validate(Value::Int(-1)).unwrap_err();
        assert!(err.message().contains("below minimum 0"), "{err}");

        let err = kind.validate(Value::Int(11)).unwrap_err();
        assert!(err.message().contains("above maximum 10"), "{err}");
    }

    #[test]
    fn test_int_kind_unbounded_above() {
        let kind = OptionKind::Int { min: 0, max: None };
        assert_eq!(
            kind.validate(Value::Int(i64::MAX)).unwrap(),
            Value::Int(i64::MAX)
        );
    }

    #[test]
    fn test_int_kind_coerces_numeric_strings() {
        let kind = OptionKind::Int { min: 0, max: None };
        assert_eq!(
            kind.validate(Value::Str("8080".into())).unwrap(),
            Value::Int(8080)
        );
        let err = kind.validate(Value::Str("eighty".into())).unwrap_err();
        assert!(err.message().contains("eighty"), "{err}");
    }

    #[test]
    fn test_text_kind_coerces_scalars() {
        assert_eq!(
            OptionKind::Text.validate(Value::Int(42)).unwrap(),
            Value::Str("42".into())
        );
        assert!(OptionKind::Text.validate(Value::Map(vec![])).is_err());
    }

    #[test]
    fn test_file_kind_rejects_empty_path() {
        assert!(OptionKind::File.validate(Value::Str("  ".into())).is_err());
        assert_eq!(
            OptionKind::File
                .validate(Value::Str("/tmp/cookies.txt".into()))
                .unwrap(),
            Value::Str("/tmp/cookies.txt".into())
        );
    }

    #[test]
    fn test_regex_kind_default_message() {
        let kind = OptionKind::Regex {
            pattern: &DIGITS,
            message: None,
        };
        let err = kind.validate(Value::Int(9)).unwrap_err();
        assert_eq!(err.message(), "\"9\" does not match expected format");
    }

    #[test]
    fn test_regex_kind_custom_message() {
        let kind = OptionKind::Regex {
            pattern: &DIGITS,
            message: Some("is not valid SSL version"),
        };
        let err = kind.validate(Value::Int(9)).unwrap_err();
        assert_eq!(err.message(), "\"9\" is not valid SSL version");
    }

    #[test]
    fn test_callback_kind_delegates() {
        fn double(raw: Value) -> Result<Value> {
            let n = raw
                .as_i64()
                .ok_or_else(|| OptionError::new("not a number"))?;
            Ok(Value::Int(n * 2))
        }
        let kind = OptionKind::Callback(double);
        assert_eq!(kind.validate(Value::Int(21)).unwrap(), Value::Int(42));
        assert!(kind.validate(Value::Map(vec![])).is_err());
    }
}
