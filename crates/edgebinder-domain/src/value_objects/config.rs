//! Untyped configuration tree helpers
//!
//! Host configuration arrives as a `serde_json::Value` tree. It is narrowed to
//! [`ConfigMap`] by the configuration resolver and never travels further in
//! untyped form.

use serde_json::{Map, Value};

/// A configuration mapping from string keys to untyped values
pub type ConfigMap = Map<String, Value>;

/// Debug type name of a configuration value, as shown in error messages
///
/// Maps and lists both report `array`, matching how configuration files
/// describe them.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "array",
    }
}
