//! Field-level checks shared by the request shapes.
//!
//! Bodies are deserialized into `Option<serde_json::Value>` fields first so that
//! presence, JSON type and emptiness can each be reported with their own
//! message before a typed request reaches the services.

use serde_json::Value;

/// Minimum length, in characters, for handles and passwords.
pub const MIN_CREDENTIAL_LEN: usize = 6;

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn present(value: &Option<Value>) -> bool {
    value.as_ref().is_some_and(is_truthy)
}

/// Takes the string out of a field, `None` when absent or not a JSON string.
pub fn into_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
