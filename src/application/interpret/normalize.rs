use serde_json::Value;

/// Coerce a variable-shape field into an ordered list of messages.
///
/// Absent and `null` contribute nothing, arrays contribute each non-null
/// element in order, and anything else contributes a single message.
pub fn coerce_messages(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(display_value)
            .collect(),
        Some(scalar) => vec![display_value(scalar)],
    }
}

/// Strings verbatim, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Loose truthiness: null, false, zero and empty containers are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}
