use serde_json::Value;

/// Decode a response body into a generic JSON value.
///
/// Anything that is not JSON decodes to [`Value::Null`]; callers treat a null
/// result as "no usable answer".
pub fn decode_json_response(action: &str, body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(action, error = %err, body_len = body.len(), "response is not JSON");
            Value::Null
        }
    }
}
