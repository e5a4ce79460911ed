pub mod coerce;

use serde_json::{Map, Value};

/// Read a request body as a JSON object. Empty bodies, malformed JSON and
/// non-object payloads all yield an empty object.
pub fn parse_body(body: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) | Err(_) => {
            if !body.is_empty() {
                tracing::debug!("Ignoring non-object request body ({} bytes)", body.len());
            }
            Value::Object(Map::new())
        }
    }
}
