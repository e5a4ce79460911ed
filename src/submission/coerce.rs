use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::models::{FormFields, NewSubmission};

/// A value that cannot be cast to the type its field declares.
#[derive(Debug, Clone, PartialEq)]
pub struct CastError {
    pub path: String,
    pub kind: &'static str,
    pub value: String,
}

impl CastError {
    fn new(kind: &'static str, path: &str, value: &Value) -> Self {
        Self {
            path: path.to_string(),
            kind,
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cast to {} failed for value {} at path \"{}\"",
            self.kind, self.value, self.path
        )
    }
}

impl std::error::Error for CastError {}

/// Cast a raw JSON payload to a submission. Unknown keys are ignored and
/// `null` is treated as absent. Non-object payloads cast to an empty submission.
pub fn cast(raw: &Value) -> Result<NewSubmission, CastError> {
    let Some(obj) = raw.as_object() else {
        return Ok(NewSubmission::default());
    };

    let fields = FormFields {
        preset: cast_string(obj, "preset")?,
        language: cast_string(obj, "language")?,
        first_name: cast_string(obj, "firstName")?,
        last_name: cast_string(obj, "lastName")?,
        gender: cast_string(obj, "gender")?,
        phone_number: cast_string(obj, "phoneNumber")?,
        email: cast_string(obj, "email")?,
        company: cast_string(obj, "company")?,
        agree_to_terms: cast_bool(obj, "agreeToTerms")?,
        tab: cast_string(obj, "tab")?,
    };

    Ok(NewSubmission {
        fields,
        created_at: cast_date(obj, "createdAt")?,
    })
}

fn cast_string(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, CastError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(CastError::new("String", key, other)),
    }
}

fn cast_bool(obj: &Map<String, Value>, key: &str) -> Result<Option<bool>, CastError> {
    let value = match obj.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };

    let cast = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 1.0 => Some(true),
            Some(v) if v == 0.0 => Some(false),
            _ => None,
        },
        _ => None,
    };

    cast.map(Some)
        .ok_or_else(|| CastError::new("Boolean", key, value))
}

fn cast_date(obj: &Map<String, Value>, key: &str) -> Result<Option<DateTime<Utc>>, CastError> {
    let value = match obj.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };

    let cast = match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc())
            }),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };

    cast.map(Some).ok_or_else(|| CastError::new("Date", key, value))
}
