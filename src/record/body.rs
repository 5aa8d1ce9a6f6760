//! Parsing of JSON request bodies and path parameters for the record API.
//!
//! Bodies are parsed by hand instead of with the `Json` extractor so that
//! every failure becomes one of the crate's error kinds.

use serde_json::Value;

use crate::{
    Error,
    record::{NewRecord, RecordId, RecordPatch},
};

/// Parse the body of a request to create a record.
///
/// # Errors
/// Returns [Error::Validation] if the body is not a JSON object with every
/// record field, if a field has the wrong type or if a field is empty.
pub fn parse_new_record(body: &[u8]) -> Result<NewRecord, Error> {
    serde_json::from_slice::<NewRecord>(body)
        .map_err(|error| Error::Validation(error.to_string()))?
        .validate()
}

/// Parse the body of a request to update a record.
///
/// # Errors
/// Returns [Error::EmptyUpdateBody] if the body is absent, `null` or `{}`.
/// Returns [Error::MalformedBody] if the body is not a JSON object or one of
/// the record fields has the wrong type.
pub fn parse_record_patch(body: &[u8]) -> Result<RecordPatch, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::EmptyUpdateBody);
    }

    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => return Err(Error::EmptyUpdateBody),
        Ok(Value::Object(fields)) if fields.is_empty() => return Err(Error::EmptyUpdateBody),
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            return Err(Error::MalformedBody(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            )));
        }
        Err(error) => return Err(Error::MalformedBody(error.to_string())),
    };

    serde_json::from_value::<RecordPatch>(Value::Object(fields))
        .map_err(|error| Error::MalformedBody(error.to_string()))?
        .validate()
}

/// Parse a record ID from a path parameter.
///
/// # Errors
/// Returns [Error::RecordNotFound] if `text` is not an integer, since no
/// record can have such an ID.
pub fn parse_record_id(text: &str) -> Result<RecordId, Error> {
    text.parse().map_err(|_| Error::RecordNotFound)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
