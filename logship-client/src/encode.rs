//! Newline-delimited JSON encoding for log batches

use serde::Serialize;

use crate::error::{ClientError, Result};

/// Encode a batch of records as newline-delimited JSON
///
/// Each record becomes one compact JSON object; lines appear in input order.
/// A record that fails the structural check or fails to encode aborts the
/// whole batch; nothing is returned for the records that came before it.
pub(crate) fn to_ndjson<T: Serialize>(records: &[T]) -> Result<String> {
    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        lines.push(encode_record(record)?);
    }
    Ok(lines.join("\n"))
}

/// Encode a single record, enforcing that it is a structured object
///
/// Serde guarantees a key for every field of a derived struct at compile
/// time, so the remaining failure mode is a value with no field keys at all:
/// a primitive, a sequence, or anything else that does not encode to a JSON
/// object.
fn encode_record<T: Serialize>(record: &T) -> Result<String> {
    let value =
        serde_json::to_value(record).map_err(|err| ClientError::ParsingLogs(err.to_string()))?;
    if !value.is_object() {
        return Err(ClientError::ParsingLogs(
            "object is missing json metadata".to_string(),
        ));
    }
    serde_json::to_string(&value).map_err(|err| ClientError::ParsingLogs(err.to_string()))
}
