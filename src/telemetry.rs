use log::{debug, warn};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::TelemetryRecord;

pub fn flatten_telemetry(json: &str) -> Result<Vec<TelemetryRecord>> {
    flatten_value(serde_json::from_str(json)?)
}

/// Flattens `{ serial: { datetime: frame } }` into one record per frame,
/// ordered by time then serial. Frames whose timestamp is not RFC 3339
/// are skipped.
pub fn flatten_value(value: Value) -> Result<Vec<TelemetryRecord>> {
    let Value::Object(payloads) = value else {
        return Err(Error::InvalidTelemetry(
            "top level must be an object keyed by serial".to_string(),
        ));
    };

    let mut records = Vec::new();
    for (serial, frames) in payloads {
        let Value::Object(frames) = frames else {
            warn!("skipping payload {}: frames are not an object", serial);
            continue;
        };
        for (datetime, frame) in frames {
            match frame_to_record(&serial, &datetime, frame) {
                Ok(record) => records.push(record),
                Err(e) => warn!("skipping frame {} {}: {}", serial, datetime, e),
            }
        }
    }

    records.sort_by(|a, b| {
        a.datetime
            .cmp(&b.datetime)
            .then_with(|| a.serial.cmp(&b.serial))
    });
    debug!("flattened {} telemetry records", records.len());
    Ok(records)
}

fn frame_to_record(serial: &str, datetime: &str, frame: Value) -> Result<TelemetryRecord> {
    let mut fields: Map<String, Value> = match frame {
        Value::Object(fields) => fields,
        other => {
            return Err(Error::InvalidTelemetry(format!(
                "frame is not an object: {}",
                other
            )))
        }
    };
    // outer keys fill in fields the frame leaves out or nulls
    for (key, fallback) in [("serial", serial), ("datetime", datetime)] {
        let slot = fields.entry(key).or_insert(Value::Null);
        if slot.is_null() {
            *slot = Value::String(fallback.to_string());
        }
    }
    Ok(serde_json::from_value(Value::Object(fields))?)
}
