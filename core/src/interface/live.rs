use crate::prelude::{TelemetryError, TelemetryResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One reading pushed by the on-site sensor board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveReading {
    pub temperature: f64,
    pub gas: i64,
    pub light: i64,
    pub motion: i64,
    pub time: String,
}

impl LiveReading {
    /// Missing or unreadable fields fall back to zero (empty for `time`).
    fn from_entry(entry: &Map<String, Value>) -> Self {
        Self {
            temperature: number_field(entry, "temperature").unwrap_or(0.0),
            gas: integer_field(entry, "gas"),
            light: integer_field(entry, "light"),
            motion: integer_field(entry, "motion"),
            time: entry
                .get("time")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

fn number_field(entry: &Map<String, Value>, key: &str) -> Option<f64> {
    match entry.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn integer_field(entry: &Map<String, Value>, key: &str) -> i64 {
    match entry.get(key) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(Value::Bool(b)) => Some(i64::from(*b)),
        _ => None,
    }
    .unwrap_or(0)
}

/// Entries in payload order. The store answers with either an object keyed
/// by push id or a plain array.
fn entries(payload: &Value) -> TelemetryResult<Vec<&Value>> {
    let entries: Vec<&Value> = match payload {
        Value::Null => return Err(TelemetryError::NoData),
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        other => {
            return Err(TelemetryError::Malformed(format!(
                "expected object or array, found {}",
                json_kind(other)
            )))
        }
    };
    if entries.is_empty() {
        return Err(TelemetryError::NoData);
    }
    Ok(entries)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses every reading, skipping entries that are not objects.
pub fn parse_readings(body: &str) -> TelemetryResult<Vec<LiveReading>> {
    let payload: Value = serde_json::from_str(body)?;
    Ok(entries(&payload)?
        .into_iter()
        .filter_map(Value::as_object)
        .map(LiveReading::from_entry)
        .collect())
}

/// Returns the most recently pushed reading.
pub fn latest_reading(body: &str) -> TelemetryResult<LiveReading> {
    let payload: Value = serde_json::from_str(body)?;
    entries(&payload)?
        .into_iter()
        .rev()
        .find_map(Value::as_object)
        .map(LiveReading::from_entry)
        .ok_or_else(|| TelemetryError::Malformed("no reading objects in payload".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_payload_keeps_push_order_and_skips_scalars() {
        let body = r#"{
            "-Nb2": {"temperature": 24.5, "gas": 310, "light": 1, "motion": 0, "time": "10:00"},
            "-Na1": "garbage",
            "-Nc3": {"temperature": "25.1", "gas": 298.7, "time": "10:05"}
        }"#;
        let readings = parse_readings(body).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].temperature, 24.5);
        assert_eq!(readings[0].gas, 310);
        assert_eq!(readings[1].temperature, 25.1);
        assert_eq!(readings[1].gas, 298);
        assert_eq!(readings[1].light, 0);
        assert_eq!(readings[1].motion, 0);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let readings = parse_readings(r#"[{"time": "09:00"}, {}]"#).unwrap();
        assert_eq!(readings[0].time, "09:00");
        assert_eq!(readings[0].temperature, 0.0);
        assert_eq!(readings[1], LiveReading::default());
    }

    #[test]
    fn latest_is_last_entry() {
        let body = r#"[{"temperature": 20.0}, {"temperature": 21.5, "motion": 1}]"#;
        let latest = latest_reading(body).unwrap();
        assert_eq!(latest.temperature, 21.5);
        assert_eq!(latest.motion, 1);
    }

    #[test]
    fn empty_and_malformed_payloads_are_errors() {
        assert!(matches!(parse_readings("null"), Err(TelemetryError::NoData)));
        assert!(matches!(parse_readings("{}"), Err(TelemetryError::NoData)));
        assert!(matches!(latest_reading("[]"), Err(TelemetryError::NoData)));
        assert!(matches!(parse_readings("42"), Err(TelemetryError::Malformed(_))));
        assert!(matches!(latest_reading("[1, 2]"), Err(TelemetryError::Malformed(_))));
        assert!(matches!(parse_readings("{not json"), Err(TelemetryError::Json(_))));
    }
}
