use crate::error::{Result, SpringshedError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Device ids offered in the sensor selector.
pub const DEVICE_IDS: [&str; 1] = ["spr8561714"];

/// The latest readings stored for one IoT device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub device_id: String,
    /// Field name to raw value, as stored remotely.
    pub fields: BTreeMap<String, Value>,
}

impl SensorReading {
    /// Parse a real-time database response body.
    ///
    /// `null` and `{}` both mean nothing is stored for the device. A bare
    /// scalar is kept under a single `value` field.
    pub fn from_json(device_id: &str, body: &str) -> Result<Option<SensorReading>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| SpringshedError::Remote(format!("unparseable body for {}: {}", device_id, e)))?;
        let fields: BTreeMap<String, Value> = match value {
            Value::Null => return Ok(None),
            Value::Object(map) => map.into_iter().collect(),
            other => BTreeMap::from([("value".to_string(), other)]),
        };
        if fields.is_empty() {
            return Ok(None);
        }
        Ok(Some(SensorReading {
            device_id: device_id.to_string(),
            fields,
        }))
    }

    /// Fields that hold a number (or a string that parses as one), in
    /// field-name order.
    pub fn numeric_fields(&self) -> Vec<(String, f64)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| {
                let number = match value {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse::<f64>().ok(),
                    _ => None,
                };
                number.map(|n| (name.clone(), n))
            })
            .collect()
    }

    /// Field values rendered as display strings, for the readings table.
    pub fn display_rows(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(name, value)| {
                let shown = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), shown)
            })
            .collect()
    }
}
