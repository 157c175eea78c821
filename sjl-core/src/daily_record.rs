use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the rainfall vs. spring discharge series.
///
/// Serialized with camelCase keys (`date`, `rainfall`, `springDischarge`,
/// `heavyRain`), which are also the CSV headers and the keys the combo chart
/// reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Rainfall in millimetres, never negative.
    pub rainfall: f64,
    /// Spring discharge in flow units, never negative.
    pub spring_discharge: f64,
    /// True for the injected heavy-rain days.
    pub heavy_rain: bool,
}

impl DailyRecord {
    /// Build a record, clamping negative measurements to zero.
    pub fn clamped(date: NaiveDate, rainfall: f64, spring_discharge: f64, heavy_rain: bool) -> Self {
        DailyRecord {
            date,
            rainfall: rainfall.max(0.0),
            spring_discharge: spring_discharge.max(0.0),
            heavy_rain,
        }
    }
}
