//! JSON payloads for the D3.js chart bridge.
//!
//! Each chart takes a data array and a config object. Keys are camelCase to
//! match the chart scripts.

use crate::density::{centroid, view_bounds};
use serde_json::{json, Value};
use sjl_core::daily_record::DailyRecord;
use sjl_core::device_stats::DeviceStatSample;
use sjl_core::sensor::SensorReading;
use sjl_core::springshed::SpringshedSample;
use sjl_utils::dates::format_date;

/// Map title when every mountain range is shown.
pub const MOUNTAIN_RANGES_TITLE: &str = "Springsheds Availability in Indian Mountain Ranges";

/// Rainfall bars plus discharge line, one point per day.
pub fn combo_series(records: &[DailyRecord]) -> Value {
    records
        .iter()
        .map(|r| {
            json!({
                "date": format_date(&r.date),
                "rainfall": r.rainfall,
                "springDischarge": r.spring_discharge,
                "heavyRain": r.heavy_rain,
            })
        })
        .collect()
}

pub fn combo_config(year: i32) -> Value {
    json!({
        "title": format!("Rainfall and Spring Discharge in {}", year),
        "xAxisLabel": "Date",
        "yAxisLabel": "Measurement",
        "legendTitle": "Parameter",
        "barLabel": "Rainfall",
        "lineLabel": "Spring Discharge",
        "barColor": "#2196F3",
        "heavyBarColor": "#0D47A1",
        "lineColor": "#E65100",
    })
}

/// Scatter points sized by springshed count.
///
/// Hover labels show the range name when ranges are shown and the count
/// otherwise.
pub fn geo_points(samples: &[SpringshedSample], label_by_region: bool) -> Value {
    samples
        .iter()
        .map(|s| {
            let label = if label_by_region {
                s.region.clone()
            } else {
                s.springshed_count.to_string()
            };
            json!({
                "lat": s.latitude,
                "lon": s.longitude,
                "size": s.springshed_count,
                "label": label,
            })
        })
        .collect()
}

/// Title for a state/district selection.
pub fn selection_title(state: &str, district: &str) -> String {
    format!("Springsheds Availability in {}, {}", district, state)
}

/// Map config. `fitBounds` is the GeoJSON the projection is fitted to: the
/// two corners of the view box as a MultiPoint, which has no winding order.
pub fn geo_config(title: &str, samples: &[SpringshedSample]) -> Value {
    let bounds = view_bounds(samples);
    let center = centroid(samples).map(|(lat, lon)| json!({ "lat": lat, "lon": lon }));
    json!({
        "title": title,
        "center": center,
        "latRange": [bounds.lat_min, bounds.lat_max],
        "lonRange": [bounds.lon_min, bounds.lon_max],
        "fitBounds": {
            "type": "MultiPoint",
            "coordinates": [
                [bounds.lon_min, bounds.lat_min],
                [bounds.lon_max, bounds.lat_max],
            ],
        },
        "color": "#2E7D32",
    })
}

/// Horizontal bars for the numeric fields of a reading.
pub fn sensor_bars(reading: &SensorReading) -> Value {
    reading
        .numeric_fields()
        .into_iter()
        .map(|(sensor, value)| json!({ "sensor": sensor, "value": value }))
        .collect()
}

pub fn sensor_config(device_id: &str) -> Value {
    json!({
        "title": format!("Sensor Data for {}", device_id),
        "xAxisLabel": "Measurement",
        "yAxisLabel": "Sensor",
        "color": "#6A1B9A",
    })
}

pub fn pie_slices(stats: &DeviceStatSample) -> Value {
    stats
        .categories()
        .iter()
        .map(|(category, count)| json!({ "category": category, "count": count }))
        .collect()
}

pub fn pie_config() -> Value {
    json!({
        "title": "Device Statistics",
        "colors": ["#43A047", "#E53935"],
    })
}
