//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use sjl_core::sensor::{SensorReading, DEVICE_IDS};
use sjl_core::springshed::SpringshedSample;

/// Years offered by the rainfall vs. discharge view.
pub const YEARS: [i32; 4] = [2020, 2021, 2022, 2023];

/// The four dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    RainfallDischarge,
    SpringshedAvailability,
    SensorData,
    DeviceStatistics,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::RainfallDischarge,
        Feature::SpringshedAvailability,
        Feature::SensorData,
        Feature::DeviceStatistics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::RainfallDischarge => "Rainfall vs Spring Discharge",
            Feature::SpringshedAvailability => "Springshed Availability",
            Feature::SensorData => "Sensor Data Visualization",
            Feature::DeviceStatistics => "Device Statistics",
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently shown view
    pub feature: Signal<Feature>,
    /// Whether a remote fetch is in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Informational message (e.g. nothing stored for a device)
    pub info_msg: Signal<Option<String>>,
    /// Year for the rainfall vs. discharge series
    pub selected_year: Signal<i32>,
    /// Administrative density table backing the state/district selectors
    pub springsheds: Signal<Vec<SpringshedSample>>,
    /// Selected state or union territory
    pub selected_state: Signal<String>,
    /// Selected district within the state
    pub selected_district: Signal<String>,
    /// Show every mountain range instead of the selection
    pub show_all_ranges: Signal<bool>,
    /// Device id for the sensor view
    pub selected_device: Signal<String>,
    /// Last fetched readings
    pub sensor_reading: Signal<Option<SensorReading>>,
    /// Bumped to force regeneration of random views
    pub render_nonce: Signal<u64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            feature: Signal::new(Feature::RainfallDischarge),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            info_msg: Signal::new(None),
            selected_year: Signal::new(YEARS[0]),
            springsheds: Signal::new(Vec::new()),
            selected_state: Signal::new(String::new()),
            selected_district: Signal::new(String::new()),
            show_all_ranges: Signal::new(false),
            selected_device: Signal::new(DEVICE_IDS[0].to_string()),
            sensor_reading: Signal::new(None),
            render_nonce: Signal::new(0),
        }
    }

    /// Clear messages left over from the previous view.
    pub fn clear_messages(&mut self) {
        self.error_msg.set(None);
        self.info_msg.set(None);
    }
}
