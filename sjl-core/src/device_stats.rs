use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Pie slice label for devices currently reporting.
pub const ACTIVE_CATEGORY: &str = "Active Springsheds with IoT Devices";
/// Pie slice label for springs with no device installed.
pub const WITHOUT_IOT_CATEGORY: &str = "Springs without IoT Devices";

/// Upper bound on how many springs may lack a device.
///
/// The business rule is "less than 30% of springs", i.e. `floor(0.3 * n)`.
/// Below four springs that floor is zero, so the bound is widened to one
/// (still capped at `n`).
pub fn max_springs_without_iot(num_springs: u32) -> u32 {
    let thirty_percent = (u64::from(num_springs) * 3 / 10) as u32;
    thirty_percent.max(1).min(num_springs)
}

/// IoT coverage snapshot: which devices are active and which springs have
/// no device.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatSample {
    pub active_device_ids: BTreeSet<u32>,
    pub springs_without_iot_ids: BTreeSet<u32>,
}

impl DeviceStatSample {
    /// The two pie-chart slices with their counts.
    pub fn categories(&self) -> [(&'static str, usize); 2] {
        [
            (ACTIVE_CATEGORY, self.active_device_ids.len()),
            (WITHOUT_IOT_CATEGORY, self.springs_without_iot_ids.len()),
        ]
    }
}
