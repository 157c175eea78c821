//! Synthetic table subcommands: series, density and device statistics.

use crate::output::write_csv;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use sjl_core::device_stats::DeviceStatSample;
use sjl_core::springshed::SpringshedSample;
use sjl_data::density::{self, RegionFilter};
use sjl_data::devices::generate_device_stats;
use sjl_data::series::generate_year_series;

/// One pie slice of the device statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub count: usize,
}

/// Seeded generator, or one seeded from the clock when no seed is given.
fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);
    info!("Using seed {}", seed);
    StdRng::seed_from_u64(seed)
}

/// Write the daily rainfall/discharge series for `year`.
pub fn run_series(year: i32, output: Option<&str>) -> anyhow::Result<()> {
    let records = generate_year_series(year)?;
    write_csv(&records, output)
}

/// Generate a density table, then narrow it to a state and district.
pub fn density_table(
    mountains: bool,
    state: Option<&str>,
    district: Option<&str>,
    rng: &mut StdRng,
) -> Vec<SpringshedSample> {
    let filter = if mountains {
        RegionFilter::MountainRanges
    } else {
        RegionFilter::Administrative
    };
    let samples = density::generate_regional_density(filter, rng);
    match state {
        Some(state) => {
            let kept = density::filter_samples(&samples, state, district);
            if kept.is_empty() {
                warn!(
                    "No samples for {}{}; this draw covered: {}",
                    state,
                    district.map(|d| format!(" / {}", d)).unwrap_or_default(),
                    density::states(&samples).join(", ")
                );
            }
            kept
        }
        None => samples,
    }
}

pub fn run_density(
    mountains: bool,
    state: Option<&str>,
    district: Option<&str>,
    seed: Option<u64>,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let samples = density_table(mountains, state, district, &mut rng);
    if let Some((lat, lon)) = density::centroid(&samples) {
        info!("Centroid of {} samples: ({:.3}, {:.3})", samples.len(), lat, lon);
    }
    write_csv(&samples, output)
}

/// Slice counts for the device statistics pie.
pub fn category_counts(stats: &DeviceStatSample) -> Vec<CategoryCount> {
    stats
        .categories()
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

pub fn run_device_stats(
    devices: u32,
    springs: u32,
    seed: Option<u64>,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let stats = generate_device_stats(devices, springs, &mut rng);
    info!("Active device ids: {:?}", stats.active_device_ids);
    info!("Springs without IoT: {:?}", stats.springs_without_iot_ids);
    write_csv(&category_counts(&stats), output)
}
