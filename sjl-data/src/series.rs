//! Daily rainfall vs. spring discharge for one calendar year.

use crate::sampling::clamp_sample_size;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use sjl_core::daily_record::DailyRecord;
use sjl_core::date_range::DateRange;
use sjl_core::{Result, SpringshedError};

/// Daily rainfall ~ Normal(5, 2) mm.
pub const RAINFALL_MEAN: f64 = 5.0;
pub const RAINFALL_STD_DEV: f64 = 2.0;

/// Number of heavy-rain days injected per year.
pub const HEAVY_RAIN_DAYS: usize = 20;
/// Heavy-rain days have their rainfall scaled by a factor in this range.
pub const HEAVY_RAIN_FACTOR_MIN: f64 = 2.0;
pub const HEAVY_RAIN_FACTOR_MAX: f64 = 5.0;

/// Rainfall-to-discharge multiplier, drawn once per year.
pub const DISCHARGE_MULTIPLIER_MIN: f64 = 1.5;
pub const DISCHARGE_MULTIPLIER_MAX: f64 = 2.5;

/// Base flow noise ~ Normal(50, 15) added to each day's discharge.
pub const DISCHARGE_NOISE_MEAN: f64 = 50.0;
pub const DISCHARGE_NOISE_STD_DEV: f64 = 15.0;

/// A heavy-rain day picked by [`amplify_heavy_days`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeavyRainDay {
    /// Position in the series.
    pub index: usize,
    /// Factor the day's rainfall was multiplied by.
    pub factor: f64,
}

/// The PRNG for a year's series. Each year gets its own stream.
pub fn year_rng(year: i32) -> StdRng {
    StdRng::seed_from_u64(year as i64 as u64)
}

fn normal<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + std_dev * z
}

/// Generate the rainfall and spring discharge series for `year`.
///
/// One record per calendar day, Jan 1 through Dec 31, ascending. The output
/// depends only on `year`.
///
/// ```
/// let series = sjl_data::series::generate_year_series(2020).unwrap();
/// assert_eq!(series.len(), 366);
/// assert_eq!(series, sjl_data::series::generate_year_series(2020).unwrap());
/// ```
pub fn generate_year_series(year: i32) -> Result<Vec<DailyRecord>> {
    let dates: Vec<NaiveDate> = DateRange::calendar_year(year)
        .ok_or(SpringshedError::InvalidYear(year))?
        .collect();
    let mut rng = year_rng(year);
    let records = series_for_dates(&dates, &mut rng);
    log::info!(
        "Generated {} daily records for {} ({} heavy rain days)",
        records.len(),
        year,
        records.iter().filter(|r| r.heavy_rain).count()
    );
    Ok(records)
}

/// Generate one record per date from `rng`.
///
/// Draw order: all base rainfall values, the heavy-rain days and their
/// factors, the yearly discharge multiplier, then per-day discharge noise.
pub fn series_for_dates<R: Rng>(dates: &[NaiveDate], rng: &mut R) -> Vec<DailyRecord> {
    let mut rainfall: Vec<f64> = dates
        .iter()
        .map(|_| normal(rng, RAINFALL_MEAN, RAINFALL_STD_DEV).max(0.0))
        .collect();

    let heavy_days = amplify_heavy_days(&mut rainfall, HEAVY_RAIN_DAYS, rng);
    let mut is_heavy = vec![false; dates.len()];
    for day in &heavy_days {
        is_heavy[day.index] = true;
    }

    let multiplier = rng.random_range(DISCHARGE_MULTIPLIER_MIN..=DISCHARGE_MULTIPLIER_MAX);

    dates
        .iter()
        .zip(rainfall)
        .zip(is_heavy)
        .map(|((date, rain), heavy)| {
            let noise = normal(rng, DISCHARGE_NOISE_MEAN, DISCHARGE_NOISE_STD_DEV);
            DailyRecord::clamped(*date, rain, rain * multiplier + noise, heavy)
        })
        .collect()
}

/// Pick up to `requested` distinct days and scale their rainfall by a
/// uniform factor in [2, 5].
///
/// Fewer days than requested are picked when the series is shorter.
pub fn amplify_heavy_days<R: Rng>(rainfall: &mut [f64], requested: usize, rng: &mut R) -> Vec<HeavyRainDay> {
    let count = clamp_sample_size(requested, rainfall.len(), "heavy rain days");
    let picked = index::sample(rng, rainfall.len(), count);
    picked
        .into_iter()
        .map(|index| {
            let factor = rng.random_range(HEAVY_RAIN_FACTOR_MIN..=HEAVY_RAIN_FACTOR_MAX);
            rainfall[index] *= factor;
            HeavyRainDay { index, factor }
        })
        .collect()
}
