//! Random IoT coverage statistics.

use crate::sampling::clamp_sample_size;
use rand::seq::index;
use rand::Rng;
use sjl_core::device_stats::{max_springs_without_iot, DeviceStatSample};
use sjl_core::SpringshedError;
use std::collections::BTreeSet;

/// Devices and springs shown on the statistics view.
pub const DEFAULT_NUM_DEVICES: u32 = 50;
pub const DEFAULT_NUM_SPRINGS: u32 = 100;

/// Draw `amount` distinct ids from `1..=upper`.
fn sample_ids<R: Rng>(upper: u32, amount: u32, rng: &mut R) -> BTreeSet<u32> {
    let amount = clamp_sample_size(amount as usize, upper as usize, "ids");
    index::sample(rng, upper as usize, amount)
        .into_iter()
        .map(|i| i as u32 + 1)
        .collect()
}

/// Random size in `1..=upper`, or zero when there is nothing to draw from.
fn sample_size<R: Rng>(upper: u32, what: &str, rng: &mut R) -> u32 {
    if upper == 0 {
        log::warn!(
            "{}",
            SpringshedError::DegenerateInputRange(format!("no {} to sample from", what))
        );
        return 0;
    }
    rng.random_range(1..=upper)
}

/// Generate active device ids and springs without a device.
///
/// At most [`max_springs_without_iot`] springs lack a device. Zero devices or
/// zero springs give an empty set on that side.
pub fn generate_device_stats<R: Rng>(num_devices: u32, num_springs: u32, rng: &mut R) -> DeviceStatSample {
    let active_count = sample_size(num_devices, "devices", rng);
    let active_device_ids = sample_ids(num_devices, active_count, rng);

    if (1..4).contains(&num_springs) {
        log::warn!(
            "30% of {} springs rounds to zero; allowing one spring without IoT",
            num_springs
        );
    }
    let without_count = sample_size(max_springs_without_iot(num_springs), "springs", rng);
    let springs_without_iot_ids = sample_ids(num_springs, without_count, rng);

    log::info!(
        "Device stats: {} active of {}, {} springs without IoT of {}",
        active_device_ids.len(),
        num_devices,
        springs_without_iot_ids.len(),
        num_springs
    );
    DeviceStatSample {
        active_device_ids,
        springs_without_iot_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_view_sizes() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let stats = generate_device_stats(DEFAULT_NUM_DEVICES, DEFAULT_NUM_SPRINGS, &mut rng);
            assert!((1..=50).contains(&stats.active_device_ids.len()));
            assert!((1..=30).contains(&stats.springs_without_iot_ids.len()));
            assert!(stats.active_device_ids.iter().all(|id| (1..=50).contains(id)));
            assert!(stats.springs_without_iot_ids.iter().all(|id| (1..=100).contains(id)));
        }
    }

    #[test]
    fn test_thirty_percent_rule_holds() {
        let mut rng = StdRng::seed_from_u64(5);
        for num_springs in 10..=200 {
            let stats = generate_device_stats(5, num_springs, &mut rng);
            let n = stats.springs_without_iot_ids.len() as u32;
            assert!(n >= 1);
            assert!(n <= num_springs * 3 / 10, "{} of {}", n, num_springs);
        }
    }

    #[test]
    fn test_small_spring_counts_allow_one() {
        let mut rng = StdRng::seed_from_u64(11);
        for num_springs in 1..4 {
            let stats = generate_device_stats(3, num_springs, &mut rng);
            assert_eq!(stats.springs_without_iot_ids.len(), 1);
        }
    }

    #[test]
    fn test_zero_inputs_give_empty_sets() {
        let mut rng = StdRng::seed_from_u64(0);
        let stats = generate_device_stats(0, 0, &mut rng);
        assert!(stats.active_device_ids.is_empty());
        assert!(stats.springs_without_iot_ids.is_empty());
    }

    #[test]
    fn test_sizes_vary_across_draws() {
        let mut rng = StdRng::seed_from_u64(99);
        let sizes: BTreeSet<usize> = (0..50)
            .map(|_| generate_device_stats(50, 100, &mut rng).active_device_ids.len())
            .collect();
        assert!(sizes.len() > 5);
    }
}
