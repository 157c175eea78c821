//! Springshed density samples and the state/district views over them.

use rand::Rng;
use sjl_core::springshed::{
    BoundingBox, MountainRange, SpringshedSample, ADMINISTRATIVE_BOUNDS, DISTRICTS, INDIAN_STATES,
};

/// Samples drawn in administrative mode.
pub const ADMINISTRATIVE_SAMPLES: usize = 50;
/// Samples drawn per mountain range.
pub const SAMPLES_PER_RANGE: usize = 15;
/// Springshed counts are uniform in this inclusive range.
pub const MIN_SPRINGSHEDS: u32 = 1;
pub const MAX_SPRINGSHEDS: u32 = 10;

/// Which sampling mode [`generate_regional_density`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionFilter {
    /// Random states and districts inside [`ADMINISTRATIVE_BOUNDS`].
    Administrative,
    /// A fixed number of points inside each [`MountainRange`].
    MountainRanges,
}

/// Generate a fresh springshed density table.
pub fn generate_regional_density<R: Rng>(filter: RegionFilter, rng: &mut R) -> Vec<SpringshedSample> {
    let samples = match filter {
        RegionFilter::Administrative => administrative_samples(ADMINISTRATIVE_SAMPLES, rng),
        RegionFilter::MountainRanges => MountainRange::ALL
            .iter()
            .flat_map(|range| range_samples(*range, SAMPLES_PER_RANGE, rng))
            .collect(),
    };
    log::info!("Generated {} springshed samples ({:?})", samples.len(), filter);
    samples
}

fn uniform_in<R: Rng>(bounds: &BoundingBox, rng: &mut R) -> (f64, f64) {
    let latitude = rng.random_range(bounds.lat_min..=bounds.lat_max);
    let longitude = rng.random_range(bounds.lon_min..=bounds.lon_max);
    (latitude, longitude)
}

fn administrative_samples<R: Rng>(count: usize, rng: &mut R) -> Vec<SpringshedSample> {
    (0..count)
        .map(|_| {
            let state = INDIAN_STATES[rng.random_range(0..INDIAN_STATES.len())];
            let district = DISTRICTS[rng.random_range(0..DISTRICTS.len())];
            let (latitude, longitude) = uniform_in(&ADMINISTRATIVE_BOUNDS, rng);
            SpringshedSample {
                latitude,
                longitude,
                springshed_count: rng.random_range(MIN_SPRINGSHEDS..=MAX_SPRINGSHEDS),
                region: state.to_string(),
                district: Some(district.to_string()),
            }
        })
        .collect()
}

fn range_samples<R: Rng>(range: MountainRange, count: usize, rng: &mut R) -> Vec<SpringshedSample> {
    let bounds = range.bounds();
    (0..count)
        .map(|_| {
            let (latitude, longitude) = uniform_in(&bounds, rng);
            SpringshedSample {
                latitude,
                longitude,
                springshed_count: rng.random_range(MIN_SPRINGSHEDS..=MAX_SPRINGSHEDS),
                region: range.name().to_string(),
                district: None,
            }
        })
        .collect()
}

/// Distinct region labels in first-seen order.
pub fn states(samples: &[SpringshedSample]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for sample in samples {
        if !seen.contains(&sample.region) {
            seen.push(sample.region.clone());
        }
    }
    seen
}

/// Distinct districts present for `state`, in first-seen order.
pub fn districts(samples: &[SpringshedSample], state: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for district in samples
        .iter()
        .filter(|s| s.region == state)
        .filter_map(|s| s.district.as_ref())
    {
        if !seen.contains(district) {
            seen.push(district.clone());
        }
    }
    seen
}

/// Samples in `state`, optionally narrowed to one district.
pub fn filter_samples(samples: &[SpringshedSample], state: &str, district: Option<&str>) -> Vec<SpringshedSample> {
    samples
        .iter()
        .filter(|s| s.region == state)
        .filter(|s| district.is_none() || s.district.as_deref() == district)
        .cloned()
        .collect()
}

/// Mean latitude/longitude, used to centre the map.
pub fn centroid(samples: &[SpringshedSample]) -> Option<(f64, f64)> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    let lat = samples.iter().map(|s| s.latitude).sum::<f64>() / n;
    let lon = samples.iter().map(|s| s.longitude).sum::<f64>() / n;
    Some((lat, lon))
}

/// Smallest box covering the declared bounds of every sample; the
/// administrative box for an empty table.
pub fn view_bounds(samples: &[SpringshedSample]) -> BoundingBox {
    samples
        .iter()
        .map(|s| s.declared_bounds())
        .reduce(|a, b| BoundingBox {
            lat_min: a.lat_min.min(b.lat_min),
            lat_max: a.lat_max.max(b.lat_max),
            lon_min: a.lon_min.min(b.lon_min),
            lon_max: a.lon_max.max(b.lon_max),
        })
        .unwrap_or(ADMINISTRATIVE_BOUNDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample(region: &str, district: Option<&str>, lat: f64, lon: f64) -> SpringshedSample {
        SpringshedSample {
            latitude: lat,
            longitude: lon,
            springshed_count: 1,
            region: region.to_string(),
            district: district.map(str::to_string),
        }
    }

    #[test]
    fn test_administrative_samples_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let samples = generate_regional_density(RegionFilter::Administrative, &mut rng);
            assert_eq!(samples.len(), ADMINISTRATIVE_SAMPLES);
            for s in &samples {
                assert!(ADMINISTRATIVE_BOUNDS.contains(s.latitude, s.longitude));
                assert!((MIN_SPRINGSHEDS..=MAX_SPRINGSHEDS).contains(&s.springshed_count));
                assert!(INDIAN_STATES.contains(&s.region.as_str()));
                assert!(DISTRICTS.contains(&s.district.as_deref().unwrap()));
            }
        }
    }

    #[test]
    fn test_mountain_samples_stay_in_their_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples = generate_regional_density(RegionFilter::MountainRanges, &mut rng);
        assert_eq!(samples.len(), SAMPLES_PER_RANGE * MountainRange::ALL.len());
        for range in MountainRange::ALL {
            let in_range: Vec<_> = samples.iter().filter(|s| s.region == range.name()).collect();
            assert_eq!(in_range.len(), SAMPLES_PER_RANGE);
            for s in in_range {
                assert!(range.bounds().contains(s.latitude, s.longitude));
                assert!(s.springshed_count >= MIN_SPRINGSHEDS);
                assert!(s.district.is_none());
            }
        }
    }

    #[test]
    fn test_seeded_density_is_reproducible() {
        let a = generate_regional_density(RegionFilter::Administrative, &mut StdRng::seed_from_u64(9));
        let b = generate_regional_density(RegionFilter::Administrative, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_states_and_districts_keep_first_seen_order() {
        let samples = vec![
            sample("Goa", Some("DistrictB"), 21.0, 71.0),
            sample("Assam", Some("DistrictA"), 22.0, 72.0),
            sample("Goa", Some("DistrictA"), 23.0, 73.0),
            sample("Goa", Some("DistrictB"), 24.0, 74.0),
        ];
        assert_eq!(states(&samples), vec!["Goa", "Assam"]);
        assert_eq!(districts(&samples, "Goa"), vec!["DistrictB", "DistrictA"]);
        assert!(districts(&samples, "Kerala").is_empty());
    }

    #[test]
    fn test_filter_samples() {
        let samples = vec![
            sample("Goa", Some("DistrictB"), 21.0, 71.0),
            sample("Assam", Some("DistrictB"), 22.0, 72.0),
            sample("Goa", Some("DistrictA"), 23.0, 73.0),
        ];
        let goa_b = filter_samples(&samples, "Goa", Some("DistrictB"));
        assert_eq!(goa_b.len(), 1);
        assert_eq!(goa_b[0].latitude, 21.0);
        assert_eq!(filter_samples(&samples, "Goa", None).len(), 2);
        assert!(filter_samples(&samples, "Goa", Some("DistrictC")).is_empty());
    }

    #[test]
    fn test_centroid() {
        assert_eq!(centroid(&[]), None);
        let samples = vec![
            sample("Goa", None, 20.0, 70.0),
            sample("Goa", None, 30.0, 80.0),
        ];
        assert_eq!(centroid(&samples), Some((25.0, 75.0)));
    }

    #[test]
    fn test_view_bounds() {
        assert_eq!(view_bounds(&[]), ADMINISTRATIVE_BOUNDS);
        let samples = vec![
            sample("Himalayas", None, 31.0, 78.0),
            sample("Western Ghats", None, 12.0, 76.5),
        ];
        let bounds = view_bounds(&samples);
        assert_eq!(bounds.lat_min, 10.0);
        assert_eq!(bounds.lat_max, 35.0);
        assert_eq!(bounds.lon_min, 76.0);
        assert_eq!(bounds.lon_max, 80.0);
    }
}
