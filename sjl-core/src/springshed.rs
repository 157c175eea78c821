use serde::{Deserialize, Serialize};

/// List of Indian states and union territories used for the
/// administrative density table.
pub const INDIAN_STATES: [&str; 35] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli",
    "Daman and Diu",
    "Delhi",
    "Lakshadweep",
    "Puducherry",
];

/// Placeholder district labels attached to administrative samples.
pub const DISTRICTS: [&str; 3] = ["DistrictA", "DistrictB", "DistrictC"];

/// Bounding box for administrative samples.
pub const ADMINISTRATIVE_BOUNDS: BoundingBox = BoundingBox {
    lat_min: 20.0,
    lat_max: 30.0,
    lon_min: 70.0,
    lon_max: 80.0,
};

/// An inclusive latitude/longitude rectangle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lon_min..=self.lon_max).contains(&longitude)
    }
}

/// Indian mountain ranges with approximate coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountainRange {
    Himalayas,
    WesternGhats,
    EasternGhats,
}

impl MountainRange {
    pub const ALL: [MountainRange; 3] = [
        MountainRange::Himalayas,
        MountainRange::WesternGhats,
        MountainRange::EasternGhats,
    ];

    /// Display name, also used as the sample's region label.
    pub fn name(&self) -> &'static str {
        match self {
            MountainRange::Himalayas => "Himalayas",
            MountainRange::WesternGhats => "Western Ghats",
            MountainRange::EasternGhats => "Eastern Ghats",
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        match self {
            MountainRange::Himalayas => BoundingBox {
                lat_min: 30.0,
                lat_max: 35.0,
                lon_min: 77.0,
                lon_max: 80.0,
            },
            MountainRange::WesternGhats => BoundingBox {
                lat_min: 10.0,
                lat_max: 15.0,
                lon_min: 76.0,
                lon_max: 77.0,
            },
            MountainRange::EasternGhats => BoundingBox {
                lat_min: 13.0,
                lat_max: 20.0,
                lon_min: 80.0,
                lon_max: 83.0,
            },
        }
    }

    pub fn from_name(name: &str) -> Option<MountainRange> {
        MountainRange::ALL.into_iter().find(|r| r.name() == name)
    }
}

/// A sampled springshed location.
///
/// `region` is a state/UT name for administrative samples and a mountain
/// range name for range samples; only administrative samples carry a
/// district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringshedSample {
    pub latitude: f64,
    pub longitude: f64,
    pub springshed_count: u32,
    pub region: String,
    pub district: Option<String>,
}

impl SpringshedSample {
    /// The box this sample must fall in, derived from its region label.
    pub fn declared_bounds(&self) -> BoundingBox {
        MountainRange::from_name(&self.region)
            .map(|range| range.bounds())
            .unwrap_or(ADMINISTRATIVE_BOUNDS)
    }

    pub fn is_within_declared_bounds(&self) -> bool {
        self.declared_bounds().contains(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_is_inclusive() {
        let bounds = MountainRange::WesternGhats.bounds();
        assert!(bounds.contains(10.0, 76.0));
        assert!(bounds.contains(15.0, 77.0));
        assert!(!bounds.contains(15.01, 76.5));
        assert!(!bounds.contains(12.0, 75.99));
    }

    #[test]
    fn test_range_names_round_trip() {
        for range in MountainRange::ALL {
            assert_eq!(MountainRange::from_name(range.name()), Some(range));
        }
        assert_eq!(MountainRange::from_name("Aravalli"), None);
    }

    #[test]
    fn test_catalog_has_no_duplicates() {
        let mut states = INDIAN_STATES.to_vec();
        states.sort_unstable();
        states.dedup();
        assert_eq!(states.len(), INDIAN_STATES.len());
    }

    #[test]
    fn test_declared_bounds_follow_region() {
        let sample = SpringshedSample {
            latitude: 32.0,
            longitude: 78.0,
            springshed_count: 3,
            region: "Himalayas".to_string(),
            district: None,
        };
        assert!(sample.is_within_declared_bounds());

        let admin = SpringshedSample {
            region: "Kerala".to_string(),
            district: Some("DistrictA".to_string()),
            ..sample
        };
        // 32N is outside the administrative box
        assert!(!admin.is_within_declared_bounds());
    }
}
