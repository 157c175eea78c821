//! Synthetic data generation for the springshed dashboard.
//!
//! This crate produces the tables the dashboard charts: a daily rainfall
//! vs. spring discharge series per calendar year ([`series`]), springshed
//! density samples ([`density`]) and IoT coverage statistics ([`devices`]).
//! [`chart`] turns those tables into JSON payloads for the D3.js bridge.
//!
//! The yearly series is seeded from the year itself, so the same year always
//! yields the same table. Density and device statistics draw from a random
//! source owned by the caller.

pub mod chart;
pub mod density;
pub mod devices;
pub mod series;

/// Sample-size guards shared by the generators.
pub mod sampling {
    use sjl_core::SpringshedError;

    /// Clamp a without-replacement sample size to what is available.
    ///
    /// An oversized request is logged as a degenerate range and shrunk
    /// rather than treated as a failure.
    pub fn clamp_sample_size(requested: usize, available: usize, what: &str) -> usize {
        if requested > available {
            log::warn!(
                "{}",
                SpringshedError::DegenerateInputRange(format!(
                    "{} {} requested from {} available",
                    requested, what, available
                ))
            );
            available
        } else {
            requested
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_clamp_sample_size() {
            assert_eq!(clamp_sample_size(20, 365, "days"), 20);
            assert_eq!(clamp_sample_size(20, 20, "days"), 20);
            assert_eq!(clamp_sample_size(20, 7, "days"), 7);
            assert_eq!(clamp_sample_size(3, 0, "days"), 0);
        }
    }
}
