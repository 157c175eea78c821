//! Core types for the springshed dashboard.
//!
//! Holds the table shapes produced by the synthetic generators
//! ([`daily_record`], [`springshed`], [`device_stats`]), the region and
//! device catalogs, and the remote sensor store collaborator ([`remote`]).
//! The HTTP-backed store lives behind the `api` feature.

pub mod daily_record;
pub mod date_range;
pub mod device_stats;
pub mod error;
pub mod remote;
pub mod sensor;
pub mod springshed;

pub use error::{Result, SpringshedError};
