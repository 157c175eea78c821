//! Reusable Dioxus RSX components for the springshed dashboard.

mod chart_container;
mod chart_header;
mod device_selector;
mod error_display;
mod feature_selector;
mod info_display;
mod loading_spinner;
mod readings_table;
mod region_selector;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use device_selector::DeviceSelector;
pub use error_display::ErrorDisplay;
pub use feature_selector::FeatureSelector;
pub use info_display::InfoDisplay;
pub use loading_spinner::LoadingSpinner;
pub use readings_table::ReadingsTable;
pub use region_selector::RegionSelector;
pub use year_selector::YearSelector;
