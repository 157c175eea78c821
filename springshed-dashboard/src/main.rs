//! Springshed Admin Panel
//!
//! Single-page dashboard with four views picked from the sidebar:
//! 1. Rainfall vs Spring Discharge: the synthetic daily series for a chosen
//!    year, rainfall bars with a discharge line.
//! 2. Springshed Availability: random springshed locations filtered by state
//!    and district, or every Indian mountain range at once.
//! 3. Sensor Data Visualization: live readings for one IoT device fetched
//!    from the real-time database.
//! 4. Device Statistics: share of active devices vs. springs without one.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/remote.json` into `OUT_DIR`; it is embedded
//!    with `include_str!` and parsed once at startup.
//! 2. The remote store is built from it and provided through context.
//! 3. Each view generates its table, turns it into a JSON payload and hands
//!    it to the D3.js bridge.

use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sjl_chart_ui::components::{
    ChartContainer, ChartHeader, DeviceSelector, ErrorDisplay, FeatureSelector, InfoDisplay,
    LoadingSpinner, ReadingsTable, RegionSelector, YearSelector,
};
use sjl_chart_ui::js_bridge;
use sjl_chart_ui::state::{AppState, Feature};
use sjl_core::remote::{fetch_outcome, FetchOutcome, FirebaseStore, RemoteConfig};
use sjl_data::density::{self, RegionFilter};
use sjl_data::devices::{generate_device_stats, DEFAULT_NUM_DEVICES, DEFAULT_NUM_SPRINGS};
use sjl_data::{chart, series};

// Remote store config ({"databaseURL": ...}) embedded at compile time.
const REMOTE_CONFIG_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/remote.json"));

/// DOM ids for the D3 chart container divs.
const SERIES_CHART_ID: &str = "series-chart";
const GEO_CHART_ID: &str = "springshed-map";
const SENSOR_CHART_ID: &str = "sensor-chart";
const DEVICE_CHART_ID: &str = "device-stats-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("springshed-root"))
        .launch(App);
}

/// Build the remote store from the embedded config, falling back to the
/// default database when the config is unusable.
fn build_store() -> FirebaseStore {
    match RemoteConfig::from_json_str(REMOTE_CONFIG_JSON) {
        Ok(config) => FirebaseStore::new(config),
        Err(e) => {
            log::error!("{}; using default database", e);
            FirebaseStore::new(RemoteConfig::default())
        }
    }
}

/// Random source for views that regenerate on every render.
fn render_rng(nonce: u64) -> StdRng {
    StdRng::seed_from_u64((js_sys::Date::now() as u64) ^ nonce)
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    use_context_provider(build_store);

    // Initialize D3 chart scripts (one-time)
    use_effect(js_bridge::init_charts);

    let view = match (state.feature)() {
        Feature::RainfallDischarge => rsx! { RainfallView {} },
        Feature::SpringshedAvailability => rsx! { SpringshedView {} },
        Feature::SensorData => rsx! { SensorView {} },
        Feature::DeviceStatistics => rsx! { DeviceStatsView {} },
    };

    rsx! {
        div {
            style: "display: flex; font-family: system-ui, -apple-system, sans-serif;",
            FeatureSelector {}
            main {
                style: "flex: 1; max-width: 960px; padding: 16px;",
                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }
                {view}
            }
        }
    }
}

#[component]
fn RainfallView() -> Element {
    let mut state = use_context::<AppState>();

    // Re-render whenever the year changes.
    use_effect(move || {
        let year = (state.selected_year)();
        match series::generate_year_series(year) {
            Ok(records) => {
                let data_json = chart::combo_series(&records).to_string();
                let config_json = chart::combo_config(year).to_string();
                js_bridge::render_combo_chart(SERIES_CHART_ID, &data_json, &config_json);
            }
            Err(e) => state.error_msg.set(Some(e.to_string())),
        }
    });

    rsx! {
        ChartHeader {
            title: "Realistic Simulation of Rainfall vs Spring Discharge".to_string(),
            description: "Select a year to visualize the rainfall and spring discharge data.".to_string(),
        }
        YearSelector {}
        ChartContainer {
            id: SERIES_CHART_ID.to_string(),
            min_height: 440,
            caption: "Darker bars mark heavy-rain days.".to_string(),
        }
    }
}

#[component]
fn SpringshedView() -> Element {
    let mut state = use_context::<AppState>();

    // ─── Effect 1: fresh administrative table on entering the view ───
    use_effect(move || {
        let nonce = *state.render_nonce.peek() + 1;
        state.render_nonce.set(nonce);
        let samples = density::generate_regional_density(RegionFilter::Administrative, &mut render_rng(nonce));
        let first_state = density::states(&samples).into_iter().next().unwrap_or_default();
        let first_district = density::districts(&samples, &first_state)
            .into_iter()
            .next()
            .unwrap_or_default();
        state.selected_state.set(first_state);
        state.selected_district.set(first_district);
        state.springsheds.set(samples);
    });

    // ─── Effect 2: render the selection or every mountain range ───
    use_effect(move || {
        let samples = state.springsheds.read().clone();
        let show_all = (state.show_all_ranges)();
        let selected_state = (state.selected_state)();
        let selected_district = (state.selected_district)();

        if samples.is_empty() {
            return;
        }

        let (shown, title) = if show_all {
            let nonce = *state.render_nonce.peek();
            (
                density::generate_regional_density(RegionFilter::MountainRanges, &mut render_rng(nonce)),
                chart::MOUNTAIN_RANGES_TITLE.to_string(),
            )
        } else {
            (
                density::filter_samples(&samples, &selected_state, Some(selected_district.as_str())),
                chart::selection_title(&selected_state, &selected_district),
            )
        };

        let data_json = chart::geo_points(&shown, show_all).to_string();
        let config_json = chart::geo_config(&title, &shown).to_string();
        js_bridge::render_geo_scatter(GEO_CHART_ID, &data_json, &config_json);
    });

    rsx! {
        ChartHeader {
            title: "Springshed Availability in India".to_string(),
            description: "Select a state and district to visualize the availability of springsheds, or view all springsheds in Indian mountain ranges.".to_string(),
        }
        RegionSelector {}
        ChartContainer {
            id: GEO_CHART_ID.to_string(),
            min_height: 480,
            caption: "Point size shows the number of springsheds.".to_string(),
        }
    }
}

#[component]
fn SensorView() -> Element {
    let mut state = use_context::<AppState>();
    let store = use_context::<FirebaseStore>();

    // Draw the bar chart once a reading arrives.
    use_effect(move || {
        if let Some(reading) = state.sensor_reading.read().as_ref() {
            let data_json = chart::sensor_bars(reading).to_string();
            let config_json = chart::sensor_config(&reading.device_id).to_string();
            js_bridge::render_bar_chart(SENSOR_CHART_ID, &data_json, &config_json);
        }
    });

    let reading = state.sensor_reading.read().clone();

    rsx! {
        ChartHeader {
            title: "IoT Sensor Data Visualization".to_string(),
            description: "Select an IoT device ID to fetch and visualize the sensor data.".to_string(),
        }
        DeviceSelector {
            on_fetch: move |device_id: String| {
                let store = store.clone();
                state.clear_messages();
                state.sensor_reading.set(None);
                state.loading.set(true);
                js_bridge::destroy_chart(SENSOR_CHART_ID);
                spawn(async move {
                    match fetch_outcome(&store, &device_id).await {
                        Ok(FetchOutcome::Found(reading)) => state.sensor_reading.set(Some(reading)),
                        Ok(outcome) => state.info_msg.set(outcome.message().map(str::to_string)),
                        Err(e) => {
                            log::error!("Sensor fetch for {} failed: {}", device_id, e);
                            state.error_msg.set(Some(e.to_string()));
                        }
                    }
                    state.loading.set(false);
                });
            },
        }
        if (state.loading)() {
            LoadingSpinner {}
        }
        if let Some(message) = state.info_msg.read().as_ref() {
            InfoDisplay { message: message.clone() }
        }
        if let Some(reading) = reading {
            ReadingsTable { rows: reading.display_rows() }
            ChartContainer {
                id: SENSOR_CHART_ID.to_string(),
                min_height: 200,
            }
        }
    }
}

#[component]
fn DeviceStatsView() -> Element {
    let mut state = use_context::<AppState>();

    // Re-runs when the regenerate button bumps the nonce.
    use_effect(move || {
        let nonce = (state.render_nonce)();
        let stats = generate_device_stats(DEFAULT_NUM_DEVICES, DEFAULT_NUM_SPRINGS, &mut render_rng(nonce));
        let data_json = chart::pie_slices(&stats).to_string();
        let config_json = chart::pie_config().to_string();
        js_bridge::render_pie_chart(DEVICE_CHART_ID, &data_json, &config_json);
    });

    rsx! {
        ChartHeader {
            title: "Device Statistics".to_string(),
            description: format!(
                "{} devices across {} springs; under 30% of springs lack a device.",
                DEFAULT_NUM_DEVICES, DEFAULT_NUM_SPRINGS
            ),
        }
        ChartContainer {
            id: DEVICE_CHART_ID.to_string(),
            min_height: 400,
        }
        button {
            style: "padding: 6px 12px; cursor: pointer;",
            onclick: move |_| {
                let nonce = *state.render_nonce.peek();
                state.render_nonce.set(nonce + 1);
            },
            "Regenerate"
        }
    }
}
