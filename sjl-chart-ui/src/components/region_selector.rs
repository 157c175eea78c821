//! State and district selectors plus the mountain range toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use sjl_data::density::{districts, states};

/// State/district dropdowns over the current density table.
///
/// Changing the state resets the district to the first one present for
/// that state.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let samples = state.springsheds.read().clone();
    let selected_state = (state.selected_state)();
    let selected_district = (state.selected_district)();
    let show_all = (state.show_all_ranges)();

    let state_options = states(&samples);
    let district_options = districts(&samples, &selected_state);

    let on_state_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let first_district = districts(&state.springsheds.read(), &value)
            .into_iter()
            .next()
            .unwrap_or_default();
        state.selected_state.set(value);
        state.selected_district.set(first_district);
    };

    let on_district_change = move |evt: Event<FormData>| {
        state.selected_district.set(evt.value());
    };

    let on_toggle = move |_: Event<MouseData>| {
        state.show_all_ranges.set(!show_all);
    };

    let toggle_label = if show_all {
        "Show Selected District"
    } else {
        "Show All Springsheds in Indian Mountain Ranges"
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                style: "font-weight: bold;",
                "Select State: "
                select {
                    disabled: show_all,
                    onchange: on_state_change,
                    for name in state_options.iter() {
                        option {
                            value: "{name}",
                            selected: *name == selected_state,
                            "{name}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "Select District: "
                select {
                    disabled: show_all,
                    onchange: on_district_change,
                    for name in district_options.iter() {
                        option {
                            value: "{name}",
                            selected: *name == selected_district,
                            "{name}"
                        }
                    }
                }
            }
            button {
                style: "padding: 6px 12px; cursor: pointer;",
                onclick: on_toggle,
                "{toggle_label}"
            }
        }
    }
}
