//! Device dropdown with a fetch button.

use crate::state::AppState;
use dioxus::prelude::*;
use sjl_core::sensor::DEVICE_IDS;

#[derive(Props, Clone, PartialEq)]
pub struct DeviceSelectorProps {
    /// Called with the selected device id when the button is pressed
    pub on_fetch: EventHandler<String>,
}

/// Device id selector. The button is disabled while a fetch is in flight.
#[component]
pub fn DeviceSelector(props: DeviceSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_device)();
    let loading = (state.loading)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_device.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "device-select",
                style: "font-weight: bold;",
                "Select Device ID: "
            }
            select {
                id: "device-select",
                onchange: on_change,
                for device_id in DEVICE_IDS {
                    option {
                        value: "{device_id}",
                        selected: device_id == selected,
                        "{device_id}"
                    }
                }
            }
            button {
                style: "padding: 6px 12px; cursor: pointer;",
                disabled: loading,
                onclick: move |_| props.on_fetch.call(selected.clone()),
                "Fetch Sensor Data"
            }
        }
    }
}
