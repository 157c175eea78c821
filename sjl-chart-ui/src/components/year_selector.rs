//! Dropdown selector for the series year.

use crate::state::{AppState, YEARS};
use dioxus::prelude::*;

/// Year dropdown. Updates selected_year on change.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_year)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.selected_year.set(year);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Year: "
            }
            select {
                id: "year-select",
                onchange: on_change,
                for year in YEARS {
                    option {
                        value: "{year}",
                        selected: year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
