//! Sidebar radio group for choosing a dashboard view.

use crate::state::{AppState, Feature};
use dioxus::prelude::*;

/// Admin panel sidebar. Switching view clears any leftover messages.
#[component]
pub fn FeatureSelector() -> Element {
    let state = use_context::<AppState>();
    let current = (state.feature)();

    rsx! {
        nav {
            style: "width: 220px; flex-shrink: 0; padding: 16px; background: #F5F5F5; border-right: 1px solid #e0e0e0; min-height: 100vh;",
            h2 { style: "margin: 0 0 12px 0; font-size: 18px;", "Admin Panel" }
            p { style: "font-size: 12px; color: #666; margin: 0 0 8px 0;", "Select a Feature" }
            for feature in Feature::ALL {
                label {
                    key: "{feature.label()}",
                    style: "display: block; margin: 6px 0; cursor: pointer; font-size: 14px;",
                    input {
                        r#type: "radio",
                        name: "feature",
                        checked: feature == current,
                        onchange: move |_| {
                            let mut state = state;
                            state.clear_messages();
                            state.feature.set(feature);
                        },
                    }
                    " {feature.label()}"
                }
            }
        }
    }
}
