//! Informational message component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InfoDisplayProps {
    pub message: String,
}

/// Non-fatal notice, e.g. when a device has nothing stored.
#[component]
pub fn InfoDisplay(props: InfoDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #E3F2FD; color: #1565C0; border-radius: 4px; border: 1px solid #90CAF9;",
            "{props.message}"
        }
    }
}
