//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
    /// Small print under the chart
    #[props(default = String::new())]
    pub caption: String,
}

/// A container div D3.js renders into, with an optional caption.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
        if !props.caption.is_empty() {
            p {
                style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                "{props.caption}"
            }
        }
    }
}
