//! Table of raw sensor fields.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ReadingsTableProps {
    /// (field, value) rows
    pub rows: Vec<(String, String)>,
}

#[component]
pub fn ReadingsTable(props: ReadingsTableProps) -> Element {
    rsx! {
        table {
            style: "border-collapse: collapse; margin: 8px 0; font-size: 13px;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 4px 12px; border-bottom: 2px solid #ccc;", "Sensor" }
                    th { style: "text-align: left; padding: 4px 12px; border-bottom: 2px solid #ccc;", "Value" }
                }
            }
            tbody {
                for (name, value) in props.rows.iter() {
                    tr {
                        key: "{name}",
                        td { style: "padding: 4px 12px; border-bottom: 1px solid #eee;", "{name}" }
                        td { style: "padding: 4px 12px; border-bottom: 1px solid #eee;", "{value}" }
                    }
                }
            }
        }
    }
}
