//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// A container div for D3.js charts.
///
/// The placeholder text is replaced when D3 renders into the div.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
            div {
                style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #6B7280;",
                "Loading chart..."
            }
        }
    }
}
