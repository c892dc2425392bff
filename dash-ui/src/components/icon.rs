//! Stroke icons drawn from `dash_core::icon::Icon` path data.

use dash_core::icon::Icon;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct IconSvgProps {
    pub icon: Icon,
    #[props(default = 20)]
    pub size: u32,
    #[props(default = "currentColor".to_string())]
    pub color: String,
}

#[component]
pub fn IconSvg(props: IconSvgProps) -> Element {
    let size = props.size;
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{props.color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            style: "min-width: {size}px; flex-shrink: 0;",
            for d in props.icon.paths().iter() {
                path { d: "{d}" }
            }
        }
    }
}
