//! Chart header component with title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Short explanation under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h2 {
                style: "margin: 0; font-size: 18px; font-weight: 500; color: #F3F4F6;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #9CA3AF;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
