//! Card chrome shared by charts, tables and stat cards.

use dioxus::prelude::*;

pub(crate) const CARD_STYLE: &str = "background: rgba(31, 41, 55, 0.5); backdrop-filter: blur(12px); \
     box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3); border-radius: 12px; padding: 24px; \
     border: 1px solid #374151;";

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Extra inline style appended to the card chrome
    #[props(default = String::new())]
    pub style: String,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            style: "{CARD_STYLE} {props.style}",
            {props.children}
        }
    }
}
