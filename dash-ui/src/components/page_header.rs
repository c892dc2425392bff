//! Title bar at the top of every page.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header {
            style: "background: rgba(31, 41, 55, 0.5); backdrop-filter: blur(12px); box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3); border-bottom: 1px solid #374151;",
            div {
                style: "max-width: 1280px; margin: 0 auto; padding: 16px 32px;",
                h1 {
                    style: "margin: 0; font-size: 24px; font-weight: 600; color: #F3F4F6;",
                    "{props.title}"
                }
            }
        }
    }
}
