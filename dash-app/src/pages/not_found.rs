//! Fallback for paths outside the route table. Rendered inside the shell so
//! the sidebar stays usable.

use super::MAIN_STYLE;
use crate::routes::AppRoute;
use dash_core::nav::Page;
use dash_ui::components::{Card, PageHeader};
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let logged = path.clone();
    use_hook(move || log::warn!("no route for {}", logged));

    rsx! {
        PageHeader { title: "Page Not Found".to_string() }
        main {
            style: MAIN_STYLE,
            Card {
                p {
                    style: "margin: 0 0 16px 0; color: #D1D5DB;",
                    "Nothing lives at "
                    code { "{path}" }
                    "."
                }
                div {
                    style: "color: #818CF8;",
                    Link { to: AppRoute::from(Page::Overview), "Back to Overview" }
                }
            }
        }
    }
}
