//! Dashboard chrome: background, sidebar and the routed page beside it.

use crate::routes::AppRoute;
use dash_core::nav::Page;
use dash_ui::components::Sidebar;
use dioxus::prelude::*;

#[component]
pub fn Shell() -> Element {
    let route = use_route::<AppRoute>();
    let navigator = use_navigator();

    rsx! {
        div {
            style: "display: flex; height: 100vh; background: #111827; color: #F3F4F6; overflow: hidden; font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "position: fixed; inset: 0; z-index: 0; background: linear-gradient(to bottom right, #111827, #1F2937, #111827); opacity: 0.8; pointer-events: none;",
            }
            Sidebar {
                active: route.page(),
                on_navigate: move |page: Page| {
                    navigator.push(AppRoute::from(page));
                },
            }
            div {
                style: "flex: 1; overflow: auto; position: relative; z-index: 10;",
                Outlet::<AppRoute> {}
            }
        }
    }
}
