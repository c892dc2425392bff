//! Collapsible navigation sidebar.
//!
//! The state machine lives in `AppState.sidebar`; the toggle button flips it
//! synchronously and then starts a frame loop that moves the displayed width
//! toward the new state's width. Navigation goes through `on_navigate` and
//! never touches the sidebar state.

use crate::components::IconSvg;
use crate::js_bridge;
use crate::state::AppState;
use dash_core::icon::Icon;
use dash_core::nav::{nav_items, Page};
use dash_core::sidebar::SidebarTransition;
use dioxus::core::Task;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Page of the current route, highlighted in the list
    #[props(default)]
    pub active: Option<Page>,
    /// Called with the clicked item's page
    pub on_navigate: EventHandler<Page>,
}

#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let mut state = use_context::<AppState>();
    // Frame loop task; spawned in this scope, so it stops when the sidebar unmounts
    let mut animation: Signal<Option<Task>> = use_signal(|| None);

    let on_toggle = move |_| {
        state.sidebar.with_mut(|sidebar| sidebar.toggle());

        let target = (state.sidebar)();
        let transition = SidebarTransition::start(
            target,
            (state.sidebar_width)(),
            &state.config.read().sidebar,
        );

        // A toggle mid-animation restarts from the width on screen
        if let Some(task) = animation.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            let started = js_bridge::now_ms();
            loop {
                let elapsed = js_bridge::now_ms() - started;
                state.sidebar_width.set(transition.width_at(elapsed));
                state.label_opacity.set(transition.label_opacity_at(elapsed));
                if transition.is_finished(elapsed) {
                    break;
                }
                js_bridge::next_animation_frame().await;
            }
        });
        animation.set(Some(task));
    };

    let sidebar = (state.sidebar)();
    let width = (state.sidebar_width)();
    let opacity = (state.label_opacity)();
    let labels_visible = sidebar.labels_visible();
    let on_navigate = props.on_navigate;
    let active = props.active;

    rsx! {
        div {
            style: "position: relative; z-index: 10; flex-shrink: 0; width: {width}px;",
            div {
                style: "height: 100%; box-sizing: border-box; background: rgba(31, 41, 55, 0.5); backdrop-filter: blur(12px); padding: 16px; display: flex; flex-direction: column; border-right: 1px solid #374151;",
                button {
                    title: if labels_visible { "Collapse sidebar" } else { "Expand sidebar" },
                    style: "padding: 8px; border-radius: 9999px; border: none; background: transparent; color: #F3F4F6; cursor: pointer; max-width: fit-content;",
                    onclick: on_toggle,
                    IconSvg { icon: Icon::Menu, size: 24 }
                }
                nav {
                    style: "margin-top: 32px; flex-grow: 1;",
                    for item in nav_items().iter() {
                        a {
                            key: "{item.path}",
                            href: "{item.path}",
                            title: "{item.label}",
                            style: if active == Some(item.page) {
                                "display: flex; align-items: center; padding: 16px; margin-bottom: 8px; font-size: 14px; font-weight: 500; border-radius: 8px; color: #F3F4F6; text-decoration: none; background: #374151;"
                            } else {
                                "display: flex; align-items: center; padding: 16px; margin-bottom: 8px; font-size: 14px; font-weight: 500; border-radius: 8px; color: #F3F4F6; text-decoration: none;"
                            },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                log::debug!("sidebar: navigate to {}", item.path);
                                on_navigate.call(item.target());
                            },
                            IconSvg { icon: item.icon, size: 20, color: item.accent_color.to_string() }
                            if labels_visible {
                                span {
                                    style: "margin-left: 16px; white-space: nowrap; overflow: hidden; opacity: {opacity};",
                                    "{item.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
