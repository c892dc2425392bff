//! Profile, notification preferences and account deletion. Nothing here is
//! persisted; toggles live in local signals for the lifetime of the page.

use super::MAIN_STYLE;
use dash_core::icon::Icon;
use dash_ui::components::{Card, IconSvg, PageHeader};
use dioxus::prelude::*;

const SECTION_TITLE_STYLE: &str = "display: flex; align-items: center; gap: 12px; margin: 0 0 16px 0; font-size: 20px; font-weight: 600; color: #F3F4F6;";

#[derive(Props, Clone, PartialEq)]
struct SectionTitleProps {
    icon: Icon,
    title: String,
    #[props(default = "#818CF8".to_string())]
    color: String,
}

#[component]
fn SectionTitle(props: SectionTitleProps) -> Element {
    rsx! {
        h2 {
            style: SECTION_TITLE_STYLE,
            IconSvg { icon: props.icon, size: 24, color: props.color.clone() }
            "{props.title}"
        }
    }
}

#[component]
fn Profile() -> Element {
    rsx! {
        Card {
            style: "margin-bottom: 32px;".to_string(),
            SectionTitle { icon: Icon::User, title: "Profile".to_string() }
            div {
                style: "display: flex; align-items: center; gap: 16px; margin-bottom: 24px;",
                div {
                    style: "width: 80px; height: 80px; border-radius: 9999px; background: linear-gradient(to right, #A855F7, #3B82F6); display: flex; align-items: center; justify-content: center; font-size: 28px; font-weight: 600; color: white;",
                    "JD"
                }
                div {
                    h3 { style: "margin: 0; font-size: 18px; font-weight: 600; color: #F3F4F6;", "John Doe" }
                    p { style: "margin: 4px 0 0 0; color: #9CA3AF;", "john.doe@example.com" }
                }
            }
            button {
                style: "background: #4F46E5; color: white; font-weight: 700; padding: 8px 16px; border: none; border-radius: 6px; cursor: pointer;",
                onclick: move |_| log::info!("settings: edit profile requested"),
                "Edit Profile"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ToggleRowProps {
    label: String,
    enabled: bool,
    on_toggle: EventHandler<()>,
}

#[component]
fn ToggleRow(props: ToggleRowProps) -> Element {
    let on_toggle = props.on_toggle;
    let (track, knob) = if props.enabled {
        ("#4F46E5", "translateX(24px)")
    } else {
        ("#4B5563", "translateX(0)")
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 0;",
            span { style: "color: #D1D5DB;", "{props.label}" }
            button {
                role: "switch",
                aria_checked: "{props.enabled}",
                style: "position: relative; width: 48px; height: 24px; border-radius: 9999px; border: none; padding: 0; cursor: pointer; background: {track};",
                onclick: move |_| on_toggle.call(()),
                span {
                    style: "position: absolute; top: 2px; left: 2px; width: 20px; height: 20px; border-radius: 9999px; background: white; transition: transform 0.2s; transform: {knob};",
                }
            }
        }
    }
}

#[component]
fn Notifications() -> Element {
    let mut email = use_signal(|| true);
    let mut push = use_signal(|| false);
    let mut sms = use_signal(|| true);

    rsx! {
        Card {
            style: "margin-bottom: 32px;".to_string(),
            SectionTitle { icon: Icon::Bell, title: "Notifications".to_string() }
            ToggleRow {
                label: "Email".to_string(),
                enabled: email(),
                on_toggle: move |_| email.toggle(),
            }
            ToggleRow {
                label: "Push Notifications".to_string(),
                enabled: push(),
                on_toggle: move |_| push.toggle(),
            }
            ToggleRow {
                label: "SMS".to_string(),
                enabled: sms(),
                on_toggle: move |_| sms.toggle(),
            }
        }
    }
}

#[component]
fn DangerZone() -> Element {
    rsx! {
        div {
            style: "background: rgba(127, 29, 29, 0.5); backdrop-filter: blur(12px); border-radius: 12px; padding: 24px; border: 1px solid #B91C1C; margin-bottom: 32px;",
            SectionTitle { icon: Icon::Trash2, title: "Danger Zone".to_string(), color: "#F87171".to_string() }
            p { style: "margin: 0 0 16px 0; color: #D1D5DB;", "Permanently delete your account and all of your content." }
            button {
                style: "background: #DC2626; color: white; font-weight: 700; padding: 8px 16px; border: none; border-radius: 6px; cursor: pointer;",
                onclick: move |_| log::warn!("settings: account deletion requested (not implemented)"),
                "Delete Account"
            }
        }
    }
}

#[component]
pub fn SettingsPage() -> Element {
    rsx! {
        PageHeader { title: "Settings".to_string() }
        main {
            style: "{MAIN_STYLE} max-width: 896px;",
            Profile {}
            Notifications {}
            DangerZone {}
        }
    }
}
