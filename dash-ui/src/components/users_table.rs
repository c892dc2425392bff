//! Searchable user list with avatar initials and a status badge.

use super::products_table::{SEARCH_STYLE, TD_STYLE, TH_STYLE};
use crate::components::{report, Card, ErrorDisplay};
use dash_data::filter;
use dash_data::loader;
use dash_data::models::UserStatus;
use dioxus::prelude::*;

fn status_badge(status: UserStatus) -> (&'static str, &'static str) {
    match status {
        UserStatus::Active => ("Active", "background: rgba(6, 78, 59, 0.6); color: #A7F3D0;"),
        UserStatus::Inactive => ("Inactive", "background: rgba(127, 29, 29, 0.6); color: #FECACA;"),
    }
}

#[component]
pub fn UsersTable() -> Element {
    let users = use_hook(|| report("users", loader::load_users()));
    let mut query = use_signal(String::new);

    let body = match &users {
        Ok(users) => {
            let rows: Vec<_> = filter::search_users(users, &query.read())
                .into_iter()
                .map(|user| {
                    let (label, badge) = status_badge(user.status);
                    let initials = user.initials();
                    (user, label, badge, initials)
                })
                .collect();
            rsx! {
                table {
                    style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: TH_STYLE, "Name" }
                            th { style: TH_STYLE, "Email" }
                            th { style: TH_STYLE, "Role" }
                            th { style: TH_STYLE, "Status" }
                        }
                    }
                    tbody {
                        for (user, label, badge, initials) in rows.into_iter() {
                            tr {
                                key: "{user.id}",
                                td {
                                    style: TD_STYLE,
                                    div {
                                        style: "display: flex; align-items: center; gap: 16px;",
                                        div {
                                            style: "width: 40px; height: 40px; border-radius: 9999px; background: linear-gradient(to right, #A855F7, #3B82F6); display: flex; align-items: center; justify-content: center; color: white; font-weight: 600;",
                                            "{initials}"
                                        }
                                        span { style: "color: #F3F4F6; font-weight: 500;", "{user.name}" }
                                    }
                                }
                                td { style: TD_STYLE, "{user.email}" }
                                td {
                                    style: TD_STYLE,
                                    span {
                                        style: "padding: 2px 8px; border-radius: 9999px; font-size: 12px; font-weight: 600; background: rgba(30, 58, 138, 0.6); color: #BFDBFE;",
                                        "{user.role}"
                                    }
                                }
                                td {
                                    style: TD_STYLE,
                                    span {
                                        style: "padding: 2px 8px; border-radius: 9999px; font-size: 12px; font-weight: 600; {badge}",
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Err(message) => rsx! { ErrorDisplay { message: message.clone() } },
    };

    rsx! {
        Card {
            style: "margin-bottom: 32px;".to_string(),
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;",
                h2 { style: "margin: 0; font-size: 20px; font-weight: 600; color: #F3F4F6;", "Users" }
                input {
                    r#type: "text",
                    placeholder: "Search users...",
                    style: SEARCH_STYLE,
                    value: "{query}",
                    oninput: move |evt: Event<FormData>| query.set(evt.value()),
                }
            }
            div { style: "overflow-x: auto;", {body} }
        }
    }
}
