//! Order list filtered by status and date window.

use super::products_table::{TD_STYLE, TH_STYLE};
use crate::components::{report, Card, DateRangePicker, ErrorDisplay};
use dash_data::filter::{self, DateWindow, StatusFilter};
use dash_data::format;
use dash_data::loader;
use dash_data::models::OrderStatus;
use dioxus::prelude::*;

#[component]
pub fn OrdersTable() -> Element {
    let orders = use_hook(|| report("orders", loader::load_orders()));
    let mut status = use_signal(StatusFilter::default);
    let mut start = use_signal(String::new);
    let mut end = use_signal(String::new);

    let window = DateWindow::parse(&start.read(), &end.read());

    let body = match (&orders, window) {
        (Err(message), _) => rsx! { ErrorDisplay { message: message.clone() } },
        (Ok(_), Err(e)) => {
            log::warn!("orders: bad date filter: {}", e);
            rsx! { ErrorDisplay { message: format!("Invalid date range: {}", e) } }
        }
        (Ok(orders), Ok(window)) => {
            let rows = filter::filter_orders(orders, status(), window);
            rsx! {
                table {
                    style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: TH_STYLE, "Order ID" }
                            th { style: TH_STYLE, "Customer" }
                            th { style: TH_STYLE, "Total" }
                            th { style: TH_STYLE, "Status" }
                            th { style: TH_STYLE, "Date" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td {
                                    colspan: "5",
                                    style: "{TD_STYLE} text-align: center; color: #9CA3AF;",
                                    "No orders match the current filters."
                                }
                            }
                        }
                        for order in rows.into_iter() {
                            tr {
                                key: "{order.id}",
                                td { style: "{TD_STYLE} color: #F3F4F6; font-weight: 500;", "{order.id}" }
                                td { style: TD_STYLE, "{order.customer}" }
                                td { style: TD_STYLE, {format::currency(order.total)} }
                                td {
                                    style: TD_STYLE,
                                    span {
                                        style: "padding: 2px 8px; border-radius: 9999px; font-size: 12px; font-weight: 600; color: #111827; background: {order.status.color()};",
                                        "{order.status}"
                                    }
                                }
                                td { style: TD_STYLE, {order.date.format("%Y-%m-%d").to_string()} }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Card {
            style: "margin-bottom: 32px;".to_string(),
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: space-between; align-items: center; margin-bottom: 24px;",
                h2 { style: "margin: 0; font-size: 20px; font-weight: 600; color: #F3F4F6;", "Order List" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
                    select {
                        style: "background: #374151; color: #F3F4F6; border: none; border-radius: 8px; padding: 8px 12px;",
                        value: "{status().value()}",
                        onchange: move |evt: Event<FormData>| {
                            // Parsing never fails; unknown values mean "all"
                            if let Ok(filter) = evt.value().parse::<StatusFilter>() {
                                status.set(filter);
                            }
                        },
                        option { value: "all", "All statuses" }
                        for s in OrderStatus::ALL {
                            option {
                                key: "{s.label()}",
                                value: StatusFilter::Only(s).value(),
                                "{s.label()}"
                            }
                        }
                    }
                    DateRangePicker {
                        start: start(),
                        end: end(),
                        on_start_change: move |value: String| start.set(value),
                        on_end_change: move |value: String| end.set(value),
                    }
                }
            }
            div { style: "overflow-x: auto;", {body} }
        }
    }
}
