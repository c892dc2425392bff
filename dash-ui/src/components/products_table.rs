//! Searchable product list.

use crate::components::{report, Card, ErrorDisplay};
use dash_data::filter;
use dash_data::format;
use dash_data::loader;
use dioxus::prelude::*;

pub(crate) const SEARCH_STYLE: &str = "background: #374151; color: #F3F4F6; border: none; border-radius: 8px; padding: 8px 16px; width: 240px;";
pub(crate) const TH_STYLE: &str = "padding: 12px 24px; text-align: left; font-size: 12px; font-weight: 500; color: #9CA3AF; text-transform: uppercase; letter-spacing: 0.05em;";
pub(crate) const TD_STYLE: &str = "padding: 16px 24px; white-space: nowrap; font-size: 14px; color: #D1D5DB; border-top: 1px solid #374151;";

#[component]
pub fn ProductsTable() -> Element {
    let products = use_hook(|| report("products", loader::load_products()));
    let mut query = use_signal(String::new);

    let body = match &products {
        Ok(products) => {
            let rows = filter::search_products(products, &query.read());
            rsx! {
                table {
                    style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: TH_STYLE, "Name" }
                            th { style: TH_STYLE, "Category" }
                            th { style: TH_STYLE, "Price" }
                            th { style: TH_STYLE, "Stock" }
                            th { style: TH_STYLE, "Sales" }
                        }
                    }
                    tbody {
                        for product in rows.into_iter() {
                            tr {
                                key: "{product.id}",
                                td { style: "{TD_STYLE} color: #F3F4F6; font-weight: 500;", "{product.name}" }
                                td { style: TD_STYLE, "{product.category}" }
                                td { style: TD_STYLE, {format::currency(product.price)} }
                                td { style: TD_STYLE, {format::count(product.stock.into())} }
                                td { style: TD_STYLE, {format::count(product.sales.into())} }
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
                h2 { style: "margin: 0; font-size: 20px; font-weight: 600; color: #F3F4F6;", "Product List" }
                input {
                    r#type: "text",
                    placeholder: "Search products...",
                    style: SEARCH_STYLE,
                    value: "{query}",
                    oninput: move |evt: Event<FormData>| query.set(evt.value()),
                }
            }
            div { style: "overflow-x: auto;", {body} }
        }
    }
}
