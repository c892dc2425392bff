//! Date range picker with start and end date inputs.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangePickerProps {
    /// `YYYY-MM-DD` or empty
    pub start: String,
    pub end: String,
    pub on_start_change: EventHandler<String>,
    pub on_end_change: EventHandler<String>,
}

/// Controlled pair of date inputs; the owner keeps the values.
#[component]
pub fn DateRangePicker(props: DateRangePickerProps) -> Element {
    let on_start_change = props.on_start_change;
    let on_end_change = props.on_end_change;

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; color: #9CA3AF; font-size: 14px;",
            label {
                "From "
                input {
                    r#type: "date",
                    style: "background: #374151; color: #F3F4F6; border: none; border-radius: 6px; padding: 6px 8px;",
                    value: "{props.start}",
                    onchange: move |evt: Event<FormData>| on_start_change.call(evt.value()),
                }
            }
            label {
                "To "
                input {
                    r#type: "date",
                    style: "background: #374151; color: #F3F4F6; border: none; border-radius: 6px; padding: 6px 8px;",
                    value: "{props.end}",
                    onchange: move |evt: Event<FormData>| on_end_change.call(evt.value()),
                }
            }
        }
    }
}
