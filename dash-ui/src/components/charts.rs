//! Chart cards: static dataset in, D3 chart out.
//!
//! Each card loads its fixture once, builds the JSON payload the matching
//! script in `assets/js` expects, and renders through `js_bridge` after
//! mount. None of them hold state beyond the loaded rows.

use crate::components::{report, Card, ChartContainer, ChartHeader, ErrorDisplay};
use crate::js_bridge;
use dash_data::format;
use dash_data::loader;
use dash_data::models::{CategoryDatum, SeriesPoint, TargetPoint, Unit};
use dash_data::pie::{self, PieSlice, PALETTE};
use dash_data::Dataset;
use dioxus::prelude::*;
use serde_json::json;

const CHART_HEIGHT: u32 = 320;

/// Outer radius of the pie, in pixels.
const PIE_RADIUS: u32 = 80;

fn container_id(dataset: Dataset) -> String {
    format!("{}-chart", dataset.name())
}

pub(crate) fn pie_payload(slices: &[PieSlice], unit: Unit) -> String {
    let rows: Vec<serde_json::Value> = slices
        .iter()
        .map(|s| {
            json!({
                "name": s.name,
                "startAngle": s.start_angle,
                "endAngle": s.end_angle,
                "color": s.color,
                "label": s.label,
                "percent": s.percent,
                "valueText": format::with_unit(s.value, unit),
            })
        })
        .collect();
    serde_json::to_string(&rows).unwrap_or_default()
}

pub(crate) fn bar_payload(data: &[CategoryDatum]) -> String {
    let rows: Vec<serde_json::Value> = data
        .iter()
        .enumerate()
        .map(|(i, d)| json!({ "name": d.name, "value": d.value, "color": pie::color_for(i, &PALETTE) }))
        .collect();
    serde_json::to_string(&rows).unwrap_or_default()
}

pub(crate) fn target_payload(data: &[TargetPoint]) -> String {
    json!({
        "labels": data.iter().map(|d| d.label.as_str()).collect::<Vec<_>>(),
        "series": [
            {
                "name": "Revenue",
                "color": "#8B5CF6",
                "dashed": false,
                "values": data.iter().map(|d| d.revenue).collect::<Vec<_>>(),
            },
            {
                "name": "Target",
                "color": "#10B981",
                "dashed": true,
                "values": data.iter().map(|d| d.target).collect::<Vec<_>>(),
            },
        ],
    })
    .to_string()
}

#[derive(Props, Clone, PartialEq)]
pub struct PieChartCardProps {
    pub title: String,
    pub dataset: Dataset,
    /// How values read in the tooltip
    #[props(default = Unit::Count)]
    pub unit: Unit,
}

/// Proportional chart with slice labels, tooltip and legend.
#[component]
pub fn PieChartCard(props: PieChartCardProps) -> Element {
    let dataset = props.dataset;
    let data = use_hook(move || report(dataset.name(), loader::load_categories(dataset)));

    let slices = match &data {
        Ok(data) => pie::layout(data, &PALETTE),
        Err(_) => Vec::new(),
    };
    let id = container_id(dataset);
    let data_json = pie_payload(&slices, props.unit);
    let config_json = json!({ "height": CHART_HEIGHT, "outerRadius": PIE_RADIUS }).to_string();
    let has_slices = !slices.is_empty();

    let effect_id = id.clone();
    use_effect(use_reactive!(|(effect_id, data_json, config_json, has_slices)| {
        if has_slices {
            js_bridge::render_pie_chart(&effect_id, &data_json, &config_json);
        }
    }));
    let drop_id = id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    rsx! {
        Card {
            ChartHeader { title: props.title.clone() }
            match (&data, has_slices) {
                (Err(message), _) => rsx! { ErrorDisplay { message: message.clone() } },
                (Ok(_), true) => rsx! {
                    ChartContainer { id: id.clone(), min_height: CHART_HEIGHT }
                    ul {
                        style: "list-style: none; margin: 8px 0 0 0; padding: 0; display: flex; flex-wrap: wrap; justify-content: center; gap: 8px 16px;",
                        for slice in slices.iter() {
                            li {
                                key: "{slice.name}",
                                style: "display: flex; align-items: center; gap: 6px; font-size: 12px; color: {slice.color};",
                                span {
                                    style: "display: inline-block; width: 10px; height: 10px; background: {slice.color};",
                                }
                                "{slice.name}"
                            }
                        }
                    }
                },
                (Ok(_), false) => rsx! {
                    p {
                        style: "color: #9CA3AF; text-align: center; padding: 40px 0;",
                        "No data to display."
                    }
                },
            }
        }
    }
}

/// Product category shares on the overview and products pages.
#[component]
pub fn CategoryDistributionChart() -> Element {
    rsx! {
        PieChartCard {
            title: "Category Distribution".to_string(),
            dataset: Dataset::CategoryDistribution,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LineChartCardProps {
    pub title: String,
    pub dataset: Dataset,
    /// Name shown in the tooltip
    pub series_name: String,
    #[props(default = "#6366F1".to_string())]
    pub color: String,
    /// Prepended to tooltip values, e.g. "$"
    #[props(default = String::new())]
    pub value_prefix: String,
}

#[component]
pub fn LineChartCard(props: LineChartCardProps) -> Element {
    let dataset = props.dataset;
    let data = use_hook(move || report(dataset.name(), loader::load_series(dataset)));

    let id = container_id(dataset);
    let data_json = match &data {
        Ok(points) => serde_json::to_string::<Vec<SeriesPoint>>(points).unwrap_or_default(),
        Err(_) => String::new(),
    };
    let config_json = json!({
        "height": CHART_HEIGHT,
        "color": props.color,
        "seriesName": props.series_name,
        "valuePrefix": props.value_prefix,
    })
    .to_string();

    let effect_id = id.clone();
    use_effect(use_reactive!(|(effect_id, data_json, config_json)| {
        if !data_json.is_empty() {
            js_bridge::render_line_chart(&effect_id, &data_json, &config_json);
        }
    }));
    let drop_id = id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    rsx! {
        Card {
            ChartHeader { title: props.title.clone() }
            match &data {
                Ok(_) => rsx! { ChartContainer { id: id.clone(), min_height: CHART_HEIGHT } },
                Err(message) => rsx! { ErrorDisplay { message: message.clone() } },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct BarChartCardProps {
    pub title: String,
    pub dataset: Dataset,
    #[props(default = String::new())]
    pub value_prefix: String,
}

#[component]
pub fn BarChartCard(props: BarChartCardProps) -> Element {
    let dataset = props.dataset;
    let data = use_hook(move || report(dataset.name(), loader::load_categories(dataset)));

    let id = container_id(dataset);
    let data_json = match &data {
        Ok(rows) => bar_payload(rows),
        Err(_) => String::new(),
    };
    let config_json = json!({ "height": CHART_HEIGHT, "valuePrefix": props.value_prefix }).to_string();

    let effect_id = id.clone();
    use_effect(use_reactive!(|(effect_id, data_json, config_json)| {
        if !data_json.is_empty() {
            js_bridge::render_bar_chart(&effect_id, &data_json, &config_json);
        }
    }));
    let drop_id = id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    rsx! {
        Card {
            ChartHeader { title: props.title.clone() }
            match &data {
                Ok(_) => rsx! { ChartContainer { id: id.clone(), min_height: CHART_HEIGHT } },
                Err(message) => rsx! { ErrorDisplay { message: message.clone() } },
            }
        }
    }
}

/// Monthly revenue against target, on the analytics page.
#[component]
pub fn RevenueTargetChart() -> Element {
    let data = use_hook(|| report(Dataset::RevenueTarget.name(), loader::load_targets()));

    let id = container_id(Dataset::RevenueTarget);
    let data_json = match &data {
        Ok(points) => target_payload(points),
        Err(_) => String::new(),
    };
    let config_json = json!({ "height": CHART_HEIGHT, "valuePrefix": "$" }).to_string();

    let effect_id = id.clone();
    use_effect(use_reactive!(|(effect_id, data_json, config_json)| {
        if !data_json.is_empty() {
            js_bridge::render_multi_line_chart(&effect_id, &data_json, &config_json);
        }
    }));
    let drop_id = id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    rsx! {
        Card {
            ChartHeader {
                title: "Revenue vs Target".to_string(),
                subtitle: "Dashed line shows the monthly target".to_string(),
            }
            match &data {
                Ok(_) => rsx! { ChartContainer { id: id.clone(), min_height: CHART_HEIGHT } },
                Err(message) => rsx! { ErrorDisplay { message: message.clone() } },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_payload_carries_angles_colors_and_text() {
        let data = loader::load_categories(Dataset::CategoryDistribution).unwrap();
        let slices = pie::layout(&data, &PALETTE);
        let payload: serde_json::Value = serde_json::from_str(&pie_payload(&slices, Unit::Currency)).unwrap();
        let first = &payload[0];
        assert_eq!(first["name"], "Electronics");
        assert_eq!(first["color"], "#6366F1");
        assert_eq!(first["label"], "Electronics 31%");
        assert_eq!(first["valueText"], "$4,500");
        assert_eq!(first["startAngle"], 0.0);
        assert_eq!(payload.as_array().unwrap().len(), 5);
    }

    #[test]
    fn bar_payload_cycles_palette() {
        let data = loader::load_categories(Dataset::ChannelPerformance).unwrap();
        let payload: serde_json::Value = serde_json::from_str(&bar_payload(&data)).unwrap();
        let rows = payload.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["color"], PALETTE[0]);
        assert_eq!(rows[5]["color"], PALETTE[0]);
    }

    #[test]
    fn target_payload_has_two_series() {
        let data = loader::load_targets().unwrap();
        let payload: serde_json::Value = serde_json::from_str(&target_payload(&data)).unwrap();
        assert_eq!(payload["labels"].as_array().unwrap().len(), data.len());
        assert_eq!(payload["series"][0]["name"], "Revenue");
        assert_eq!(payload["series"][1]["dashed"], true);
        assert_eq!(payload["series"][1]["values"][0], 3800.0);
    }

    #[test]
    fn container_ids_follow_dataset_names() {
        assert_eq!(container_id(Dataset::CategoryDistribution), "category-distribution-chart");
    }
}
