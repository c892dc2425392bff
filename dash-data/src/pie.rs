//! Pie chart layout.
//!
//! Turns `{name, value}` rows into slices: each slice's angle is proportional
//! to `value / sum(values)`, slices run clockwise from 12 o'clock (0 rad, the
//! D3 arc convention) in data order, and the color cycles through a palette.

use crate::models::CategoryDatum;
use serde::Serialize;
use std::f64::consts::TAU;

/// Default slice palette.
pub const PALETTE: [&str; 5] = ["#6366F1", "#8B5CF6", "#EC4899", "#10B981", "#F59E0B"];

/// Fill used when a palette is empty.
const FALLBACK_COLOR: &str = "#8884d8";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    /// Share of the total in `[0, 1]`
    pub fraction: f64,
    /// Share of the total in whole percent, rounded to nearest
    pub percent: u32,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
    /// Slice label, e.g. `"Electronics 31%"`
    pub label: String,
}

/// `palette[index % palette.len()]`.
pub fn color_for<'a>(index: usize, palette: &[&'a str]) -> &'a str {
    if palette.is_empty() {
        FALLBACK_COLOR
    } else {
        palette[index % palette.len()]
    }
}

pub fn total(data: &[CategoryDatum]) -> f64 {
    data.iter().map(|d| d.value).sum()
}

/// Lay out one slice per row. Returns no slices when the total is zero.
///
/// ```
/// use dash_data::models::CategoryDatum;
/// use dash_data::pie::{layout, PALETTE};
///
/// let data = vec![
///     CategoryDatum { name: "A".into(), value: 3.0 },
///     CategoryDatum { name: "B".into(), value: 1.0 },
/// ];
/// let slices = layout(&data, &PALETTE);
/// assert_eq!(slices[0].percent, 75);
/// assert_eq!(slices[1].label, "B 25%");
/// ```
pub fn layout(data: &[CategoryDatum], palette: &[&str]) -> Vec<PieSlice> {
    let sum = total(data);
    if sum <= 0.0 || !sum.is_finite() {
        log::debug!("pie: nothing to draw (total {})", sum);
        return Vec::new();
    }

    let mut angle = 0.0;
    data.iter()
        .enumerate()
        .map(|(index, datum)| {
            let fraction = datum.value / sum;
            let percent = (fraction * 100.0).round() as u32;
            let start_angle = angle;
            angle += fraction * TAU;
            PieSlice {
                name: datum.name.clone(),
                value: datum.value,
                fraction,
                percent,
                start_angle,
                end_angle: angle,
                color: color_for(index, palette).to_string(),
                label: format!("{} {}%", datum.name, percent),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<CategoryDatum> {
        [
            ("Electronics", 4500.0),
            ("Clothing", 3200.0),
            ("Home & Garden", 2800.0),
            ("Books", 2100.0),
            ("Sports & Outdoors", 1900.0),
        ]
        .into_iter()
        .map(|(name, value)| CategoryDatum {
            name: name.to_string(),
            value,
        })
        .collect()
    }

    #[test]
    fn electronics_slice() {
        let slices = layout(&categories(), &PALETTE);
        let electronics = &slices[0];
        assert_eq!(electronics.percent, 31);
        assert_eq!(electronics.color, "#6366F1");
        assert_eq!(electronics.label, "Electronics 31%");
        assert!((electronics.fraction - 4500.0 / 14500.0).abs() < 1e-12);
    }

    #[test]
    fn percentages_sum_to_about_100() {
        let data = categories();
        let slices = layout(&data, &PALETTE);
        let sum: i64 = slices.iter().map(|s| s.percent as i64).sum();
        // each label is off by at most half a percent
        let tolerance = (data.len() as f64 / 2.0).floor() as i64;
        assert!((sum - 100).abs() <= tolerance, "sum was {sum}");
    }

    #[test]
    fn angles_cover_the_circle_in_order() {
        let slices = layout(&categories(), &PALETTE);
        assert_eq!(slices[0].start_angle, 0.0);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        let last = slices.last().unwrap();
        assert!((last.end_angle - TAU).abs() < 1e-9);

        let electronics = &slices[0];
        let sweep = electronics.end_angle - electronics.start_angle;
        assert!((sweep / TAU - electronics.fraction).abs() < 1e-12);
    }

    #[test]
    fn colors_cycle_through_the_palette() {
        let mut data = categories();
        data.push(CategoryDatum {
            name: "Toys".to_string(),
            value: 500.0,
        });
        let slices = layout(&data, &PALETTE);
        assert_eq!(slices[5].color, PALETTE[0]);
        assert_eq!(color_for(7, &PALETTE), PALETTE[2]);
        assert_eq!(color_for(3, &[]), FALLBACK_COLOR);
    }

    #[test]
    fn zero_total_draws_nothing() {
        assert!(layout(&[], &PALETTE).is_empty());
        let zeros = vec![
            CategoryDatum {
                name: "A".to_string(),
                value: 0.0,
            },
            CategoryDatum {
                name: "B".to_string(),
                value: 0.0,
            },
        ];
        assert!(layout(&zeros, &PALETTE).is_empty());
    }

    #[test]
    fn zero_value_row_gets_an_empty_slice() {
        let data = vec![
            CategoryDatum {
                name: "A".to_string(),
                value: 10.0,
            },
            CategoryDatum {
                name: "B".to_string(),
                value: 0.0,
            },
        ];
        let slices = layout(&data, &PALETTE);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[1].percent, 0);
        assert_eq!(slices[1].start_angle, slices[1].end_angle);
    }
}
