//! Display formatting for stat cards, tooltips and tables.

use crate::models::{StatMetric, Unit};

/// Group an integer with thousands separators: `1234567` -> `"1,234,567"`.
pub fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"$12,345"` for whole amounts, `"$78.90"` otherwise.
pub fn currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    if frac == 0 {
        format!("{}${}", sign, grouped(whole))
    } else {
        format!("{}${}.{:02}", sign, grouped(whole), frac)
    }
}

pub fn count(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, grouped(rounded.abs() as u64))
}

/// Up to two decimals, trailing zeros dropped: `12.5` -> `"12.5%"`.
pub fn percent(value: f64) -> String {
    let mut rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // drops the sign of -0.0
        rounded = 0.0;
    }
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", text)
}

/// Signed change: `"+12.5%"`, `"-2.1%"`. Changes that round to zero read `"+0%"`.
pub fn change(pct: f64) -> String {
    let text = percent(pct);
    if text.starts_with('-') {
        text
    } else {
        format!("+{}", text)
    }
}

pub fn with_unit(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Currency => currency(value),
        Unit::Count => count(value),
        Unit::Percent => percent(value),
    }
}

pub fn stat_value(metric: &StatMetric) -> String {
    with_unit(metric.value, metric.unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1000), "1,000");
        assert_eq!(grouped(1234567), "1,234,567");
    }

    #[test]
    fn currency_amounts() {
        assert_eq!(currency(12345.0), "$12,345");
        assert_eq!(currency(78.9), "$78.90");
        assert_eq!(currency(0.0), "$0");
        assert_eq!(currency(-5.5), "-$5.50");
    }

    #[test]
    fn percents() {
        assert_eq!(percent(12.5), "12.5%");
        assert_eq!(percent(3.45), "3.45%");
        assert_eq!(percent(2.0), "2%");
        assert_eq!(change(1.4), "+1.4%");
        assert_eq!(change(-2.1), "-2.1%");
    }

    #[test]
    fn tiny_negatives_round_to_unsigned_zero() {
        assert_eq!(percent(-0.004), "0%");
        assert_eq!(percent(-0.0), "0%");
        assert_eq!(change(-0.001), "+0%");
        assert_eq!(change(-0.006), "-0.01%");
    }

    #[test]
    fn counts() {
        assert_eq!(count(152845.0), "152,845");
        assert_eq!(count(-3.0), "-3");
    }
}
