//! Icon set used by the navigation registry and stat cards.
//!
//! Each icon is a list of SVG path strings drawn with a stroke on a 24x24
//! viewbox. The UI crate wraps them in an `svg` element; the CLI prints names.

use crate::error::{DashError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    BarChart2,
    ShoppingBag,
    Users,
    DollarSign,
    ShoppingCart,
    TrendingUp,
    Settings,
    Menu,
    Package,
    AlertTriangle,
    UserPlus,
    UserCheck,
    Zap,
    Clock,
    CheckCircle,
    Bell,
    User,
    Trash2,
}

impl Icon {
    pub const ALL: [Icon; 18] = [
        Icon::BarChart2,
        Icon::ShoppingBag,
        Icon::Users,
        Icon::DollarSign,
        Icon::ShoppingCart,
        Icon::TrendingUp,
        Icon::Settings,
        Icon::Menu,
        Icon::Package,
        Icon::AlertTriangle,
        Icon::UserPlus,
        Icon::UserCheck,
        Icon::Zap,
        Icon::Clock,
        Icon::CheckCircle,
        Icon::Bell,
        Icon::User,
        Icon::Trash2,
    ];

    /// Kebab-case name, as used in fixtures.
    pub const fn name(self) -> &'static str {
        match self {
            Icon::BarChart2 => "bar-chart-2",
            Icon::ShoppingBag => "shopping-bag",
            Icon::Users => "users",
            Icon::DollarSign => "dollar-sign",
            Icon::ShoppingCart => "shopping-cart",
            Icon::TrendingUp => "trending-up",
            Icon::Settings => "settings",
            Icon::Menu => "menu",
            Icon::Package => "package",
            Icon::AlertTriangle => "alert-triangle",
            Icon::UserPlus => "user-plus",
            Icon::UserCheck => "user-check",
            Icon::Zap => "zap",
            Icon::Clock => "clock",
            Icon::CheckCircle => "check-circle",
            Icon::Bell => "bell",
            Icon::User => "user",
            Icon::Trash2 => "trash-2",
        }
    }

    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::BarChart2 => &["M18 20V10", "M12 20V4", "M6 20v-6"],
            Icon::ShoppingBag => &[
                "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z",
                "M3 6h18",
                "M16 10a4 4 0 0 1-8 0",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            Icon::ShoppingCart => &[
                "M8 20a1 1 0 1 0 0 2a1 1 0 1 0 0-2",
                "M19 20a1 1 0 1 0 0 2a1 1 0 1 0 0-2",
                "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12",
            ],
            Icon::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
            Icon::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
            ],
            Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Icon::Package => &[
                "m7.5 4.27 9 5.15",
                "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
                "m3.3 7 8.7 5 8.7-5",
                "M12 22V12",
            ],
            Icon::AlertTriangle => &[
                "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z",
                "M12 9v4",
                "M12 17h.01",
            ],
            Icon::UserPlus => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M19 8v6",
                "M22 11h-6",
            ],
            Icon::UserCheck => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "m16 11 2 2 4-4",
            ],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Clock => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20", "M12 6v6l4 2"],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Icon::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
            Icon::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
            ],
            Icon::Trash2 => &[
                "M3 6h18",
                "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
                "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
                "M10 11v6",
                "M14 11v6",
            ],
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| DashError::UnknownIcon(s.to_string()))
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for Icon {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>().unwrap(), icon);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "sparkles".parse::<Icon>().unwrap_err();
        assert!(matches!(err, DashError::UnknownIcon(name) if name == "sparkles"));
    }

    #[test]
    fn every_icon_has_paths() {
        assert!(Icon::ALL.iter().all(|icon| !icon.paths().is_empty()));
    }
}
